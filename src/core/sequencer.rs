//! Record/playback sequencer.
//!
//! Three mutually exclusive modes: idle, recording, playing. Playback lays one
//! cue per event onto a [`TimerQueue`] plus a pass-completion cue and keeps the
//! handle of each; the host pumps [`Sequencer::tick`] and receives the replayed
//! triggers. Stopping cancels every outstanding handle.

use crate::config::{normalize_key, Tune};
use crate::core::clock::Clock;
use crate::core::constants::PASS_GAP;
use crate::core::timers::{TaskId, TimerQueue};
use std::rc::Rc;
use std::time::Duration;

/// A captured key press, timed from the start of its recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedEvent {
    pub offset: Duration,
    pub key: char,
}

impl RecordedEvent {
    pub const fn at_millis(ms: u64, key: char) -> Self {
        Self {
            offset: Duration::from_millis(ms),
            key,
        }
    }
}

/// Where a trigger came from. Replayed triggers are never recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Live,
    Replay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trigger {
    pub key: char,
    pub origin: Origin,
}

impl Trigger {
    pub fn live(key: char) -> Self {
        Self {
            key,
            origin: Origin::Live,
        }
    }

    pub fn replay(key: char) -> Self {
        Self {
            key,
            origin: Origin::Replay,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackSource {
    /// The user's recording; may loop.
    Recording,
    /// A preset tune, played once.
    Tune(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Recording,
    Playing(PlaybackSource),
}

#[derive(Clone, Copy, Debug)]
enum Cue {
    Replay(char),
    PassEnd,
}

pub struct Sequencer<C: Clock> {
    clock: C,
    mode: Mode,
    buffer: Vec<RecordedEvent>,
    // Previous take, restored if a recording ends empty.
    previous: Vec<RecordedEvent>,
    record_start: Duration,
    loop_enabled: bool,
    pass_events: Rc<[RecordedEvent]>,
    cues: TimerQueue<Cue>,
    // Handles of cues scheduled and not yet fired.
    outstanding: Vec<TaskId>,
    count_observer: Option<Box<dyn FnMut(usize)>>,
}

impl<C: Clock> Sequencer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            mode: Mode::Idle,
            buffer: Vec::new(),
            previous: Vec::new(),
            record_start: Duration::ZERO,
            loop_enabled: false,
            pass_events: Rc::from(Vec::new()),
            cues: TimerQueue::new(),
            outstanding: Vec::new(),
            count_observer: None,
        }
    }

    /// Observe the recorded event count. Called immediately with the current count.
    pub fn set_count_observer(&mut self, mut observer: impl FnMut(usize) + 'static) {
        observer(self.buffer.len());
        self.count_observer = Some(Box::new(observer));
    }

    fn publish_count(&mut self) {
        let n = self.buffer.len();
        if let Some(observer) = self.count_observer.as_mut() {
            observer(n);
        }
    }

    pub fn start_recording(&mut self) -> bool {
        if self.mode != Mode::Idle {
            log::debug!("[seq] record refused in {:?}", self.mode);
            return false;
        }
        self.previous = std::mem::take(&mut self.buffer);
        self.record_start = self.clock.now();
        self.mode = Mode::Recording;
        log::info!("[seq] recording");
        self.publish_count();
        true
    }

    /// Finish recording. An empty take brings back the previous one.
    pub fn stop_recording(&mut self) -> bool {
        if self.mode != Mode::Recording {
            return false;
        }
        if self.buffer.is_empty() {
            self.buffer = self.previous.clone();
        }
        self.mode = Mode::Idle;
        log::info!("[seq] recorded {} events", self.buffer.len());
        self.publish_count();
        true
    }

    pub fn toggle_recording(&mut self) -> bool {
        match self.mode {
            Mode::Idle => self.start_recording(),
            Mode::Recording => self.stop_recording(),
            Mode::Playing(_) => {
                log::debug!("[seq] record refused while playing");
                false
            }
        }
    }

    /// Append a live trigger while recording. Replays and triggers outside a
    /// recording are ignored.
    pub fn capture(&mut self, trigger: Trigger) -> bool {
        if trigger.origin != Origin::Live || self.mode != Mode::Recording {
            return false;
        }
        let offset = self.clock.now().saturating_sub(self.record_start);
        self.buffer.push(RecordedEvent {
            offset,
            key: normalize_key(trigger.key),
        });
        self.publish_count();
        true
    }

    /// Play the recorded buffer. Refused while recording or playing, or when
    /// nothing has been recorded.
    pub fn play(&mut self) -> bool {
        if self.mode != Mode::Idle || self.buffer.is_empty() {
            log::debug!(
                "[seq] play refused in {:?} with {} events",
                self.mode,
                self.buffer.len()
            );
            return false;
        }
        let events = Rc::from(self.buffer.as_slice());
        self.begin_playback(PlaybackSource::Recording, events);
        true
    }

    /// Play a preset tune once. Same exclusivity rules as [`Sequencer::play`].
    pub fn play_tune(&mut self, tune: &'static Tune) -> bool {
        if self.mode != Mode::Idle || tune.events.is_empty() {
            log::debug!("[seq] tune {} refused in {:?}", tune.id, self.mode);
            return false;
        }
        self.begin_playback(PlaybackSource::Tune(tune.id), Rc::from(tune.events));
        true
    }

    fn begin_playback(&mut self, source: PlaybackSource, events: Rc<[RecordedEvent]>) {
        self.cancel_outstanding();
        self.pass_events = events;
        self.mode = Mode::Playing(source);
        log::info!("[seq] playing {:?} ({} events)", source, self.pass_events.len());
        self.schedule_pass(self.clock.now());
    }

    fn schedule_pass(&mut self, start: Duration) {
        let events = Rc::clone(&self.pass_events);
        for ev in events.iter() {
            let id = self.cues.schedule_at(start + ev.offset, Cue::Replay(ev.key));
            self.outstanding.push(id);
        }
        let last = events.last().map_or(Duration::ZERO, |ev| ev.offset);
        let id = self.cues.schedule_at(start + last + PASS_GAP, Cue::PassEnd);
        self.outstanding.push(id);
    }

    // Cancel every handle still held, returning how many were pending.
    fn cancel_outstanding(&mut self) -> usize {
        let mut dropped = 0;
        for id in self.outstanding.drain(..) {
            if self.cues.cancel(id) {
                dropped += 1;
            }
        }
        dropped
    }

    /// Stop playback, cancelling every pending cue.
    pub fn stop(&mut self) -> bool {
        if !matches!(self.mode, Mode::Playing(_)) {
            return false;
        }
        let dropped = self.cancel_outstanding();
        self.mode = Mode::Idle;
        log::info!("[seq] stopped ({} cues cancelled)", dropped);
        true
    }

    /// Takes effect when the current pass completes.
    pub fn set_loop(&mut self, enabled: bool) {
        self.loop_enabled = enabled;
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.loop_enabled = !self.loop_enabled;
        self.loop_enabled
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// Fire every cue due by now, pushing replayed triggers into `out` in
    /// deadline order. A looping pass that completes here restarts from now.
    pub fn tick(&mut self, out: &mut Vec<Trigger>) {
        let now = self.clock.now();
        let mut fired = false;
        while let Some((_, cue)) = self.cues.pop_due(now) {
            fired = true;
            match cue {
                Cue::Replay(key) => out.push(Trigger::replay(key)),
                Cue::PassEnd => self.finish_pass(now),
            }
        }
        if fired {
            let cues = &self.cues;
            self.outstanding.retain(|id| cues.contains(*id));
        }
    }

    fn finish_pass(&mut self, now: Duration) {
        let looping =
            self.loop_enabled && self.mode == Mode::Playing(PlaybackSource::Recording);
        if looping {
            log::debug!("[seq] loop pass");
            self.schedule_pass(now);
        } else {
            self.cancel_outstanding();
            self.mode = Mode::Idle;
            log::info!("[seq] playback finished");
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_recording(&self) -> bool {
        self.mode == Mode::Recording
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.mode, Mode::Playing(_))
    }

    pub fn event_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.buffer
    }

    /// Outstanding cues, including the pass-completion cue.
    pub fn pending_cues(&self) -> usize {
        self.cues.len()
    }

    /// Handles of cues scheduled and not yet fired or cancelled.
    pub fn outstanding(&self) -> &[TaskId] {
        &self.outstanding
    }

    pub fn next_cue_at(&self) -> Option<Duration> {
        self.cues.next_deadline()
    }
}
