//! Wiring between input, the sequencer, the visual engine and audio.
//!
//! Every trigger, live or replayed, goes through [`Soundboard::trigger`]: the
//! sequencer decides whether to record it, then the engine spawns a shape and
//! the audio sink sounds the note, modulated by the engine's mood.

use crate::config::{KeyMap, KeyMapEntry, KitId, ScaleId, Tune};
use crate::core::clock::Clock;
use crate::core::engine::{VisualContext, VisualEngine};
use crate::core::error::EngineError;
use crate::core::sequencer::{Sequencer, Trigger};
use crate::core::surface::Surface;

/// Synthesis capability. The board decides when to sound a key; the sink
/// decides how.
pub trait AudioSink {
    fn play(&mut self, entry: &KeyMapEntry, mood: f32);
}

pub struct Soundboard<S: Surface, C: Clock + Clone, A: AudioSink> {
    engine: VisualEngine<S, C>,
    sequencer: Sequencer<C>,
    keymap: KeyMap,
    audio: A,
    reduced_motion: bool,
    fired: Vec<Trigger>,
}

impl<S: Surface, C: Clock + Clone, A: AudioSink> Soundboard<S, C, A> {
    pub fn new(
        surface: Option<S>,
        clock: C,
        audio: A,
        scale: ScaleId,
        kit: KitId,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let engine = VisualEngine::new(surface, clock.clone(), seed)?;
        Ok(Self {
            engine,
            sequencer: Sequencer::new(clock),
            keymap: KeyMap::build(scale, kit),
            audio,
            reduced_motion: false,
            fired: Vec::new(),
        })
    }

    /// A key pressed by the user.
    pub fn press(&mut self, key: char) -> bool {
        self.trigger(Trigger::live(key))
    }

    /// Route one trigger. Unmapped keys, and every key once the board has
    /// been destroyed, are ignored.
    pub fn trigger(&mut self, trigger: Trigger) -> bool {
        if !self.engine.is_running() {
            return false;
        }
        let Some(entry) = self.keymap.get(trigger.key).copied() else {
            return false;
        };
        self.sequencer.capture(trigger);
        let ctx = self.visual_context();
        self.engine.trigger(entry.key, &self.keymap, ctx);
        let mood = self.engine.mood();
        self.audio.play(&entry, mood);
        true
    }

    /// Per-frame work: fire due playback cues, then advance and draw visuals.
    pub fn tick(&mut self) {
        let mut fired = std::mem::take(&mut self.fired);
        self.sequencer.tick(&mut fired);
        for t in fired.drain(..) {
            self.trigger(t);
        }
        self.fired = fired;
        self.engine.frame();
    }

    pub fn visual_context(&self) -> VisualContext {
        VisualContext {
            scale: self.keymap.scale(),
            kit: self.keymap.kit(),
            reduced_motion: self.reduced_motion,
        }
    }

    pub fn set_scale(&mut self, scale: ScaleId) {
        if scale != self.keymap.scale() {
            self.keymap = KeyMap::build(scale, self.keymap.kit());
            log::info!("[board] scale {}", scale.as_str());
        }
    }

    pub fn set_kit(&mut self, kit: KitId) {
        if kit != self.keymap.kit() {
            self.keymap = KeyMap::build(self.keymap.scale(), kit);
            log::info!("[board] kit {}", kit.as_str());
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn toggle_recording(&mut self) -> bool {
        self.sequencer.toggle_recording()
    }

    pub fn play(&mut self) -> bool {
        self.sequencer.play()
    }

    pub fn play_tune(&mut self, tune: &'static Tune) -> bool {
        self.sequencer.play_tune(tune)
    }

    pub fn stop(&mut self) -> bool {
        self.sequencer.stop()
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.sequencer.toggle_loop()
    }

    /// Host teardown: halt playback and retire the engine.
    pub fn destroy(&mut self) {
        self.sequencer.stop();
        self.engine.destroy();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn mood(&self) -> f32 {
        self.engine.mood()
    }

    pub fn engine(&self) -> &VisualEngine<S, C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut VisualEngine<S, C> {
        &mut self.engine
    }

    pub fn sequencer(&self) -> &Sequencer<C> {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer<C> {
        &mut self.sequencer
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
