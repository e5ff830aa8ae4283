//! Transport controls: click wiring plus a per-frame sync of labels and
//! enabled states from the board's mode.

use crate::config::{KitId, ScaleId, TUNES};
use crate::constants::*;
use crate::core::{Clock, Mode, Sequencer};
use crate::dom::{add_click_listener, add_select_listener};
use crate::Board;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn play_label(events: usize) -> String {
    format!("Play ({})", events)
}

#[inline]
fn set_disabled(el: &web::Element, disabled: bool) {
    if disabled {
        _ = el.set_attribute("disabled", "");
    } else {
        _ = el.remove_attribute("disabled");
    }
}

#[inline]
fn set_hidden(el: &web::Element, hidden: bool) {
    _ = el.class_list().toggle_with_force("hidden", hidden);
}

#[inline]
fn set_active(el: &web::Element, active: bool) {
    _ = el.class_list().toggle_with_force("active", active);
    _ = el.set_attribute("aria-pressed", if active { "true" } else { "false" });
}

/// Keep the Play button label in step with the recorded event count.
pub fn bind_event_count<C: Clock>(document: &web::Document, sequencer: &mut Sequencer<C>) {
    let doc = document.clone();
    sequencer.set_count_observer(move |n| {
        if let Some(el) = doc.get_element_by_id(PLAY_BUTTON_ID) {
            el.set_text_content(Some(&play_label(n)));
        }
    });
}

pub fn wire_controls(document: &web::Document, board: &Rc<RefCell<Board>>) {
    let b = board.clone();
    add_click_listener(document, RECORD_BUTTON_ID, move || {
        let mut b = b.borrow_mut();
        b.audio_mut().resume();
        b.toggle_recording();
    });
    let b = board.clone();
    add_click_listener(document, PLAY_BUTTON_ID, move || {
        let mut b = b.borrow_mut();
        b.audio_mut().resume();
        b.play();
    });
    let b = board.clone();
    add_click_listener(document, STOP_BUTTON_ID, move || {
        b.borrow_mut().stop();
    });
    let b = board.clone();
    add_click_listener(document, LOOP_BUTTON_ID, move || {
        b.borrow_mut().toggle_loop();
    });
    for tune in TUNES.iter() {
        let b = board.clone();
        let id = format!("{}{}", TUNE_BUTTON_PREFIX, tune.id);
        add_click_listener(document, &id, move || {
            let mut b = b.borrow_mut();
            b.audio_mut().resume();
            b.play_tune(tune);
        });
    }

    let b = board.clone();
    add_select_listener(document, SCALE_SELECT_ID, move |value| {
        match ScaleId::from_id(&value) {
            Some(scale) => b.borrow_mut().set_scale(scale),
            None => log::warn!("[ui] unknown scale {:?}", value),
        }
    });
    let b = board.clone();
    add_select_listener(document, KIT_SELECT_ID, move |value| {
        match KitId::from_id(&value) {
            Some(kit) => b.borrow_mut().set_kit(kit),
            None => log::warn!("[ui] unknown kit {:?}", value),
        }
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ControlsView {
    mode: Mode,
    events: usize,
    looping: bool,
}

/// Applies control state to the DOM only when it changed since the last frame.
#[derive(Default)]
pub struct ControlsBinding {
    last: Option<ControlsView>,
}

impl ControlsBinding {
    pub fn sync(&mut self, document: &web::Document, board: &Board) {
        let seq = board.sequencer();
        let view = ControlsView {
            mode: seq.mode(),
            events: seq.event_count(),
            looping: seq.loop_enabled(),
        };
        if self.last == Some(view) {
            return;
        }
        self.last = Some(view);
        apply(document, view);
    }
}

fn apply(document: &web::Document, view: ControlsView) {
    let recording = view.mode == Mode::Recording;
    let playing = matches!(view.mode, Mode::Playing(_));
    let empty = view.events == 0;

    if let Some(el) = document.get_element_by_id(RECORD_BUTTON_ID) {
        el.set_text_content(Some(if recording { "Stop" } else { "Record" }));
        set_active(&el, recording);
        set_disabled(&el, playing);
    }
    if let Some(el) = document.get_element_by_id(PLAY_BUTTON_ID) {
        set_hidden(&el, playing);
        set_disabled(&el, empty || recording);
    }
    if let Some(el) = document.get_element_by_id(STOP_BUTTON_ID) {
        set_hidden(&el, !playing);
    }
    if let Some(el) = document.get_element_by_id(LOOP_BUTTON_ID) {
        set_active(&el, view.looping);
        set_disabled(&el, empty);
    }
    for tune in TUNES.iter() {
        let id = format!("{}{}", TUNE_BUTTON_PREFIX, tune.id);
        if let Some(el) = document.get_element_by_id(&id) {
            set_disabled(&el, view.mode != Mode::Idle);
        }
    }
}
