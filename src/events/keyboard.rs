use crate::config::parse_key;
use crate::Board;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, board: &Rc<RefCell<Board>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(key) = parse_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    let mut b = board.borrow_mut();
    b.audio_mut().resume();
    b.press(key);
}

pub fn wire_keyboard(board: Rc<RefCell<Board>>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &board);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
