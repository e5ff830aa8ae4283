use crate::config::parse_key;
use crate::constants::KEY_ATTRIBUTE;
use crate::Board;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Key carried by the touch-grid cell under the pointer, if any.
fn key_under_pointer(ev: &web::PointerEvent) -> Option<char> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let cell = target.closest(&format!("[{}]", KEY_ATTRIBUTE)).ok()??;
    parse_key(&cell.get_attribute(KEY_ATTRIBUTE)?)
}

/// Pointer presses on any `[data-key]` element play that key.
pub fn wire_touch_grid(document: &web::Document, board: Rc<RefCell<Board>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(key) = key_under_pointer(&ev) {
            ev.prevent_default();
            let mut b = board.borrow_mut();
            b.audio_mut().resume();
            b.press(key);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
