use crate::audio::WebAudioSink;
use crate::canvas::Canvas2dSurface;
use crate::config::{KitId, ScaleId};
use crate::constants::CANVAS_ID;
use crate::core::{EngineError, HostClock, Soundboard};
use crate::frame::FrameLoop;
use crate::{dom, events, frame, overlay, Board};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundboard starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Page teardown: stop playback, retire the engine and cancel the next frame.
// A page entering the back/forward cache is kept alive and resumes as is.
fn wire_teardown(board: Rc<RefCell<Board>>, frame_loop: Rc<RefCell<FrameLoop>>) {
    let Some(window) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            log::debug!("[page] hidden into bfcache; keeping engine");
            return;
        }
        board.borrow_mut().destroy();
        frame_loop.borrow_mut().stop();
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| EngineError::MissingElement(CANVAS_ID.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);
    let surface = Canvas2dSurface::from_canvas(&canvas)?;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let mut board = Soundboard::new(
        Some(surface),
        HostClock::new(),
        WebAudioSink::default(),
        ScaleId::Pentatonic,
        KitId::Bleeps,
        seed,
    )?;
    board.set_reduced_motion(dom::prefers_reduced_motion());
    overlay::bind_event_count(&document, board.sequencer_mut());
    let board = Rc::new(RefCell::new(board));

    events::wire_keyboard(board.clone());
    events::wire_touch_grid(&document, board.clone());
    overlay::wire_controls(&document, &board);

    let mut controls = overlay::ControlsBinding::default();
    let doc = document.clone();
    let frame_loop = frame::start_loop(board.clone(), move |b| controls.sync(&doc, b));
    wire_teardown(board, frame_loop);
    log::info!("soundboard ready");
    Ok(())
}
