use crate::Board;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Handle to the animation-frame chain. Each frame yields back to the
/// browser; `stop` cancels the pending frame so nothing runs afterwards.
pub struct FrameLoop {
    state: LoopState,
    raf_id: Option<i32>,
}

impl FrameLoop {
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_next(frame_loop: &Rc<RefCell<FrameLoop>>, tick: &TickSlot) {
    let Some(w) = web::window() else { return };
    let slot = tick.borrow();
    let Some(cb) = slot.as_ref() else { return };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => frame_loop.borrow_mut().raf_id = Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame error: {:?}", e);
            frame_loop.borrow_mut().state = LoopState::Stopped;
        }
    }
}

/// Drive `board` once per animation frame. `after_frame` runs with the board
/// after each tick (UI binding). The loop stops itself once the engine is
/// destroyed.
pub fn start_loop(
    board: Rc<RefCell<Board>>,
    mut after_frame: impl FnMut(&Board) + 'static,
) -> Rc<RefCell<FrameLoop>> {
    let frame_loop = Rc::new(RefCell::new(FrameLoop {
        state: LoopState::Running,
        raf_id: None,
    }));
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_next = tick.clone();
    let loop_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        loop_tick.borrow_mut().raf_id = None;
        if loop_tick.borrow().state == LoopState::Stopped {
            return;
        }
        {
            let mut b = board.borrow_mut();
            b.tick();
            if !b.is_running() {
                loop_tick.borrow_mut().stop();
            }
            after_frame(&*b);
        }
        if loop_tick.borrow().state == LoopState::Running {
            request_next(&loop_tick, &tick_next);
        }
    }) as Box<dyn FnMut()>));
    request_next(&frame_loop, &tick);
    frame_loop
}
