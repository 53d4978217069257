use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use trace_core::TraceSession;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasPainter;

pub struct FrameContext {
    pub session: TraceSession,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub start: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.start.elapsed();
        self.painter
            .begin_frame(self.canvas.width() as f64, self.canvas.height() as f64);
        self.session.frame(now, &mut self.painter);
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
