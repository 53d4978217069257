use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use trace_core::{GestureRecorder, TraceInput};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::new(x_css, y_css);
    }
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

fn listen(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let added = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    if let Err(e) = added {
        log::error!("[pointer] failed to listen for {kind}: {:?}", e);
    }
    closure.forget();
}

/// Route canvas pointer events into the session input. Down is captured on
/// the canvas so the gesture keeps tracking when the pointer leaves it; up
/// and cancel both finish the trace.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, input: TraceInput) {
    let gesture = Rc::new(RefCell::new(GestureRecorder::default()));

    // pointerdown
    {
        let gesture = gesture.clone();
        let input = input.clone();
        let canvas_down = canvas.clone();
        listen(canvas.as_ref(), "pointerdown", move |ev| {
            if let Err(e) = canvas_down.set_pointer_capture(ev.pointer_id()) {
                log::debug!("[pointer] set pointer capture failed: {:?}", e);
            }
            let p = pointer_canvas_px(&ev, &canvas_down);
            gesture.borrow_mut().pointer_down(p, &input);
            ev.prevent_default();
        });
    }

    // pointermove
    {
        let gesture = gesture.clone();
        let input = input.clone();
        let canvas_move = canvas.clone();
        listen(canvas.as_ref(), "pointermove", move |ev| {
            if !gesture.borrow().is_active() {
                return;
            }
            let p = pointer_canvas_px(&ev, &canvas_move);
            gesture.borrow_mut().pointer_move(p, &input);
        });
    }

    // pointerup / pointercancel
    for kind in ["pointerup", "pointercancel"] {
        let gesture = gesture.clone();
        let input = input.clone();
        let canvas_up = canvas.clone();
        listen(canvas.as_ref(), kind, move |ev| {
            let p = pointer_canvas_px(&ev, &canvas_up);
            gesture.borrow_mut().pointer_up(p, &input);
            if let Err(e) = canvas_up.release_pointer_capture(ev.pointer_id()) {
                log::debug!("[pointer] release pointer capture failed: {:?}", e);
            }
        });
    }
}
