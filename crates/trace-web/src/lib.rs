#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use trace_core::{EffectParams, TraceSession};
use wasm_bindgen::prelude::*;

mod dom;
mod events;
mod frame;
mod render;

const CANVAS_ID: &str = "trace-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trace-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    dom::track_canvas_size(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    log::info!("[web] seed {seed}");
    let session = TraceSession::new(EffectParams::default(), seed)?;
    events::wire_pointer_handlers(&canvas, session.input());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        painter: render::CanvasPainter::new(ctx),
        canvas,
        start: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
