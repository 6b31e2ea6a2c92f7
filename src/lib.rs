#![cfg(target_arch = "wasm32")]
use crate::constants::{HIGH_DPI, LOG_LEVEL};
use instant::Instant;
use mosaic_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas, HIGH_DPI);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, HIGH_DPI);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("mosaic-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::stage_canvas(&document)?;
    // Backing size must be right before the first frame reads it.
    wire_canvas_resize(&canvas);
    let ctx = dom::context_2d(&canvas)?;

    let session = Rc::new(RefCell::new(Session::new(&mut rand::thread_rng())));
    log::info!(
        "[session] clock starts at {:.0}ms",
        session.borrow().clock_ms()
    );
    let clock = input::HostClock::start();

    events::wire_input_handlers(events::InputWiring {
        session: session.clone(),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        surface: canvas::CanvasSurface::new(ctx),
        canvas,
        indicator: overlay::SpeedIndicator::find(&document),
        clock,
        last_instant: Instant::now(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
