use crate::canvas::CanvasSurface;
use crate::constants::STATS_LOG_INTERVAL_FRAMES;
use crate::input::{self, HostClock};
use crate::overlay::SpeedIndicator;
use instant::Instant;
use mosaic_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub indicator: SpeedIndicator,
    pub clock: HostClock,
    pub last_instant: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = input::frame_delta_ms(self.last_instant, now);
        self.last_instant = now;

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        let mut session = self.session.borrow_mut();
        session.on_tick(dt_ms, self.clock.now_ms());
        let stats = session.on_draw(&mut self.surface, width, height);
        self.indicator.sync(&session.speed_display());

        self.frames += 1;
        if self.frames % STATS_LOG_INTERVAL_FRAMES == 0 {
            let state = session.state();
            log::debug!(
                "[frame] #{} clock={:.0}ms speed={:.2} mode={:?} tiles={} fills={} rects={}",
                self.frames,
                session.clock_ms(),
                state.speed,
                state.mode,
                stats.tiles,
                stats.fill_changes,
                stats.rects
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
