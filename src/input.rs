use glam::DVec2;
use instant::Instant;
use web_sys as web;

/// Wall clock for the host, in milliseconds since the page started the mosaic.
#[derive(Clone, Copy, Debug)]
pub struct HostClock {
    started: Instant,
}

impl HostClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

#[inline]
pub fn frame_delta_ms(prev: Instant, now: Instant) -> f64 {
    (now - prev).as_secs_f64() * 1000.0
}

#[inline]
pub fn finite_point(x: f64, y: f64) -> Option<DVec2> {
    (x.is_finite() && y.is_finite()).then(|| DVec2::new(x, y))
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Option<DVec2> {
    finite_point(ev.client_x() as f64, ev.client_y() as f64)
}

/// Window inner size in CSS pixels, the frame of reference for pointer coordinates.
pub fn viewport_size(window: &web::Window) -> Option<DVec2> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    finite_point(w, h).filter(|s| s.x > 0.0 && s.y > 0.0)
}
