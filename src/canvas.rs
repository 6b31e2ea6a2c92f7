use mosaic_core::{Fill, Rect, Surface};
use web_sys as web;

/// `mosaic_core::Surface` over a Canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    #[inline]
    fn set_fill(&mut self, fill: &Fill) {
        self.ctx.set_fill_style_str(&fill.css());
    }

    #[inline]
    fn fill_rect(&mut self, rect: Rect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }
}
