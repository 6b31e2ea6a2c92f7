use crate::constants::{CANVAS_ID, CANVAS_STYLE};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The stage canvas, created full-window when the page does not provide one.
pub fn stage_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el,
        None => {
            let el = document
                .create_element("canvas")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_id(CANVAS_ID);
            _ = el.set_attribute("style", CANVAS_STYLE);
            let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
            body.append_child(&el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            log::info!("[dom] created #{}", CANVAS_ID);
            el
        }
    };
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, high_dpi: bool) {
    if let Some(w) = web::window() {
        let dpr = if high_dpi { w.device_pixel_ratio() } else { 1.0 };
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        // Zero-sized backing is fine: the rasterizer draws an empty grid.
        if canvas.width() != w_px {
            canvas.set_width(w_px);
        }
        if canvas.height() != h_px {
            canvas.set_height(h_px);
        }
    }
}
