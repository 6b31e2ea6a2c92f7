use crate::constants::{SPEED_DISPLAY_SELECTOR, VISIBLE_CLASS};
use mosaic_core::SpeedDisplay;
use web_sys as web;

/// The "Speed: N%" text node. Only touches the DOM when the display changes.
pub struct SpeedIndicator {
    el: Option<web::Element>,
    shown: Option<SpeedDisplay>,
}

impl SpeedIndicator {
    pub fn find(document: &web::Document) -> Self {
        let el = document.query_selector(SPEED_DISPLAY_SELECTOR).ok().flatten();
        if el.is_none() {
            log::warn!(
                "[overlay] no {} element; speed changes will not be shown",
                SPEED_DISPLAY_SELECTOR
            );
        }
        Self { el, shown: None }
    }

    pub fn sync(&mut self, display: &SpeedDisplay) {
        let Some(el) = &self.el else {
            return;
        };
        if self.shown.as_ref() == Some(display) {
            return;
        }
        let cl = el.class_list();
        if display.visible {
            _ = cl.add_1(VISIBLE_CLASS);
        } else {
            _ = cl.remove_1(VISIBLE_CLASS);
        }
        el.set_text_content(Some(&display.text));
        self.shown = Some(display.clone());
    }
}
