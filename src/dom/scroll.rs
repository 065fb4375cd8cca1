//! The page's scrollable background, as a [`ScrollSurface`].
//!
//! Freezing fixes the body in place at the negative of the captured scroll
//! offset and pads the vanished scrollbar's width back in, so nothing under
//! the modal shifts; restoring writes the captured style values back
//! verbatim and re-scrolls.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::LightboxError;
use crate::scroll_lock::{LockedStyles, ScrollLockSnapshot, ScrollSurface};

/// `document.body` / `document.documentElement` scroll surface.
pub struct PageScrollSurface {
    window: Window,
    body: HtmlElement,
    root: HtmlElement,
}

impl PageScrollSurface {
    /// Resolve the background elements from the page.
    pub fn new(window: &Window, document: &Document) -> Result<Self, LightboxError> {
        let body = document
            .body()
            .ok_or_else(|| LightboxError::missing("document.body"))?;
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| LightboxError::missing("document.documentElement"))?;
        Ok(Self {
            window: window.clone(),
            body,
            root,
        })
    }

    fn body_style(&self, property: &str) -> String {
        self.body
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }
}

impl ScrollSurface for PageScrollSurface {
    fn scroll_offset(&self) -> f64 {
        self.window
            .scroll_y()
            .unwrap_or_else(|_| f64::from(self.root.scroll_top()))
    }

    fn scrollbar_gap(&self) -> f64 {
        let inner_width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        inner_width - f64::from(self.root.client_width())
    }

    fn capture_styles(&self) -> LockedStyles {
        LockedStyles {
            body_overflow: self.body_style("overflow"),
            body_position: self.body_style("position"),
            body_top: self.body_style("top"),
            body_width: self.body_style("width"),
            body_padding_right: self.body_style("padding-right"),
            doc_overflow: self
                .root
                .style()
                .get_property_value("overflow")
                .unwrap_or_default(),
        }
    }

    fn freeze(&mut self, offset: f64, scrollbar_gap: f64) {
        let body = self.body.style();
        if scrollbar_gap > 0.0 {
            let _ = body.set_property("padding-right", &format!("{scrollbar_gap}px"));
        }
        let _ = body.set_property("overflow", "hidden");
        let _ = body.set_property("position", "fixed");
        let _ = body.set_property("top", &format!("-{offset}px"));
        let _ = body.set_property("width", "100%");
        let _ = self.root.style().set_property("overflow", "hidden");
    }

    fn restore(&mut self, snapshot: &ScrollLockSnapshot) {
        let body = self.body.style();
        let styles = &snapshot.styles;
        let _ = body.set_property("overflow", &styles.body_overflow);
        let _ = body.set_property("position", &styles.body_position);
        let _ = body.set_property("top", &styles.body_top);
        let _ = body.set_property("width", &styles.body_width);
        let _ = body.set_property("padding-right", &styles.body_padding_right);
        let _ = self
            .root
            .style()
            .set_property("overflow", &styles.doc_overflow);
        self.window.scroll_to_with_x_and_y(0.0, snapshot.offset);
    }
}
