//! DOM bindings for the host surface.
//!
//! This layer owns every read and write against the host page: element
//! lookup at attach time, geometry measurement, and the projection of core
//! state (transform, backdrop, counter, dots, button enablement) onto the
//! modal's elements. Optional elements degrade to skipped feedback; only
//! the dialog and image are required.

mod scroll;

pub use scroll::PageScrollSurface;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlDialogElement, HtmlImageElement};

use crate::constants::attrs;
use crate::error::LightboxError;
use crate::gallery::ImageDescriptor;
use crate::geometry::GeometrySnapshot;
use crate::session::ViewerSession;
use crate::transform::Transform;

/// Resolved host elements the viewer reads and writes.
pub struct HostSurface {
    document: Document,
    pub dialog: HtmlDialogElement,
    pub image: HtmlImageElement,
    counter: Option<Element>,
    dots: Option<Element>,
    pub close_button: Option<HtmlButtonElement>,
    pub prev_button: Option<HtmlButtonElement>,
    pub next_button: Option<HtmlButtonElement>,
}

impl HostSurface {
    /// Resolve the host surface from the page.
    ///
    /// The dialog and the image element are required; everything else is
    /// cosmetic and may be absent.
    pub fn locate(document: &Document) -> Result<Self, LightboxError> {
        let dialog = document
            .get_element_by_id(attrs::DIALOG_ID)
            .and_then(|el| el.dyn_into::<HtmlDialogElement>().ok())
            .ok_or_else(|| LightboxError::missing(format!("dialog#{}", attrs::DIALOG_ID)))?;

        let image_selector = format!("[{}]", attrs::IMAGE);
        let image = query(&dialog, &image_selector)?
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .ok_or_else(|| LightboxError::missing(image_selector))?;

        let counter = query(&dialog, &format!("[{}]", attrs::COUNT))?;
        let dots = query(&dialog, &format!("[{}]", attrs::DOTS))?;
        let close_button = button(&dialog, attrs::CLOSE)?;
        let prev_button = button(&dialog, attrs::PREV)?;
        let next_button = button(&dialog, attrs::NEXT)?;

        Ok(Self {
            document: document.clone(),
            dialog,
            image,
            counter,
            dots,
            close_button,
            prev_button,
            next_button,
        })
    }

    /// Whether the dialog is in its open state.
    pub fn is_open(&self) -> bool {
        self.dialog.open()
    }

    /// Make the dialog visible and accessible.
    pub fn show_dialog(&self) {
        let _ = self.dialog.remove_attribute("hidden");
        let _ = self.dialog.set_attribute("aria-hidden", "false");
        if !self.dialog.open() {
            // Prefer native modal semantics; fall back to a plain open
            // attribute when showModal is unavailable.
            if self.dialog.show_modal().is_err() {
                let _ = self.dialog.set_attribute("open", "");
            }
        }
        let _ = self.dialog.focus();
    }

    /// Hide the dialog and re-apply the hidden markers.
    pub fn hide_dialog(&self) {
        if self.dialog.open() {
            self.dialog.close();
            let _ = self.dialog.remove_attribute("open");
        }
        let _ = self.dialog.set_attribute("hidden", "");
        let _ = self.dialog.set_attribute("aria-hidden", "true");
    }

    /// Write the transform to the image element.
    pub fn apply_transform(&self, transform: &Transform) {
        let _ = self
            .image
            .style()
            .set_property("transform", &transform.css_value());
    }

    /// Set the backdrop dim custom property on the dialog.
    pub fn set_backdrop(&self, value: f64) {
        let _ = self
            .dialog
            .style()
            .set_property(attrs::BACKDROP_PROP, &value.to_string());
    }

    /// Clear the backdrop dim back to the stylesheet default.
    pub fn clear_backdrop(&self) {
        let _ = self.dialog.style().remove_property(attrs::BACKDROP_PROP);
    }

    /// Push a descriptor to the display element.
    pub fn show_image(&self, descriptor: &ImageDescriptor) {
        self.image.set_src(&descriptor.src);
        self.image.set_alt(descriptor.alt_text());
        self.image.set_width(descriptor.width);
        self.image.set_height(descriptor.height);
    }

    /// Update the counter label, when present.
    pub fn set_counter(&self, label: &str) {
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(label));
        }
    }

    /// Update the previous/next button enablement, when present.
    pub fn sync_buttons(&self, at_first: bool, at_last: bool) {
        if let Some(prev) = &self.prev_button {
            prev.set_disabled(at_first);
        }
        if let Some(next) = &self.next_button {
            next.set_disabled(at_last);
        }
    }

    /// Synchronize the dot indicator strip with the session.
    ///
    /// Dots are rebuilt only when the image count changed since the last
    /// render; otherwise only the active marker moves. `rendered` is the
    /// caller-held count of dots currently in the strip.
    pub fn sync_dots(&self, session: &ViewerSession, rendered: &mut usize) {
        let Some(dots) = &self.dots else {
            return;
        };
        let total = session.len();
        if total != *rendered {
            dots.set_text_content(None);
            let fragment = self.document.create_document_fragment();
            for _ in 0..total {
                if let Ok(dot) = self.document.create_element("span") {
                    dot.set_class_name(attrs::DOT_CLASS);
                    let _ = fragment.append_child(&dot);
                }
            }
            let _ = dots.append_child(&fragment);
            *rendered = total;
        }
        if let Ok(nodes) = dots.query_selector_all(&format!(".{}", attrs::DOT_CLASS)) {
            for (i, active) in session.dot_states().enumerate() {
                if let Some(dot) = nodes.item(i as u32).and_then(|n| n.dyn_into::<Element>().ok())
                {
                    let _ = dot
                        .class_list()
                        .toggle_with_force(attrs::DOT_ACTIVE_CLASS, active);
                }
            }
        }
    }

    /// Measure the rendered image and container boxes.
    ///
    /// `applied_scale` is the scale currently written to the image, so the
    /// snapshot's base dimensions come out unscaled.
    pub fn measure(&self, applied_scale: f64) -> GeometrySnapshot {
        let rect = self.image.get_bounding_client_rect();
        let container = self.dialog.get_bounding_client_rect();
        GeometrySnapshot::from_measured(
            rect.width(),
            rect.height(),
            applied_scale,
            container.width(),
            container.height(),
        )
    }

    /// Center of the container in client coordinates, the origin for
    /// container-relative touch points.
    pub fn container_center(&self) -> (f64, f64) {
        let rect = self.dialog.get_bounding_client_rect();
        (
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        )
    }
}

fn query(parent: &Element, selector: &str) -> Result<Option<Element>, LightboxError> {
    parent
        .query_selector(selector)
        .map_err(|err| LightboxError::Dom(format!("query {selector}: {err:?}")))
}

fn button(parent: &Element, attr: &str) -> Result<Option<HtmlButtonElement>, LightboxError> {
    Ok(query(parent, &format!("[{attr}]"))?.and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()))
}
