//! Errors for the attach surface.
//!
//! Runtime anomalies (malformed payloads, out-of-range navigation, missing
//! cosmetic elements, interrupted gestures) degrade to no-ops by design and
//! never surface here. Errors exist only for the case where the host page
//! lacks the required surface at attach time.

use thiserror::Error;

/// Errors that can occur while attaching the lightbox to a page.
#[derive(Error, Debug)]
pub enum LightboxError {
    /// A required host element is absent
    #[error("required host element not found: {selector}")]
    MissingSurface {
        /// Selector that failed to resolve
        selector: String,
    },

    /// A DOM call failed while wiring the controller
    #[error("DOM error: {0}")]
    Dom(String),
}

impl LightboxError {
    /// Create a missing-surface error for a selector.
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingSurface {
            selector: selector.into(),
        }
    }
}
