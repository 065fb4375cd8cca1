//! Interaction constants for the lightbox.
//!
//! This module centralizes the hardcoded values for zoom bounds, gesture
//! thresholds, and the backdrop dim curve. The configurable subset is
//! mirrored in [`crate::config::LightboxConfig`].

/// Zoom constants.
pub mod zoom {
    /// Minimum scale. The image never renders smaller than its base size.
    pub const MIN: f64 = 1.0;
    /// Maximum pinch scale
    pub const MAX: f64 = 3.0;
    /// Scale above which a single finger pans instead of swiping.
    /// Slightly above 1 so float drift from repeated pinches cannot
    /// flip the gesture mode.
    pub const EPSILON: f64 = 1.01;
}

/// Swipe resolution thresholds, in pixels of net displacement.
pub mod swipe {
    /// Minimum horizontal displacement to commit to navigation
    pub const NAV_THRESHOLD: f64 = 50.0;
    /// Minimum downward displacement to commit to dismissal
    pub const DISMISS_THRESHOLD: f64 = 80.0;
}

/// Backdrop dim curve applied while dragging down to dismiss.
pub mod backdrop {
    /// Opacity before any drag
    pub const START: f64 = 0.85;
    /// Opacity floor at full drag
    pub const FLOOR: f64 = 0.4;
    /// Drag distance (px) over which one unit of opacity fades
    pub const FADE_DISTANCE: f64 = 420.0;
}

/// Host-page attribute names (the wire contract with the gallery markup).
pub mod attrs {
    /// Gallery card marker; its value is the stable cache key
    pub const CARD: &str = "data-bit";
    /// Embedded descriptor payload, on a `<script>` inside the card
    pub const IMAGES: &str = "data-bit-images";
    /// Clickable trigger carrying the image index
    pub const OPEN_BUTTON: &str = "data-bit-image-button";
    /// Index attribute on the trigger
    pub const OPEN_INDEX: &str = "data-bit-image-index";
    /// Hidden trigger variant carrying its own index
    pub const OPEN_HIDDEN: &str = "data-bit-image-open-hidden";
    /// Optional embedded JSON configuration block
    pub const CONFIG: &str = "data-bits-lightbox-config";
    /// Dialog element id
    pub const DIALOG_ID: &str = "bits-lightbox";
    /// Image display element
    pub const IMAGE: &str = "data-bits-lightbox-image";
    /// Counter label element
    pub const COUNT: &str = "data-bits-lightbox-count";
    /// Dot indicator strip element
    pub const DOTS: &str = "data-bits-lightbox-dots";
    /// Close button
    pub const CLOSE: &str = "data-bits-lightbox-close";
    /// Previous button
    pub const PREV: &str = "data-bits-lightbox-prev";
    /// Next button
    pub const NEXT: &str = "data-bits-lightbox-next";
    /// Dot element class
    pub const DOT_CLASS: &str = "bits-lightbox-dot";
    /// Active dot marker class
    pub const DOT_ACTIVE_CLASS: &str = "is-active";
    /// Backdrop dim custom property on the dialog
    pub const BACKDROP_PROP: &str = "--lb-backdrop";
}
