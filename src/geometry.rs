//! Measured geometry of the displayed image and its container.
//!
//! The snapshot is derived from DOM rectangles and goes stale on resize or
//! scale change; callers refresh it before clamping rather than trusting an
//! old measurement.

/// Base (unscaled) image size plus the container's visible size.
///
/// `base_width`/`base_height` describe the image at scale 1: the rendered
/// bounding box with whatever scale was applied at measure time divided
/// back out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub base_width: f64,
    pub base_height: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl GeometrySnapshot {
    /// Build a snapshot from measured bounding boxes.
    ///
    /// `applied_scale` is the scale that was in effect when the rendered box
    /// was measured. A degenerate rendered box (zero extent, e.g. before the
    /// image has loaded) keeps the base dimensions at 0, which marks the
    /// snapshot unusable for clamping.
    pub fn from_measured(
        rendered_width: f64,
        rendered_height: f64,
        applied_scale: f64,
        container_width: f64,
        container_height: f64,
    ) -> Self {
        let (base_width, base_height) =
            if rendered_width > 0.0 && rendered_height > 0.0 && applied_scale > 0.0 {
                (rendered_width / applied_scale, rendered_height / applied_scale)
            } else {
                (0.0, 0.0)
            };
        Self {
            base_width,
            base_height,
            container_width,
            container_height,
        }
    }

    /// Whether the snapshot carries enough information to clamp against.
    pub fn is_usable(&self) -> bool {
        self.base_width > 0.0
            && self.base_height > 0.0
            && self.container_width > 0.0
            && self.container_height > 0.0
    }

    /// Maximum allowed `|translate|` per axis at the given scale.
    ///
    /// The scaled image may pan until its edge reaches the container edge;
    /// when it is smaller than the container the limit is 0 (centered).
    pub fn max_pan(&self, scale: f64) -> (f64, f64) {
        let max_x = ((self.base_width * scale - self.container_width) / 2.0).max(0.0);
        let max_y = ((self.base_height * scale - self.container_height) / 2.0).max(0.0);
        (max_x, max_y)
    }
}
