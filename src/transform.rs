//! The authoritative pan/zoom transform and its clamping rules.
//!
//! Extracted as pure math for testability: gesture handlers mutate a
//! [`Transform`], and the DOM layer projects it to a CSS `transform` value.

use crate::constants::zoom;
use crate::geometry::GeometrySnapshot;

/// Scale, translation, and the transient swipe-down drag offset.
///
/// Invariant: a freshly shown image always starts from identity; zoom and
/// pan never carry across navigation. `drag_offset_y` is non-zero only
/// mid-swipe-down and resets whenever a gesture concludes without a
/// dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub drag_offset_y: f64,
}

impl Transform {
    /// Identity transform (scale 1, no pan, no drag).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            drag_offset_y: 0.0,
        }
    }

    /// Clamp a scale value into the allowed range.
    pub fn clamp_scale(value: f64, max_scale: f64) -> f64 {
        value.clamp(zoom::MIN, max_scale)
    }

    /// Whether the image is zoomed in far enough that a single finger pans.
    pub fn is_zoomed(&self) -> bool {
        self.scale > zoom::EPSILON
    }

    /// Clamp the translation into the symmetric range the geometry allows.
    ///
    /// No-op when the snapshot is unusable (pre-load, mid-layout): clamping
    /// against a zero-sized measurement would wrongly pin the image to the
    /// center.
    pub fn clamp_translate(&mut self, geometry: &GeometrySnapshot) {
        if !geometry.is_usable() {
            return;
        }
        let (max_x, max_y) = geometry.max_pan(self.scale);
        self.translate_x = self.translate_x.clamp(-max_x, max_x);
        self.translate_y = self.translate_y.clamp(-max_y, max_y);
    }

    /// Snap fully back to identity scale/pan, keeping the drag offset.
    ///
    /// Covers the "pinched back to no-zoom" release exactly, so residual
    /// float drift cannot leave the image a fraction of a pixel off.
    pub fn snap_to_identity(&mut self) {
        self.scale = 1.0;
        self.translate_x = 0.0;
        self.translate_y = 0.0;
    }

    /// Reset to identity and clear the drag offset. Called on every
    /// navigation and on gesture cancel.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Project the state to a CSS `transform` value.
    ///
    /// The drag offset rides on top of the pan so a swipe-down preview
    /// composes with whatever translation is already applied.
    pub fn css_value(&self) -> String {
        let y = self.translate_y + self.drag_offset_y;
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, y, self.scale
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::zoom;

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot::from_measured(600.0, 400.0, 1.0, 1000.0, 700.0)
    }

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.drag_offset_y, 0.0);
    }

    #[test]
    fn test_clamp_scale_bounds() {
        assert_eq!(Transform::clamp_scale(0.5, zoom::MAX), 1.0);
        assert_eq!(Transform::clamp_scale(2.0, zoom::MAX), 2.0);
        assert_eq!(Transform::clamp_scale(4.0, zoom::MAX), 3.0);
    }

    #[test]
    fn test_clamp_translate_within_symmetric_bound() {
        // Every scale in range keeps |translate| <= max(0, (base*s - container)/2).
        for scale in [1.0, 1.5, 2.0, 2.5, 3.0] {
            let mut t = Transform {
                scale,
                translate_x: 10_000.0,
                translate_y: -10_000.0,
                drag_offset_y: 0.0,
            };
            let geom = geometry();
            t.clamp_translate(&geom);
            let (max_x, max_y) = geom.max_pan(scale);
            assert!(t.translate_x.abs() <= max_x, "x bound at scale {scale}");
            assert!(t.translate_y.abs() <= max_y, "y bound at scale {scale}");
        }
    }

    #[test]
    fn test_clamp_translate_centers_small_image() {
        let mut t = Transform {
            scale: 1.0,
            translate_x: 50.0,
            translate_y: -30.0,
            drag_offset_y: 0.0,
        };
        t.clamp_translate(&geometry());
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 0.0);
    }

    #[test]
    fn test_clamp_translate_skips_unusable_geometry() {
        let mut t = Transform {
            scale: 2.0,
            translate_x: 500.0,
            translate_y: 500.0,
            drag_offset_y: 0.0,
        };
        t.clamp_translate(&GeometrySnapshot::default());
        assert_eq!(t.translate_x, 500.0);
        assert_eq!(t.translate_y, 500.0);
    }

    #[test]
    fn test_is_zoomed_epsilon() {
        let mut t = Transform::identity();
        assert!(!t.is_zoomed());
        t.scale = 1.005;
        assert!(!t.is_zoomed());
        t.scale = 1.02;
        assert!(t.is_zoomed());
    }

    #[test]
    fn test_css_value_composes_drag_offset() {
        let t = Transform {
            scale: 2.0,
            translate_x: 10.0,
            translate_y: 5.0,
            drag_offset_y: 40.0,
        };
        assert_eq!(t.css_value(), "translate(10px, 45px) scale(2)");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut t = Transform {
            scale: 2.5,
            translate_x: 80.0,
            translate_y: -20.0,
            drag_offset_y: 60.0,
        };
        t.reset();
        assert_eq!(t, Transform::identity());
    }
}
