//! Touch gesture recognition for the lightbox.
//!
//! Raw touch sequences are classified into one of four mutually exclusive
//! modes — swipe, pan, pinch, or none — as an explicit tagged state machine.
//! Each variant carries its own baseline, captured at the transition into
//! that mode, so nothing from a previous gesture can leak into the next one.
//!
//! The recognizer mutates the [`Transform`] directly and reports what else
//! must happen as a [`GestureEffect`]; interpreting the effect (re-measuring
//! geometry, stepping the gallery, closing the viewer) is the driver's job.

use crate::constants::{backdrop, swipe, zoom};
use crate::event::TouchPoint;
use crate::geometry::GeometrySnapshot;
use crate::transform::Transform;

/// Tunable gesture parameters.
///
/// Defaults reproduce the built-in constants; the host page may override
/// them through [`crate::config::LightboxConfig`].
#[derive(Debug, Clone, Copy)]
pub struct GestureTuning {
    /// Maximum pinch scale
    pub max_scale: f64,
    /// Net horizontal displacement that commits a swipe to navigation
    pub nav_threshold: f64,
    /// Net downward displacement that commits a swipe to dismissal
    pub dismiss_threshold: f64,
    /// Backdrop opacity before any drag
    pub backdrop_start: f64,
    /// Backdrop opacity floor
    pub backdrop_floor: f64,
    /// Drag distance over which one unit of backdrop opacity fades
    pub backdrop_fade: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            max_scale: zoom::MAX,
            nav_threshold: swipe::NAV_THRESHOLD,
            dismiss_threshold: swipe::DISMISS_THRESHOLD,
            backdrop_start: backdrop::START,
            backdrop_floor: backdrop::FLOOR,
            backdrop_fade: backdrop::FADE_DISTANCE,
        }
    }
}

impl GestureTuning {
    /// Backdrop opacity for a downward drag of `drag` pixels.
    pub fn backdrop_dim(&self, drag: f64) -> f64 {
        (self.backdrop_start - drag / self.backdrop_fade).max(self.backdrop_floor)
    }
}

/// Baseline for a single-finger swipe at no zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeContext {
    /// Contact point at gesture start
    pub start: TouchPoint,
    /// Most recent contact point
    pub last: TouchPoint,
}

impl SwipeContext {
    fn new(point: TouchPoint) -> Self {
        Self {
            start: point,
            last: point,
        }
    }

    /// Net displacement since the gesture started.
    fn displacement(&self) -> (f64, f64) {
        (self.last.x - self.start.x, self.last.y - self.start.y)
    }
}

/// Baseline for a single-finger pan of a zoomed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanContext {
    /// Contact point at gesture start
    pub start: TouchPoint,
    /// Translation at gesture start
    pub base_translate: (f64, f64),
}

/// Baseline for a two-finger pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchContext {
    /// Inter-point distance at gesture start
    pub base_distance: f64,
    /// Scale at gesture start
    pub base_scale: f64,
    /// Translation at gesture start
    pub base_translate: (f64, f64),
}

/// The active gesture mode, with its per-gesture baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No touch sequence in flight
    #[default]
    Idle,
    /// Single finger at no zoom: navigation/dismissal intent, resolved at release
    Swipe(SwipeContext),
    /// Single finger on a zoomed image: continuous translation
    Pan(PanContext),
    /// Two fingers: continuous scale anchored at the finger midpoint
    Pinch(PinchContext),
}

/// What the driver must do after a gesture input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEffect {
    /// Nothing observable changed
    None,
    /// The transform changed; re-apply it. `remeasure` is set when the scale
    /// changed, so geometry must be refreshed and the translation re-clamped
    /// before the next clamp can be trusted.
    Render { remeasure: bool },
    /// Swipe-down preview: re-apply the transform and dim the backdrop
    DragPreview { backdrop: f64 },
    /// Swipe resolved to navigation: step by the given delta
    Navigate(i32),
    /// Swipe resolved to dismissal: close the viewer
    Dismiss,
    /// Gesture ended without intent: clear the drag offset and backdrop
    ResetDrag,
}

impl GestureState {
    /// Whether a touch sequence is currently being tracked.
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureState::Idle)
    }

    /// Classify a touch-start.
    ///
    /// Exactly two contacts always (re)baseline a pinch, even mid-swipe or
    /// mid-pan: the second finger landing promotes the gesture. One contact
    /// picks pan or swipe from the current zoom level. Any other contact
    /// count leaves the state untouched.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint], transform: &Transform) {
        match touches {
            [a, b] => {
                *self = GestureState::Pinch(PinchContext {
                    base_distance: a.distance_to(b),
                    base_scale: transform.scale,
                    base_translate: (transform.translate_x, transform.translate_y),
                });
                log::debug!("gesture: pinch started");
            }
            [point] => {
                if transform.is_zoomed() {
                    *self = GestureState::Pan(PanContext {
                        start: *point,
                        base_translate: (transform.translate_x, transform.translate_y),
                    });
                    log::debug!("gesture: pan started at scale {:.2}", transform.scale);
                } else {
                    *self = GestureState::Swipe(SwipeContext::new(*point));
                    log::debug!("gesture: swipe started");
                }
            }
            _ => {}
        }
    }

    /// Feed a touch-move into the active gesture.
    pub fn on_touch_move(
        &mut self,
        touches: &[TouchPoint],
        transform: &mut Transform,
        geometry: &GeometrySnapshot,
        tuning: &GestureTuning,
    ) -> GestureEffect {
        match (self, touches) {
            (GestureState::Pinch(ctx), [a, b]) if ctx.base_distance > 0.0 => {
                let distance = a.distance_to(b);
                let midpoint = a.midpoint(b);
                let next_scale = Transform::clamp_scale(
                    ctx.base_scale * (distance / ctx.base_distance),
                    tuning.max_scale,
                );
                // Keep the finger midpoint visually fixed under the rescale.
                let ratio = next_scale / ctx.base_scale;
                transform.translate_x = midpoint.x - (midpoint.x - ctx.base_translate.0) * ratio;
                transform.translate_y = midpoint.y - (midpoint.y - ctx.base_translate.1) * ratio;
                transform.scale = next_scale;
                transform.clamp_translate(geometry);
                GestureEffect::Render { remeasure: true }
            }
            (GestureState::Pan(ctx), [point]) => {
                transform.translate_x = ctx.base_translate.0 + (point.x - ctx.start.x);
                transform.translate_y = ctx.base_translate.1 + (point.y - ctx.start.y);
                transform.clamp_translate(geometry);
                GestureEffect::Render { remeasure: false }
            }
            (GestureState::Swipe(ctx), [point]) => {
                ctx.last = *point;
                let (dx, dy) = ctx.displacement();
                // Only vertical downward motion previews dismissal; anything
                // else is resolved at release.
                if dy.abs() > dx.abs() && dy > 0.0 {
                    transform.drag_offset_y = dy;
                    GestureEffect::DragPreview {
                        backdrop: tuning.backdrop_dim(dy),
                    }
                } else {
                    GestureEffect::None
                }
            }
            _ => GestureEffect::None,
        }
    }

    /// Feed a touch-end. `remaining` is the set of contacts still down.
    ///
    /// A pinch that loses one finger degrades to pan or swipe, re-baselined
    /// from the remaining point so the translation does not jump. Once all
    /// contacts lift, the gesture resolves.
    pub fn on_touch_end(
        &mut self,
        remaining: &[TouchPoint],
        transform: &mut Transform,
        geometry: &GeometrySnapshot,
        tuning: &GestureTuning,
    ) -> GestureEffect {
        if let [point] = remaining {
            if matches!(self, GestureState::Pinch(_)) {
                *self = if transform.is_zoomed() {
                    GestureState::Pan(PanContext {
                        start: *point,
                        base_translate: (transform.translate_x, transform.translate_y),
                    })
                } else {
                    GestureState::Swipe(SwipeContext::new(*point))
                };
                log::debug!("gesture: pinch degraded to single-finger mode");
            }
            return GestureEffect::None;
        }
        if !remaining.is_empty() {
            return GestureEffect::None;
        }

        let state = std::mem::take(self);
        match state {
            GestureState::Idle => GestureEffect::None,
            GestureState::Pinch(_) => {
                if transform.is_zoomed() {
                    transform.clamp_translate(geometry);
                    GestureEffect::Render { remeasure: true }
                } else {
                    // Pinched back to no-zoom: snap exactly to identity so
                    // float drift cannot accumulate across gestures.
                    transform.snap_to_identity();
                    GestureEffect::Render { remeasure: false }
                }
            }
            GestureState::Pan(_) => {
                transform.clamp_translate(geometry);
                GestureEffect::Render { remeasure: false }
            }
            GestureState::Swipe(ctx) => {
                let (dx, dy) = ctx.displacement();
                let zoomed = transform.is_zoomed();
                if dx.abs() > tuning.nav_threshold && dx.abs() > dy.abs() && !zoomed {
                    transform.drag_offset_y = 0.0;
                    let delta = if dx > 0.0 { -1 } else { 1 };
                    log::debug!("gesture: swipe resolved to navigate {delta:+}");
                    GestureEffect::Navigate(delta)
                } else if dy > tuning.dismiss_threshold && dy > dx.abs() && !zoomed {
                    log::debug!("gesture: swipe resolved to dismiss");
                    GestureEffect::Dismiss
                } else {
                    transform.drag_offset_y = 0.0;
                    GestureEffect::ResetDrag
                }
            }
        }
    }

    /// The touch sequence was interrupted externally. Always resets the drag
    /// preview and discards the gesture without firing navigation or
    /// dismissal — cancellation is never interpreted as intent.
    pub fn on_touch_cancel(&mut self, transform: &mut Transform) -> GestureEffect {
        *self = GestureState::Idle;
        transform.drag_offset_y = 0.0;
        GestureEffect::ResetDrag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> GestureTuning {
        GestureTuning::default()
    }

    /// Roomy geometry: a 1000x800 base image in a 600x400 container, so
    /// panning has headroom on both axes at any zoom.
    fn roomy_geometry() -> GeometrySnapshot {
        GeometrySnapshot::from_measured(1000.0, 800.0, 1.0, 600.0, 400.0)
    }

    fn two(ax: f64, ay: f64, bx: f64, by: f64) -> Vec<TouchPoint> {
        vec![TouchPoint::new(ax, ay), TouchPoint::new(bx, by)]
    }

    #[test]
    fn test_single_touch_at_no_zoom_starts_swipe() {
        let mut state = GestureState::default();
        state.on_touch_start(&[TouchPoint::new(10.0, 20.0)], &Transform::identity());
        assert!(matches!(state, GestureState::Swipe(_)));
    }

    #[test]
    fn test_single_touch_on_zoomed_image_starts_pan() {
        let mut state = GestureState::default();
        let transform = Transform {
            scale: 1.5,
            ..Transform::identity()
        };
        state.on_touch_start(&[TouchPoint::new(10.0, 20.0)], &transform);
        assert!(matches!(state, GestureState::Pan(_)));
    }

    #[test]
    fn test_scale_just_below_epsilon_still_swipes() {
        let mut state = GestureState::default();
        let transform = Transform {
            scale: 1.009,
            ..Transform::identity()
        };
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        assert!(matches!(state, GestureState::Swipe(_)));
    }

    #[test]
    fn test_two_touches_start_pinch_with_baseline() {
        let mut state = GestureState::default();
        let transform = Transform {
            scale: 1.5,
            translate_x: 10.0,
            translate_y: -5.0,
            drag_offset_y: 0.0,
        };
        state.on_touch_start(&two(0.0, 0.0, 100.0, 0.0), &transform);
        match state {
            GestureState::Pinch(ctx) => {
                assert_eq!(ctx.base_distance, 100.0);
                assert_eq!(ctx.base_scale, 1.5);
                assert_eq!(ctx.base_translate, (10.0, -5.0));
            }
            other => panic!("expected pinch, got {other:?}"),
        }
    }

    #[test]
    fn test_second_finger_promotes_swipe_to_pinch() {
        let mut state = GestureState::default();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &Transform::identity());
        state.on_touch_start(&two(0.0, 0.0, 50.0, 0.0), &Transform::identity());
        assert!(matches!(state, GestureState::Pinch(_)));
    }

    #[test]
    fn test_three_touches_leave_state_untouched() {
        let mut state = GestureState::default();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &Transform::identity());
        let before = state;
        state.on_touch_start(
            &[
                TouchPoint::new(0.0, 0.0),
                TouchPoint::new(10.0, 0.0),
                TouchPoint::new(20.0, 0.0),
            ],
            &Transform::identity(),
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_pinch_doubling_distance_doubles_scale() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-50.0, 0.0, 50.0, 0.0), &transform);
        let effect = state.on_touch_move(
            &two(-100.0, 0.0, 100.0, 0.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::Render { remeasure: true });
        assert_eq!(transform.scale, 2.0);
    }

    #[test]
    fn test_pinch_scale_clamps_at_max() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-25.0, 0.0, 25.0, 0.0), &transform);
        // Distance ratio 4.0 clamps to the 3.0 ceiling.
        state.on_touch_move(
            &two(-100.0, 0.0, 100.0, 0.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(transform.scale, 3.0);
    }

    #[test]
    fn test_pinch_anchors_at_finger_midpoint() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        // Fingers centered on (100, 50), distance 100.
        state.on_touch_start(&two(50.0, 50.0, 150.0, 50.0), &transform);
        // Same midpoint, distance 200 -> scale 2. The midpoint must stay
        // visually fixed: translate = m - (m - 0) * 2 = -m.
        state.on_touch_move(
            &two(0.0, 50.0, 200.0, 50.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(transform.scale, 2.0);
        assert_eq!(transform.translate_x, -100.0);
        assert_eq!(transform.translate_y, -50.0);
    }

    #[test]
    fn test_pinch_translation_stays_clamped() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        let geometry = roomy_geometry();
        // Midpoint far off-center drives a large translation; it must still
        // respect the per-axis bound at the resulting scale.
        state.on_touch_start(&two(250.0, 150.0, 350.0, 150.0), &transform);
        state.on_touch_move(
            &two(150.0, 150.0, 450.0, 150.0),
            &mut transform,
            &geometry,
            &tuning(),
        );
        let (max_x, max_y) = geometry.max_pan(transform.scale);
        assert!(transform.translate_x.abs() <= max_x);
        assert!(transform.translate_y.abs() <= max_y);
    }

    #[test]
    fn test_pan_translates_from_baseline() {
        let mut state = GestureState::default();
        let mut transform = Transform {
            scale: 2.0,
            translate_x: 10.0,
            translate_y: 20.0,
            drag_offset_y: 0.0,
        };
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        let effect = state.on_touch_move(
            &[TouchPoint::new(30.0, -15.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::Render { remeasure: false });
        assert_eq!(transform.translate_x, 40.0);
        assert_eq!(transform.translate_y, 5.0);
        assert_eq!(transform.scale, 2.0);
    }

    #[test]
    fn test_pan_never_exceeds_clamp() {
        let mut state = GestureState::default();
        let mut transform = Transform {
            scale: 2.0,
            ..Transform::identity()
        };
        let geometry = roomy_geometry();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        state.on_touch_move(
            &[TouchPoint::new(5000.0, 5000.0)],
            &mut transform,
            &geometry,
            &tuning(),
        );
        let (max_x, max_y) = geometry.max_pan(2.0);
        assert_eq!(transform.translate_x, max_x);
        assert_eq!(transform.translate_y, max_y);
    }

    #[test]
    fn test_swipe_down_previews_drag_and_backdrop() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        let effect = state.on_touch_move(
            &[TouchPoint::new(5.0, 84.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(transform.drag_offset_y, 84.0);
        match effect {
            GestureEffect::DragPreview { backdrop } => {
                assert!((backdrop - 0.65).abs() < 1e-9);
            }
            other => panic!("expected drag preview, got {other:?}"),
        }
    }

    #[test]
    fn test_backdrop_dim_has_floor() {
        assert_eq!(tuning().backdrop_dim(10_000.0), 0.4);
        assert_eq!(tuning().backdrop_dim(0.0), 0.85);
    }

    #[test]
    fn test_horizontal_swipe_move_produces_no_transform_change() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        let effect = state.on_touch_move(
            &[TouchPoint::new(40.0, 5.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(transform.drag_offset_y, 0.0);
    }

    #[test]
    fn test_upward_swipe_move_produces_no_transform_change() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        let effect = state.on_touch_move(
            &[TouchPoint::new(5.0, -90.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(transform.drag_offset_y, 0.0);
    }

    fn released_swipe(dx: f64, dy: f64, transform: &mut Transform) -> GestureEffect {
        let mut state = GestureState::default();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], transform);
        state.on_touch_move(
            &[TouchPoint::new(dx, dy)],
            transform,
            &roomy_geometry(),
            &tuning(),
        );
        state.on_touch_end(&[], transform, &roomy_geometry(), &tuning())
    }

    #[test]
    fn test_swipe_right_navigates_to_previous() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(60.0, 10.0, &mut transform),
            GestureEffect::Navigate(-1)
        );
    }

    #[test]
    fn test_swipe_left_navigates_to_next() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(-60.0, 10.0, &mut transform),
            GestureEffect::Navigate(1)
        );
    }

    #[test]
    fn test_short_swipe_is_a_noop() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(40.0, 10.0, &mut transform),
            GestureEffect::ResetDrag
        );
    }

    #[test]
    fn test_swipe_down_past_threshold_dismisses() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(10.0, 90.0, &mut transform),
            GestureEffect::Dismiss
        );
    }

    #[test]
    fn test_swipe_down_below_threshold_resets() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(10.0, 60.0, &mut transform),
            GestureEffect::ResetDrag
        );
        assert_eq!(transform.drag_offset_y, 0.0);
    }

    #[test]
    fn test_horizontal_dominant_wins_over_vertical() {
        let mut transform = Transform::identity();
        assert_eq!(
            released_swipe(-100.0, 90.0, &mut transform),
            GestureEffect::Navigate(1)
        );
    }

    #[test]
    fn test_same_motion_on_zoomed_image_pans_instead_of_navigating() {
        // dx=60, dy=10 navigates at scale 1, but at scale 1.5 the gesture
        // was pan from the start, so release just clamps.
        let mut state = GestureState::default();
        let mut transform = Transform {
            scale: 1.5,
            ..Transform::identity()
        };
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        state.on_touch_move(
            &[TouchPoint::new(60.0, 10.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        let effect = state.on_touch_end(&[], &mut transform, &roomy_geometry(), &tuning());
        assert_eq!(effect, GestureEffect::Render { remeasure: false });
    }

    #[test]
    fn test_pinch_release_at_no_zoom_snaps_to_identity() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        // Pinch inward: ratio 0.5 clamps to scale 1.
        state.on_touch_start(&two(-100.0, 0.0, 100.0, 0.0), &transform);
        state.on_touch_move(
            &two(-50.0, 0.0, 50.0, 0.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        let effect = state.on_touch_end(&[], &mut transform, &roomy_geometry(), &tuning());
        assert_eq!(effect, GestureEffect::Render { remeasure: false });
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.translate_x, 0.0);
        assert_eq!(transform.translate_y, 0.0);
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_pinch_release_while_zoomed_keeps_scale() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-50.0, 0.0, 50.0, 0.0), &transform);
        state.on_touch_move(
            &two(-100.0, 0.0, 100.0, 0.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        let effect = state.on_touch_end(&[], &mut transform, &roomy_geometry(), &tuning());
        assert_eq!(effect, GestureEffect::Render { remeasure: true });
        assert_eq!(transform.scale, 2.0);
    }

    #[test]
    fn test_pinch_degrades_to_pan_when_zoomed() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-50.0, 0.0, 50.0, 0.0), &transform);
        state.on_touch_move(
            &two(-100.0, 0.0, 100.0, 0.0),
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        // One finger lifts; the other stays at (-100, 0).
        let effect = state.on_touch_end(
            &[TouchPoint::new(-100.0, 0.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::None);
        match state {
            GestureState::Pan(ctx) => {
                // Re-baselined from the remaining point and the current
                // translation: the first pan move produces no jump.
                assert_eq!(ctx.start, TouchPoint::new(-100.0, 0.0));
                assert_eq!(
                    ctx.base_translate,
                    (transform.translate_x, transform.translate_y)
                );
            }
            other => panic!("expected pan, got {other:?}"),
        }
    }

    #[test]
    fn test_pinch_degrades_to_swipe_at_no_zoom() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-50.0, 0.0, 50.0, 0.0), &transform);
        // No move: scale still 1.
        let effect = state.on_touch_end(
            &[TouchPoint::new(50.0, 0.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        assert_eq!(effect, GestureEffect::None);
        match state {
            GestureState::Swipe(ctx) => {
                assert_eq!(ctx.start, TouchPoint::new(50.0, 0.0));
                assert_eq!(ctx.last, ctx.start);
            }
            other => panic!("expected swipe, got {other:?}"),
        }
    }

    #[test]
    fn test_cancel_resets_and_never_fires_intent() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&[TouchPoint::new(0.0, 0.0)], &transform);
        // Displacement far past both thresholds.
        state.on_touch_move(
            &[TouchPoint::new(200.0, 300.0)],
            &mut transform,
            &roomy_geometry(),
            &tuning(),
        );
        let effect = state.on_touch_cancel(&mut transform);
        assert_eq!(effect, GestureEffect::ResetDrag);
        assert_eq!(transform.drag_offset_y, 0.0);
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_cancel_during_pinch_goes_idle() {
        let mut state = GestureState::default();
        let mut transform = Transform::identity();
        state.on_touch_start(&two(-50.0, 0.0, 50.0, 0.0), &transform);
        state.on_touch_cancel(&mut transform);
        assert_eq!(state, GestureState::Idle);
        assert!(!state.is_active());
    }
}
