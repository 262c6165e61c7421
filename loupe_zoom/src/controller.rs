// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom controller: the single writer of a viewport's scale and pan.
//!
//! [`ZoomController`] turns target scales into state changes. Every zoom keeps
//! a screen anchor visually fixed where it can, then re-clamps the pan so the
//! content never drifts out of reach. Edge clamping always wins over anchor
//! fidelity.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use loupe_view::FrameGeometry;
//! use loupe_zoom::{GestureConfig, ZoomController};
//!
//! let geometry = FrameGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(1000.0, 1000.0));
//! let mut zoom = ZoomController::new(geometry, GestureConfig::default());
//!
//! // Zoom in around a point right of center; the content under it stays put.
//! let anchor = Point::new(500.0, 300.0);
//! let before = zoom.geometry().screen_to_content_local(anchor, zoom.scale(), zoom.pan());
//! zoom.apply_zoom(anchor, 1.5, false);
//! let after = zoom.geometry().screen_to_content_local(anchor, zoom.scale(), zoom.pan());
//!
//! assert_eq!(zoom.scale(), 1.5);
//! assert!((before - after).hypot() < 1e-9);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use loupe_gesture::Gesture;
use loupe_view::{FrameGeometry, ScaleRange, ViewportState};

use crate::config::GestureConfig;
use crate::notify::{ZoomCause, ZoomChange, ZoomObserver};

/// Fraction of the zoomed-in scale below which a toggle zooms in again.
const TOGGLE_HYSTERESIS: f64 = 0.95;

/// Result of one zoom request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomOutcome {
    /// The scale changed.
    Zoomed {
        /// Scale before the request.
        previous_scale: f64,
        /// Scale after clamping into range.
        scale: f64,
    },
    /// The clamped target equaled the current scale.
    AtLimit {
        /// Whether re-clamping moved the pan.
        pan_corrected: bool,
    },
}

impl ZoomOutcome {
    /// Returns `true` if the scale changed.
    #[must_use]
    pub fn scale_changed(&self) -> bool {
        matches!(self, Self::Zoomed { .. })
    }
}

/// Direction and target picked by a toggle zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleDecision {
    /// `true` to zoom in to `base * factor`, `false` to return to `base`.
    pub zoom_in: bool,
    /// Base scale the toggle switches around.
    pub base: f64,
    /// Unclamped target scale.
    pub target: f64,
}

/// Picks the toggle direction for the current `scale`.
///
/// The base is the remembered scale when there is one. Otherwise it is the
/// midpoint of the scale range clamped to `[0, 1]`, so ranges above `1` fall
/// back to a base of exactly `1`.
#[must_use]
pub fn toggle_decision(scale: f64, remembered: Option<f64>, config: &GestureConfig) -> ToggleDecision {
    let base = remembered.unwrap_or_else(|| config.scale_range.midpoint().clamp(0.0, 1.0));
    let zoomed = base * config.toggle_zoom_factor;
    let zoom_in = scale < zoomed * TOGGLE_HYSTERESIS;
    ToggleDecision {
        zoom_in,
        base,
        target: if zoom_in { zoomed } else { base },
    }
}

/// Snapshot of everything a zoom inspector would want to show.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomDebugInfo {
    /// Current scale.
    pub scale: f64,
    /// Current pan offset.
    pub pan: Vec2,
    /// Remembered toggle base, if any.
    pub remembered_base_scale: Option<f64>,
    /// Unscaled content size.
    pub content_base_size: Size,
    /// Content size at the current scale.
    pub scaled_content_size: Size,
    /// Viewport rectangle in screen space.
    pub viewport: Rect,
    /// Allowed scale range.
    pub scale_range: ScaleRange,
    /// Content-local rectangle visible through the viewport.
    pub visible_content: Rect,
}

/// Owns a viewport's zoom state and applies zoom requests to it.
pub struct ZoomController {
    geometry: FrameGeometry,
    state: ViewportState,
    config: GestureConfig,
    observer: Option<Box<dyn ZoomObserver>>,
}

impl fmt::Debug for ZoomController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observer", &self.observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}

impl ZoomController {
    /// Creates a controller at the rest scale (`1` clamped into range), with
    /// the pan clamped for the given geometry.
    ///
    /// `config` is used as given; validate it first if it comes from outside.
    /// An invalid scale range does not panic, but a NaN bound leaves that side
    /// of the scale unconstrained.
    #[must_use]
    pub fn new(geometry: FrameGeometry, config: GestureConfig) -> Self {
        let mut state = ViewportState::new(geometry.content_size());
        state.set_scale(config.scale_range.clamp(1.0));
        let mut controller = Self {
            geometry,
            state,
            config,
            observer: None,
        };
        controller.reclamp_now();
        controller
    }

    /// Sets the observer notified on every committed scale change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl ZoomObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// Replaces the scale-change observer.
    pub fn set_observer(&mut self, observer: impl ZoomObserver + 'static) {
        self.set_boxed_observer(Box::new(observer));
    }

    pub(crate) fn set_boxed_observer(&mut self, observer: Box<dyn ZoomObserver>) {
        self.observer = Some(observer);
    }

    /// Removes the scale-change observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan()
    }

    /// Read-only view of the zoom state.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Read-only view of the geometry.
    #[must_use]
    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    /// The configuration this controller runs with.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Transform a renderer applies to content-local coordinates.
    #[must_use]
    pub fn presentation(&self) -> Affine {
        self.geometry
            .content_to_screen(self.state.scale(), self.state.pan())
    }

    /// Zooms toward `target_scale` keeping `anchor` fixed on screen.
    ///
    /// The target is clamped into the scale range first. When that leaves the
    /// scale unchanged and `preserve_anchor_even_if_clamped` is `false`, only
    /// the pan is re-clamped. A non-finite target is treated as the current
    /// scale.
    pub fn apply_zoom(
        &mut self,
        anchor: Point,
        target_scale: f64,
        preserve_anchor_even_if_clamped: bool,
    ) -> ZoomOutcome {
        self.zoom_about(
            anchor,
            target_scale,
            preserve_anchor_even_if_clamped,
            ZoomCause::Programmatic,
        )
    }

    /// Double-tap toggle between the base scale and `base * factor`.
    ///
    /// The first zoom-in records the current scale as the base for later
    /// toggles.
    pub fn toggle_zoom(&mut self, anchor: Point) -> ZoomOutcome {
        let decision = toggle_decision(
            self.state.scale(),
            self.state.remembered_base_scale(),
            &self.config,
        );
        if decision.zoom_in && self.state.remember_base_scale(self.state.scale()) {
            tracing::debug!(base = self.state.scale(), "remembered toggle base scale");
        }
        self.zoom_about(anchor, decision.target, true, ZoomCause::Toggle)
    }

    /// Applies one pinch step of `distance_delta` pixels around `anchor`.
    pub fn pinch(&mut self, anchor: Point, distance_delta: f64) -> ZoomOutcome {
        let target = self.state.scale() * (1.0 + distance_delta * self.config.pinch_zoom_speed);
        self.zoom_about(anchor, target, false, ZoomCause::Pinch)
    }

    /// Applies one wheel step of `delta_y` notches around `anchor`.
    pub fn wheel(&mut self, anchor: Point, delta_y: f64) -> ZoomOutcome {
        let target = self.state.scale() * (1.0 + delta_y * self.config.wheel_zoom_speed);
        self.zoom_about(anchor, target, false, ZoomCause::Wheel)
    }

    /// Dispatches a recognized gesture to the matching zoom operation.
    pub fn apply_gesture(&mut self, gesture: &Gesture) -> ZoomOutcome {
        match *gesture {
            Gesture::ToggleZoom { anchor, .. } => self.toggle_zoom(anchor),
            Gesture::Pinch {
                anchor,
                distance_delta,
            } => self.pinch(anchor, distance_delta),
            Gesture::Wheel { anchor, delta_y } => self.wheel(anchor, delta_y),
        }
    }

    /// Returns to the rest scale (`1` clamped into range).
    ///
    /// The pan is kept where it is valid at the rest scale and re-clamped
    /// otherwise, so undersized content ends up centered. The remembered toggle
    /// base is kept.
    pub fn reset_zoom(&mut self) -> ZoomOutcome {
        let previous_scale = self.state.scale();
        let scale = self.config.scale_range.clamp(1.0);
        self.state.set_scale(scale);
        let pan_corrected = self.reclamp_now();
        if approx_eq(previous_scale, scale) {
            return ZoomOutcome::AtLimit { pan_corrected };
        }
        tracing::debug!(previous_scale, scale, "zoom reset");
        self.notify(ZoomChange {
            previous_scale,
            scale,
            anchor: None,
            cause: ZoomCause::Reset,
        });
        ZoomOutcome::Zoomed {
            previous_scale,
            scale,
        }
    }

    /// Re-runs the pan clamp for the current geometry.
    ///
    /// Returns `true` if the pan changed.
    pub fn reclamp_now(&mut self) -> bool {
        self.state
            .reclamp(self.geometry.viewport().size(), self.config.clamp_policy())
    }

    /// Moves the content by `delta` (from a host drag), then re-clamps.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.set_pan(self.state.pan() + delta);
    }

    /// Sets the pan offset, then re-clamps.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.state.set_pan(pan);
        self.reclamp_now();
    }

    /// Accepts a new viewport rectangle from layout, then re-clamps.
    pub fn set_viewport_rect(&mut self, viewport: Rect) {
        self.geometry.set_viewport(viewport);
        self.reclamp_now();
    }

    /// Accepts a new unscaled content size from layout, then re-clamps.
    pub fn set_content_base_size(&mut self, size: Size) {
        self.geometry.set_content_size(size);
        self.state.set_content_base_size(size);
        self.reclamp_now();
    }

    /// Forgets the remembered toggle base so the next toggle picks a new one.
    pub fn clear_remembered_base_scale(&mut self) {
        self.state.clear_remembered_base_scale();
    }

    /// Returns a snapshot of the current state and geometry.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        let scale = self.state.scale();
        let pan = self.state.pan();
        ZoomDebugInfo {
            scale,
            pan,
            remembered_base_scale: self.state.remembered_base_scale(),
            content_base_size: self.state.content_base_size(),
            scaled_content_size: self.state.scaled_content_size(),
            viewport: self.geometry.viewport(),
            scale_range: self.config.scale_range,
            visible_content: self.geometry.visible_content_rect(scale, pan),
        }
    }

    fn zoom_about(&mut self, anchor: Point, target: f64, preserve: bool, cause: ZoomCause) -> ZoomOutcome {
        let previous_scale = self.state.scale();
        let scale = if target.is_finite() {
            self.config.scale_range.clamp(target)
        } else {
            previous_scale
        };
        let at_limit = approx_eq(scale, previous_scale);

        if at_limit && !preserve {
            let pan_corrected = self.reclamp_now();
            tracing::trace!(?cause, scale, pan_corrected, "zoom at limit");
            return ZoomOutcome::AtLimit { pan_corrected };
        }

        let pan = self.state.pan();
        let anchor_local = self
            .geometry
            .screen_to_content_local(anchor, previous_scale, pan);
        self.state.set_scale(scale);
        let landed = self
            .geometry
            .content_local_to_screen(anchor_local, scale, pan);
        self.state.set_pan(pan - (landed - anchor));
        self.reclamp_now();

        if at_limit {
            return ZoomOutcome::AtLimit {
                pan_corrected: self.state.pan() != pan,
            };
        }

        tracing::debug!(
            ?cause,
            previous_scale,
            scale,
            anchor_x = anchor.x,
            anchor_y = anchor.y,
            "zoom applied"
        );
        self.notify(ZoomChange {
            previous_scale,
            scale,
            anchor: Some(anchor),
            cause,
        });
        ZoomOutcome::Zoomed {
            previous_scale,
            scale,
        }
    }

    fn notify(&mut self, change: ZoomChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer.scale_changed(&change);
        }
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Point, Rect, Size, Vec2};
    use loupe_view::{FrameGeometry, ScaleRange};

    use super::{ZoomController, ZoomOutcome, toggle_decision};
    use crate::config::GestureConfig;
    use crate::notify::{ZoomCause, ZoomChange};

    fn controller(viewport: Size, content: Size) -> ZoomController {
        let geometry = FrameGeometry::new(Rect::from_origin_size(Point::ZERO, viewport), content);
        ZoomController::new(geometry, GestureConfig::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn starts_at_rest_scale_clamped_into_range() {
        let geometry = FrameGeometry::new(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(100.0, 100.0));
        let config = GestureConfig::default().with_scale_range(ScaleRange::new(2.0, 5.0));
        let zoom = ZoomController::new(geometry, config);
        assert_eq!(zoom.scale(), 2.0);
        assert_eq!(zoom.pan(), Vec2::ZERO);
    }

    #[test]
    fn unvalidated_nan_range_does_not_panic() {
        let geometry = FrameGeometry::new(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(100.0, 100.0));
        let config = GestureConfig::default().with_scale_range(ScaleRange::new(f64::NAN, 2.0));
        let mut zoom = ZoomController::new(geometry, config);
        assert_eq!(zoom.scale(), 1.0);
        zoom.wheel(Point::new(200.0, 200.0), 100.0);
        assert_eq!(zoom.scale(), 2.0);
    }

    #[test]
    fn wheel_step_scales_by_speed() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0));
        let outcome = zoom.wheel(Point::new(200.0, 200.0), 1.0);
        assert!(outcome.scale_changed(), "wheel step had no effect");
        assert_close(zoom.scale(), 1.08);
    }

    #[test]
    fn pinch_step_scales_by_speed() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0));
        zoom.pinch(Point::new(200.0, 200.0), 40.0);
        assert_close(zoom.scale(), 1.2);
    }

    #[test]
    fn scale_never_leaves_range() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0));
        let anchor = Point::new(120.0, 80.0);
        for _ in 0..100 {
            zoom.wheel(anchor, 5.0);
        }
        assert_eq!(zoom.scale(), 3.0);
        for _ in 0..100 {
            zoom.pinch(anchor, -400.0);
        }
        assert_eq!(zoom.scale(), 0.5);
        zoom.apply_zoom(anchor, f64::NAN, true);
        assert_eq!(zoom.scale(), 0.5);
    }

    #[test]
    fn at_limit_without_preserve_only_reclamps() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        zoom.apply_zoom(Point::new(200.0, 200.0), 3.0, false);
        // Bypass the clamp to simulate an external overshoot.
        zoom.state.set_pan(Vec2::new(5000.0, 0.0));
        let outcome = zoom.wheel(Point::new(0.0, 0.0), 1.0);
        assert_eq!(outcome, ZoomOutcome::AtLimit { pan_corrected: true });
        assert_eq!(zoom.pan(), Vec2::new(1300.0, 0.0));
    }

    #[test]
    fn anchor_stays_fixed_when_unclamped() {
        let mut zoom = controller(Size::new(800.0, 600.0), Size::new(1000.0, 1000.0));
        let anchor = Point::new(500.0, 300.0);
        let before = zoom
            .geometry()
            .screen_to_content_local(anchor, zoom.scale(), zoom.pan());
        zoom.apply_zoom(anchor, 1.5, false);
        assert_eq!(zoom.pan(), Vec2::new(-50.0, 0.0));
        let after = zoom
            .geometry()
            .screen_to_content_local(anchor, zoom.scale(), zoom.pan());
        assert!((before - after).hypot() < 1e-9, "anchor drifted from {before:?} to {after:?}");
    }

    #[test]
    fn toggle_round_trip_remembers_base() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0));
        let anchor = Point::new(200.0, 200.0);

        assert!(zoom.toggle_zoom(anchor).scale_changed());
        assert_eq!(zoom.scale(), 2.0);
        assert_eq!(zoom.state().remembered_base_scale(), Some(1.0));

        assert!(zoom.toggle_zoom(anchor).scale_changed());
        assert_eq!(zoom.scale(), 1.0);
        assert_eq!(zoom.state().remembered_base_scale(), Some(1.0));
    }

    #[test]
    fn toggle_zooms_out_to_remembered_base_from_any_high_scale() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0));
        let anchor = Point::new(200.0, 200.0);
        zoom.toggle_zoom(anchor);
        zoom.apply_zoom(anchor, 2.8, false);
        zoom.toggle_zoom(anchor);
        assert_eq!(zoom.scale(), 1.0);
    }

    #[test]
    fn toggle_fallback_base_is_range_midpoint_clamped_to_unit() {
        // Midpoint of [0.5, 3] is 1.75, which clamps to a base of 1.
        let config = GestureConfig::default();
        let decision = toggle_decision(1.0, None, &config);
        assert_eq!(decision.base, 1.0);
        assert!(decision.zoom_in);
        assert_eq!(decision.target, 2.0);

        // Midpoint of [0.1, 0.5] is 0.3 and stays as is.
        let config = config.with_scale_range(ScaleRange::new(0.1, 0.5));
        assert_close(toggle_decision(0.2, None, &config).base, 0.3);
    }

    #[test]
    fn toggle_direction_flips_just_below_the_zoomed_scale() {
        // Zoomed scale is 2, so the switch point is 1.9.
        let config = GestureConfig::default();
        let below = toggle_decision(1.88, None, &config);
        assert!(below.zoom_in);
        assert_eq!(below.target, 2.0);

        for scale in [1.9, 1.92] {
            let decision = toggle_decision(scale, None, &config);
            assert!(!decision.zoom_in, "scale {scale} should zoom out");
            assert_eq!(decision.target, 1.0);
        }
    }

    #[test]
    fn toggle_with_range_above_one_cannot_leave_minimum() {
        // Base falls back to 1; scale 2 is not below 1.9, so the toggle zooms
        // "out" to 1, which clamps back to the minimum of 2.
        let geometry = FrameGeometry::new(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(100.0, 100.0));
        let config = GestureConfig::default().with_scale_range(ScaleRange::new(2.0, 5.0));
        let mut zoom = ZoomController::new(geometry, config);
        let outcome = zoom.toggle_zoom(Point::new(200.0, 200.0));
        assert!(!outcome.scale_changed(), "toggle unexpectedly changed scale");
        assert_eq!(zoom.scale(), 2.0);
        assert_eq!(zoom.state().remembered_base_scale(), None);
    }

    #[test]
    fn reset_keeps_remembered_base_and_valid_pan() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        zoom.toggle_zoom(Point::new(50.0, 50.0));
        // At scale 2 the anchor math pans by (150, 150), well inside the
        // 300 px overhang that remains at scale 1.
        assert_eq!(zoom.pan(), Vec2::new(150.0, 150.0));
        assert!(zoom.reset_zoom().scale_changed());
        assert_eq!(zoom.scale(), 1.0);
        assert_eq!(zoom.pan(), Vec2::new(150.0, 150.0));
        assert_eq!(zoom.state().remembered_base_scale(), Some(1.0));

        zoom.clear_remembered_base_scale();
        assert_eq!(zoom.state().remembered_base_scale(), None);
    }

    #[test]
    fn reset_at_rest_scale_keeps_in_bounds_pan() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        zoom.pan_by(Vec2::new(200.0, 0.0));
        assert_eq!(
            zoom.reset_zoom(),
            ZoomOutcome::AtLimit {
                pan_corrected: false
            }
        );
        assert_eq!(zoom.pan(), Vec2::new(200.0, 0.0));
    }

    #[test]
    fn reset_reclamps_pan_that_no_longer_fits() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        zoom.apply_zoom(Point::new(200.0, 200.0), 3.0, false);
        zoom.pan_by(Vec2::new(1000.0, -1000.0));
        assert_eq!(zoom.pan(), Vec2::new(1000.0, -1000.0));

        let outcome = zoom.reset_zoom();
        assert!(outcome.scale_changed());
        assert_eq!(zoom.pan(), Vec2::new(300.0, -300.0));
    }

    #[test]
    fn host_sync_reclamps() {
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        zoom.pan_by(Vec2::new(1000.0, -50.0));
        assert_eq!(zoom.pan(), Vec2::new(300.0, -50.0));

        // Content shrinks below the viewport: centered again.
        zoom.set_content_base_size(Size::new(100.0, 100.0));
        assert_eq!(zoom.pan(), Vec2::ZERO);

        zoom.set_content_base_size(Size::new(1000.0, 1000.0));
        zoom.set_pan(Vec2::new(300.0, 0.0));
        zoom.set_viewport_rect(Rect::new(0.0, 0.0, 800.0, 800.0));
        assert_eq!(zoom.pan(), Vec2::new(100.0, 0.0));
    }

    #[test]
    fn observer_sees_committed_changes_only() {
        let seen: Rc<RefCell<Vec<ZoomChange>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let mut zoom = controller(Size::new(400.0, 400.0), Size::new(100.0, 100.0))
            .with_observer(move |change: &ZoomChange| sink.borrow_mut().push(*change));

        zoom.wheel(Point::new(10.0, 20.0), 1.0);
        zoom.wheel(Point::new(10.0, 20.0), 0.0);
        zoom.reset_zoom();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].cause, ZoomCause::Wheel);
        assert_eq!(seen[0].anchor, Some(Point::new(10.0, 20.0)));
        assert!(seen[0].is_zoom_in());
        assert_eq!(seen[1].cause, ZoomCause::Reset);
        assert_eq!(seen[1].scale, 1.0);
    }

    #[test]
    fn debug_info_reports_visible_region() {
        let zoom = controller(Size::new(400.0, 400.0), Size::new(1000.0, 1000.0));
        let info = zoom.debug_info();
        assert_eq!(info.scale, 1.0);
        assert_eq!(info.scaled_content_size, Size::new(1000.0, 1000.0));
        assert_eq!(info.visible_content, Rect::new(300.0, 300.0, 700.0, 700.0));
        assert_eq!(info.remembered_base_scale, None);
    }
}
