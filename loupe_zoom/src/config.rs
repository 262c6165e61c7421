// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture configuration: scale limits, zoom speeds and tap tolerances.
//!
//! A [`GestureConfig`] is resolved once when an engine activates and stays
//! fixed for that instance. Use [`GestureConfig::validated`] to check a
//! config built by hand or loaded from disk.
//!
//! ```rust
//! use loupe_view::ScaleRange;
//! use loupe_zoom::GestureConfig;
//!
//! let config = GestureConfig::default()
//!     .with_scale_range(ScaleRange::new(1.0, 4.0))
//!     .with_toggle_zoom_factor(3.0)
//!     .validated()
//!     .unwrap();
//! assert_eq!(config.scale_range.max(), 4.0);
//! ```

use loupe_gesture::tap::TapTolerance;
use loupe_view::{ClampPolicy, ScaleRange};

use crate::error::ConfigError;

/// Tunable parameters for one zoomable viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Allowed scale factors, bounds included.
    pub scale_range: ScaleRange,
    /// Fractional scale change per wheel notch.
    pub wheel_zoom_speed: f64,
    /// Fractional scale change per pixel of finger-distance change.
    pub pinch_zoom_speed: f64,
    /// Multiplier applied to the base scale when a double tap zooms in.
    pub toggle_zoom_factor: f64,
    /// Maximum seconds between the taps of a double tap.
    pub double_tap_window_seconds: f64,
    /// Maximum screen distance between the taps of a double tap.
    pub double_tap_max_pixels: f64,
    /// Center content that is smaller than the viewport on an axis.
    pub center_when_smaller: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scale_range: ScaleRange::new(0.5, 3.0),
            wheel_zoom_speed: 0.08,
            pinch_zoom_speed: 0.005,
            toggle_zoom_factor: 2.0,
            double_tap_window_seconds: 0.28,
            double_tap_max_pixels: 40.0,
            center_when_smaller: true,
        }
    }
}

impl GestureConfig {
    /// Sets the allowed scale range.
    #[must_use]
    pub fn with_scale_range(mut self, range: ScaleRange) -> Self {
        self.scale_range = range;
        self
    }

    /// Sets the fractional scale change per wheel notch.
    #[must_use]
    pub fn with_wheel_zoom_speed(mut self, speed: f64) -> Self {
        self.wheel_zoom_speed = speed;
        self
    }

    /// Sets the fractional scale change per pixel of pinch.
    #[must_use]
    pub fn with_pinch_zoom_speed(mut self, speed: f64) -> Self {
        self.pinch_zoom_speed = speed;
        self
    }

    /// Sets the double-tap zoom-in multiplier.
    #[must_use]
    pub fn with_toggle_zoom_factor(mut self, factor: f64) -> Self {
        self.toggle_zoom_factor = factor;
        self
    }

    /// Sets the double-tap time window and radius.
    #[must_use]
    pub fn with_double_tap(mut self, window_seconds: f64, max_pixels: f64) -> Self {
        self.double_tap_window_seconds = window_seconds;
        self.double_tap_max_pixels = max_pixels;
        self
    }

    /// Sets whether undersized content is centered.
    #[must_use]
    pub fn with_center_when_smaller(mut self, center: bool) -> Self {
        self.center_when_smaller = center;
        self
    }

    /// Pan clamping policy implied by [`Self::center_when_smaller`].
    #[must_use]
    pub fn clamp_policy(&self) -> ClampPolicy {
        ClampPolicy::from_center_when_smaller(self.center_when_smaller)
    }

    /// Double-tap tolerance for the gesture recognizer.
    #[must_use]
    pub fn tap_tolerance(&self) -> TapTolerance {
        TapTolerance {
            window_seconds: self.double_tap_window_seconds,
            max_distance: self.double_tap_max_pixels,
        }
    }

    /// Checks every field and returns the config with its scale range
    /// normalized.
    ///
    /// Reversed range bounds are swapped. Everything else that is not finite
    /// and strictly positive is rejected.
    pub fn validated(self) -> Result<Self, ConfigError> {
        // Deserialized ranges skip `ScaleRange::new`, so normalize here.
        let range = ScaleRange::new(self.scale_range.min(), self.scale_range.max());
        if !range.is_valid() {
            return Err(ConfigError::InvalidScaleRange {
                min: self.scale_range.min(),
                max: self.scale_range.max(),
            });
        }
        for (name, value) in [
            ("wheel_zoom_speed", self.wheel_zoom_speed),
            ("pinch_zoom_speed", self.pinch_zoom_speed),
            ("toggle_zoom_factor", self.toggle_zoom_factor),
            ("double_tap_window_seconds", self.double_tap_window_seconds),
            ("double_tap_max_pixels", self.double_tap_max_pixels),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(Self {
            scale_range: range,
            ..self
        })
    }
}
