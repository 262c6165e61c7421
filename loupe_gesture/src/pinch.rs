// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch measurement.

use kurbo::Point;

use crate::input::TouchSample;

/// Finger-distance changes at or below this many screen units are treated as
/// jitter and ignored.
pub const PINCH_DEADZONE: f64 = 0.1;

/// Distance change between two contacts over one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchDelta {
    /// Current finger distance minus the previous frame's, in screen units.
    /// Positive when the fingers spread apart.
    pub distance_delta: f64,
    /// Midpoint between the two contacts this frame.
    pub midpoint: Point,
}

/// Measures the pinch between two contacts for the current frame.
///
/// Returns `None` when either contact has been lifted or when the distance
/// change falls inside [`PINCH_DEADZONE`].
#[must_use]
pub fn pinch_delta(a: &TouchSample, b: &TouchSample) -> Option<PinchDelta> {
    if !a.pressed || !b.pressed {
        return None;
    }
    let current = a.position.distance(b.position);
    let previous = a.previous_position().distance(b.previous_position());
    let distance_delta = current - previous;
    if distance_delta.is_nan() || distance_delta.abs() <= PINCH_DEADZONE {
        return None;
    }
    Some(PinchDelta {
        distance_delta,
        midpoint: a.position.midpoint(b.position),
    })
}
