// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with spatial and temporal tolerance.
//!
//! ## Usage
//!
//! 1) Call [`TapRecognizer::on_tap`] whenever a press begins on the channel.
//! 2) A [`TapOutcome::Double`] means the press completed a double tap; the
//!    recognizer forgets the first tap so a third press starts over.
//! 3) A [`TapOutcome::First`] means the press was remembered as a candidate
//!    first tap.
//!
//! There is no timer: a remembered tap simply stops qualifying once the
//! window has elapsed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::tap::{TapOutcome, TapRecognizer, TapTolerance};
//!
//! let tolerance = TapTolerance::default();
//! let mut taps = TapRecognizer::new();
//!
//! assert_eq!(taps.on_tap(1.00, Point::new(50.0, 50.0), tolerance), TapOutcome::First);
//! assert_eq!(taps.on_tap(1.10, Point::new(53.0, 48.0), tolerance), TapOutcome::Double);
//! assert!(!taps.is_awaiting_second_tap());
//! ```

use kurbo::Point;

/// How close in time and space two taps must be to form a double tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapTolerance {
    /// Maximum seconds between the two taps, inclusive.
    pub window_seconds: f64,
    /// Maximum screen distance between the two taps, inclusive.
    pub max_distance: f64,
}

impl Default for TapTolerance {
    fn default() -> Self {
        Self {
            window_seconds: 0.28,
            max_distance: 40.0,
        }
    }
}

/// Result of feeding one tap to a [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap was stored as a candidate first tap.
    First,
    /// The tap completed a double tap.
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TapRecord {
    time: f64,
    position: Point,
}

/// Last-tap memory for one input channel.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    last: Option<TapRecord>,
}

impl TapRecognizer {
    /// Creates a recognizer with no remembered tap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a tap at `time` (seconds) and `position` (screen space).
    ///
    /// A clock that runs backwards never completes a double tap; the tap is
    /// stored as a fresh first tap instead.
    pub fn on_tap(&mut self, time: f64, position: Point, tolerance: TapTolerance) -> TapOutcome {
        if let Some(last) = self.last {
            let elapsed = time - last.time;
            if (0.0..=tolerance.window_seconds).contains(&elapsed)
                && position.distance(last.position) <= tolerance.max_distance
            {
                self.last = None;
                return TapOutcome::Double;
            }
        }
        self.last = Some(TapRecord { time, position });
        TapOutcome::First
    }

    /// Returns `true` while a first tap is remembered.
    ///
    /// The remembered tap may already be too old to qualify; expiry is only
    /// evaluated when the next tap arrives.
    #[must_use]
    pub fn is_awaiting_second_tap(&self) -> bool {
        self.last.is_some()
    }

    /// Forgets any remembered tap.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
