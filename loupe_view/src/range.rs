// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive range of allowed scale factors.
///
/// The range is normalized on construction so that `min <= max` whenever
/// both bounds are numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleRange {
    min: f64,
    max: f64,
}

impl ScaleRange {
    /// Creates a range from two bounds, swapping them if given in reverse.
    ///
    /// Bounds are kept in place when either is NaN.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if max < min { (max, min) } else { (min, max) };
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Arithmetic midpoint of the two bounds.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Clamps `scale` into the range.
    ///
    /// Never panics. A NaN bound leaves that side unconstrained; use
    /// [`ScaleRange::is_valid`] to reject such ranges up front.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        // `f64::max`/`f64::min` ignore a NaN operand, unlike `f64::clamp`.
        scale.max(self.min).min(self.max)
    }

    /// Returns `true` if `scale` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        self.min <= scale && scale <= self.max
    }

    /// Returns `true` when both bounds are finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::new(0.5, 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleRange;

    #[test]
    fn reversed_bounds_are_normalized() {
        let range = ScaleRange::new(3.0, 0.5);
        assert_eq!(range.min(), 0.5);
        assert_eq!(range.max(), 3.0);
    }

    #[test]
    fn nan_bounds_do_not_panic() {
        let range = ScaleRange::new(f64::NAN, 2.0);
        assert!(!range.is_valid());
        assert_eq!(range.clamp(5.0), 2.0);
        assert_eq!(range.clamp(0.25), 0.25);

        let range = ScaleRange::new(0.5, f64::NAN);
        assert!(!range.is_valid());
        assert_eq!(range.clamp(0.1), 0.5);
    }

    #[test]
    fn clamp_and_contains_agree() {
        let range = ScaleRange::new(0.5, 3.0);
        for s in [0.1, 0.5, 1.0, 2.9, 3.0, 10.0] {
            assert!(range.contains(range.clamp(s)), "clamped {s} escaped the range");
        }
        assert_eq!(range.clamp(10.0), 3.0);
        assert_eq!(range.clamp(0.1), 0.5);
    }

    #[test]
    fn zero_or_non_finite_bounds_are_invalid() {
        assert!(ScaleRange::default().is_valid());
        assert!(!ScaleRange::new(0.0, 2.0).is_valid());
        assert!(!ScaleRange::new(0.5, f64::INFINITY).is_valid());
        assert!(!ScaleRange::new(f64::NAN, 1.0).is_valid());
    }
}
