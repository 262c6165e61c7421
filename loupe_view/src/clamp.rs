// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan clamping against the viewport edges.

use kurbo::{Size, Vec2};

use crate::modes::ClampPolicy;

/// Returns the pan offset corrected so the scaled content respects the
/// viewport edges.
///
/// `scaled_content` is the content size after scaling. Each axis is handled
/// independently by [`clamp_axis`]. The correction is idempotent: clamping an
/// already clamped offset returns it unchanged.
#[must_use]
pub fn clamp_pan(pan: Vec2, viewport: Size, scaled_content: Size, policy: ClampPolicy) -> Vec2 {
    Vec2::new(
        clamp_axis(pan.x, viewport.width, scaled_content.width, policy),
        clamp_axis(pan.y, viewport.height, scaled_content.height, policy),
    )
}

/// Clamps a single-axis pan offset.
///
/// - Content no larger than the viewport is centered (offset `0`) or kept
///   inside the slack, depending on `policy`.
/// - Content larger than the viewport may not be panned past its own edge.
/// - A zero, negative or non-finite extent on either side, or a non-finite
///   offset, yields `0`.
#[must_use]
pub fn clamp_axis(offset: f64, viewport_extent: f64, content_extent: f64, policy: ClampPolicy) -> f64 {
    let half_viewport = viewport_extent * 0.5;
    let half_content = content_extent * 0.5;
    if !is_positive_finite(half_viewport) || !is_positive_finite(half_content) || !offset.is_finite()
    {
        return 0.0;
    }

    if half_content <= half_viewport {
        match policy {
            ClampPolicy::CenterWhenSmaller => 0.0,
            ClampPolicy::FreeWithinSlack => {
                let slack = half_viewport - half_content;
                offset.clamp(-slack, slack)
            }
        }
    } else {
        let overhang = half_content - half_viewport;
        offset.clamp(-overhang, overhang)
    }
}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{clamp_axis, clamp_pan};
    use crate::ClampPolicy;

    #[test]
    fn smaller_content_is_centered() {
        let pan = clamp_pan(
            Vec2::new(37.0, -12.0),
            Size::new(400.0, 400.0),
            Size::new(100.0, 300.0),
            ClampPolicy::CenterWhenSmaller,
        );
        assert_eq!(pan, Vec2::ZERO);
    }

    #[test]
    fn smaller_content_may_roam_the_slack() {
        // Slack is (400 - 100) / 2 = 150 on each side.
        assert_eq!(
            clamp_axis(37.0, 400.0, 100.0, ClampPolicy::FreeWithinSlack),
            37.0
        );
        assert_eq!(
            clamp_axis(400.0, 400.0, 100.0, ClampPolicy::FreeWithinSlack),
            150.0
        );
        assert_eq!(
            clamp_axis(-400.0, 400.0, 100.0, ClampPolicy::FreeWithinSlack),
            -150.0
        );
    }

    #[test]
    fn larger_content_stops_at_its_edge() {
        // Overhang is (1000 - 400) / 2 = 300 on each side.
        for policy in [ClampPolicy::CenterWhenSmaller, ClampPolicy::FreeWithinSlack] {
            assert_eq!(clamp_axis(250.0, 400.0, 1000.0, policy), 250.0);
            assert_eq!(clamp_axis(900.0, 400.0, 1000.0, policy), 300.0);
            assert_eq!(clamp_axis(-900.0, 400.0, 1000.0, policy), -300.0);
        }
    }

    #[test]
    fn mixed_axes_are_independent() {
        let pan = clamp_pan(
            Vec2::new(500.0, 500.0),
            Size::new(400.0, 400.0),
            Size::new(1000.0, 200.0),
            ClampPolicy::CenterWhenSmaller,
        );
        assert_eq!(pan, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn degenerate_extents_force_zero() {
        for policy in [ClampPolicy::CenterWhenSmaller, ClampPolicy::FreeWithinSlack] {
            assert_eq!(clamp_axis(10.0, 0.0, 100.0, policy), 0.0);
            assert_eq!(clamp_axis(10.0, 400.0, 0.0, policy), 0.0);
            assert_eq!(clamp_axis(10.0, 0.0, 0.0, policy), 0.0);
            assert_eq!(clamp_axis(10.0, f64::NAN, 100.0, policy), 0.0);
            assert_eq!(clamp_axis(f64::NAN, 400.0, 1000.0, policy), 0.0);
        }
    }
}
