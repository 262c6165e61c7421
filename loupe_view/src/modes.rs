// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the pan offset is constrained on an axis where the scaled content is
/// no larger than the viewport.
///
/// On axes where the content overhangs the viewport, the pan is always
/// limited so that no content edge moves inside the viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampPolicy {
    /// Force the pan offset to zero so the content sits centered.
    #[default]
    CenterWhenSmaller,
    /// Let the content sit anywhere inside the viewport's slack.
    FreeWithinSlack,
}

impl ClampPolicy {
    /// Maps the `center_when_smaller` flag used by gesture configs to a policy.
    #[must_use]
    pub fn from_center_when_smaller(center: bool) -> Self {
        if center {
            Self::CenterWhenSmaller
        } else {
            Self::FreeWithinSlack
        }
    }

    /// Returns `true` for [`ClampPolicy::CenterWhenSmaller`].
    #[must_use]
    pub fn centers_when_smaller(self) -> bool {
        matches!(self, Self::CenterWhenSmaller)
    }
}
