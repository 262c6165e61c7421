// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::clamp::clamp_pan;
use crate::modes::ClampPolicy;

/// Mutable zoom/pan record for one viewport and content pairing.
///
/// The state is a plain record: it does not enforce the scale range itself.
/// Whoever writes it (normally a zoom controller) is responsible for keeping
/// `scale` inside its configured range and for re-clamping the pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    scale: f64,
    pan: Vec2,
    remembered_base_scale: Option<f64>,
    content_base_size: Size,
}

impl ViewportState {
    /// Creates a state at scale `1.0`, centered, with nothing remembered.
    ///
    /// `content_base_size` is the unscaled content size measured after layout.
    #[must_use]
    pub fn new(content_base_size: Size) -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
            remembered_base_scale: None,
            content_base_size,
        }
    }

    /// Current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset relative to the centered rest position.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Scale captured on the first toggle zoom-in, if any.
    #[must_use]
    pub fn remembered_base_scale(&self) -> Option<f64> {
        self.remembered_base_scale
    }

    /// Unscaled content size.
    #[must_use]
    pub fn content_base_size(&self) -> Size {
        self.content_base_size
    }

    /// Content size at the current scale.
    #[must_use]
    pub fn scaled_content_size(&self) -> Size {
        self.content_base_size * self.scale
    }

    /// Sets the scale factor as given.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Sets the pan offset as given.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Replaces the unscaled content size.
    pub fn set_content_base_size(&mut self, size: Size) {
        self.content_base_size = size;
    }

    /// Records `scale` as the remembered base unless one is already set.
    ///
    /// Returns `true` if the value was recorded.
    pub fn remember_base_scale(&mut self, scale: f64) -> bool {
        if self.remembered_base_scale.is_some() {
            return false;
        }
        self.remembered_base_scale = Some(scale);
        true
    }

    /// Forgets the remembered base scale.
    pub fn clear_remembered_base_scale(&mut self) {
        self.remembered_base_scale = None;
    }

    /// Re-clamps the pan offset for a viewport of the given size.
    ///
    /// Returns `true` if the pan changed.
    pub fn reclamp(&mut self, viewport: Size, policy: ClampPolicy) -> bool {
        let clamped = clamp_pan(self.pan, viewport, self.scaled_content_size(), policy);
        if clamped == self.pan {
            return false;
        }
        self.pan = clamped;
        true
    }
}
