// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale change notifications.
//!
//! Hosts that need to react to zoom (re-rasterizing at a new resolution,
//! updating a zoom readout) register a [`ZoomObserver`]. Closures taking a
//! [`ZoomChange`] implement the trait directly.

use kurbo::Point;

/// What triggered a scale change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomCause {
    /// A double tap or double click.
    Toggle,
    /// A two-finger pinch.
    Pinch,
    /// A wheel step.
    Wheel,
    /// An explicit reset to the rest scale.
    Reset,
    /// A host call to `apply_zoom`.
    Programmatic,
}

/// One committed scale change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomChange {
    /// Scale before the change.
    pub previous_scale: f64,
    /// Scale after the change, already clamped into range.
    pub scale: f64,
    /// Screen anchor of the zoom, if it had one.
    pub anchor: Option<Point>,
    /// What triggered the change.
    pub cause: ZoomCause,
}

impl ZoomChange {
    /// Returns `true` if the content got larger.
    #[must_use]
    pub fn is_zoom_in(&self) -> bool {
        self.scale > self.previous_scale
    }
}

/// Receives [`ZoomChange`]s after they are applied.
///
/// Observers run synchronously inside the zoom call, after the pan has been
/// re-clamped, so they always see a consistent state.
pub trait ZoomObserver {
    /// Called once per committed scale change.
    fn scale_changed(&mut self, change: &ZoomChange);
}

impl<F: FnMut(&ZoomChange)> ZoomObserver for F {
    fn scale_changed(&mut self, change: &ZoomChange) {
        self(change);
    }
}
