// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input samples.
//!
//! The recognizer is driven by polling: once per frame the host reads its
//! pointer, touch and wheel devices and hands the readings over as a
//! [`FrameInput`]. Reading devices is idempotent, so a frame may be sampled
//! more than once without side effects; recognizing it is not.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Mouse (or other single pointer) reading for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer position in screen coordinates.
    pub position: Point,
    /// `true` if the primary button went down during this frame.
    pub primary_pressed: bool,
}

impl PointerSample {
    /// A pointer hovering at `position` with no new press.
    #[must_use]
    pub fn hover(position: Point) -> Self {
        Self {
            position,
            primary_pressed: false,
        }
    }

    /// A pointer whose primary button went down at `position` this frame.
    #[must_use]
    pub fn press(position: Point) -> Self {
        Self {
            position,
            primary_pressed: true,
        }
    }
}

/// Reading of one touch contact for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    /// Contact position in screen coordinates.
    pub position: Point,
    /// Movement since the previous frame.
    pub delta: Vec2,
    /// `true` while the contact touches the surface.
    pub pressed: bool,
    /// `true` if the contact began during this frame.
    pub pressed_this_frame: bool,
}

impl TouchSample {
    /// A contact that began at `position` this frame.
    #[must_use]
    pub fn began(position: Point) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
            pressed: true,
            pressed_this_frame: true,
        }
    }

    /// A held contact that moved from `from` to `to` since the last frame.
    #[must_use]
    pub fn moved(from: Point, to: Point) -> Self {
        Self {
            position: to,
            delta: to - from,
            pressed: true,
            pressed_this_frame: false,
        }
    }

    /// A contact that is no longer pressed.
    #[must_use]
    pub fn released(position: Point) -> Self {
        Self {
            position,
            delta: Vec2::ZERO,
            pressed: false,
            pressed_this_frame: false,
        }
    }

    /// Position of the contact in the previous frame.
    #[must_use]
    pub fn previous_position(&self) -> Point {
        self.position - self.delta
    }
}

/// Scroll wheel reading for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Pointer position at scroll time, in screen coordinates.
    pub position: Point,
    /// Vertical wheel delta in notches (lines). Positive zooms in.
    pub delta_y: f64,
}

/// Everything the recognizer sees during one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Frame timestamp in seconds, from a clock unaffected by time scaling.
    pub time: f64,
    /// Mouse reading, if a mouse is present.
    pub pointer: Option<PointerSample>,
    /// All known touch contacts, pressed or not.
    pub touches: SmallVec<[TouchSample; 4]>,
    /// Wheel reading, if the wheel moved this frame.
    pub scroll: Option<ScrollSample>,
}

impl FrameInput {
    /// An empty frame at `time`.
    #[must_use]
    pub fn at(time: f64) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    /// Sets the mouse reading.
    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerSample) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// Appends a touch contact.
    #[must_use]
    pub fn with_touch(mut self, touch: TouchSample) -> Self {
        self.touches.push(touch);
        self
    }

    /// Sets the wheel reading.
    #[must_use]
    pub fn with_scroll(mut self, position: Point, delta_y: f64) -> Self {
        self.scroll = Some(ScrollSample { position, delta_y });
        self
    }

    /// Iterates over the contacts that are currently pressed.
    pub fn pressed_touches(&self) -> impl Iterator<Item = &TouchSample> {
        self.touches.iter().filter(|t| t.pressed)
    }
}
