// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-level gesture recognition across the mouse, touch and wheel channels.

use kurbo::Point;
use smallvec::SmallVec;

use crate::input::{FrameInput, TouchSample};
use crate::pinch::pinch_delta;
use crate::tap::{TapOutcome, TapRecognizer, TapTolerance};

/// Independent input channel a gesture arrived on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputChannel {
    /// Mouse or other single pointer.
    Mouse,
    /// Touch contacts (single-finger taps and two-finger pinches).
    Touch,
    /// Scroll wheel.
    Wheel,
}

/// A recognized zoom gesture.
///
/// Gestures carry raw measurements and a screen anchor. Turning them into a
/// target scale is left to the zoom controller, which knows the current scale
/// and configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A double tap or double click.
    ToggleZoom {
        /// Channel the taps arrived on.
        channel: InputChannel,
        /// Position of the second tap.
        anchor: Point,
    },
    /// A two-finger pinch step.
    Pinch {
        /// Midpoint between the fingers.
        anchor: Point,
        /// Signed change in finger distance since the previous frame.
        distance_delta: f64,
    },
    /// A wheel step.
    Wheel {
        /// Pointer position at scroll time.
        anchor: Point,
        /// Signed wheel delta in notches.
        delta_y: f64,
    },
}

impl Gesture {
    /// Screen-space point the zoom should stay anchored to.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match *self {
            Self::ToggleZoom { anchor, .. }
            | Self::Pinch { anchor, .. }
            | Self::Wheel { anchor, .. } => anchor,
        }
    }

    /// Channel this gesture arrived on.
    #[must_use]
    pub fn channel(&self) -> InputChannel {
        match *self {
            Self::ToggleZoom { channel, .. } => channel,
            Self::Pinch { .. } => InputChannel::Touch,
            Self::Wheel { .. } => InputChannel::Wheel,
        }
    }
}

/// Gestures recognized in one frame; at most one per [`InputChannel`].
pub type FrameGestures = SmallVec<[Gesture; 3]>;

/// Turns per-frame input samples into zoom gestures.
///
/// Each channel keeps its own state and is evaluated exactly once per call to
/// [`GestureRecognizer::recognize`], in the order mouse, touch, wheel.
#[derive(Clone, Debug, Default)]
pub struct GestureRecognizer {
    tolerance: TapTolerance,
    mouse_taps: TapRecognizer,
    touch_taps: TapRecognizer,
    pinching: bool,
}

impl GestureRecognizer {
    /// Creates a recognizer using `tolerance` for double taps on every channel.
    #[must_use]
    pub fn new(tolerance: TapTolerance) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Returns the double-tap tolerance.
    #[must_use]
    pub fn tolerance(&self) -> TapTolerance {
        self.tolerance
    }

    /// Returns `true` while exactly two contacts were down in the last frame.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    /// Forgets remembered taps and pinch tracking on every channel.
    pub fn reset(&mut self) {
        self.mouse_taps.reset();
        self.touch_taps.reset();
        self.pinching = false;
    }

    /// Recognizes the gestures contained in one frame of input.
    pub fn recognize(&mut self, input: &FrameInput) -> FrameGestures {
        let mut gestures = FrameGestures::new();
        gestures.extend(self.recognize_mouse(input));
        gestures.extend(self.recognize_touch(input));
        gestures.extend(recognize_wheel(input));
        gestures
    }

    fn recognize_mouse(&mut self, input: &FrameInput) -> Option<Gesture> {
        let pointer = input.pointer?;
        if !pointer.primary_pressed {
            return None;
        }
        match self
            .mouse_taps
            .on_tap(input.time, pointer.position, self.tolerance)
        {
            TapOutcome::Double => {
                tracing::debug!(anchor = ?pointer.position, "double click");
                Some(Gesture::ToggleZoom {
                    channel: InputChannel::Mouse,
                    anchor: pointer.position,
                })
            }
            TapOutcome::First => None,
        }
    }

    fn recognize_touch(&mut self, input: &FrameInput) -> Option<Gesture> {
        let pressed: SmallVec<[&TouchSample; 4]> = input.pressed_touches().collect();
        match pressed.as_slice() {
            [touch] => {
                self.set_pinching(false);
                if !touch.pressed_this_frame {
                    return None;
                }
                match self
                    .touch_taps
                    .on_tap(input.time, touch.position, self.tolerance)
                {
                    TapOutcome::Double => {
                        tracing::debug!(anchor = ?touch.position, "double tap");
                        Some(Gesture::ToggleZoom {
                            channel: InputChannel::Touch,
                            anchor: touch.position,
                        })
                    }
                    TapOutcome::First => None,
                }
            }
            [a, b] => {
                self.set_pinching(true);
                let pinch = pinch_delta(a, b)?;
                tracing::trace!(
                    delta = pinch.distance_delta,
                    anchor = ?pinch.midpoint,
                    "pinch step"
                );
                Some(Gesture::Pinch {
                    anchor: pinch.midpoint,
                    distance_delta: pinch.distance_delta,
                })
            }
            _ => {
                self.set_pinching(false);
                None
            }
        }
    }

    fn set_pinching(&mut self, pinching: bool) {
        if self.pinching != pinching {
            tracing::trace!(pinching, "pinch tracking changed");
            self.pinching = pinching;
        }
    }
}

fn recognize_wheel(input: &FrameInput) -> Option<Gesture> {
    let scroll = input.scroll?;
    if !scroll.delta_y.is_finite() || scroll.delta_y.abs() < f64::EPSILON {
        return None;
    }
    Some(Gesture::Wheel {
        anchor: scroll.position,
        delta_y: scroll.delta_y,
    })
}
