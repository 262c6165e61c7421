// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folding event streams into per-frame samples.
//!
//! Event-driven hosts deliver input as a stream of discrete events rather than
//! as device readings. [`FrameAccumulator`] records that stream between two
//! frame ticks and produces the equivalent [`FrameInput`]:
//!
//! - Primary-button presses become [`PointerSample::primary_pressed`].
//! - Touch contacts are tracked by a host-chosen key, with their per-frame
//!   movement accumulated into [`TouchSample::delta`].
//! - Scroll deltas are converted into wheel notches and summed, so every
//!   scroll event of a frame lands in a single wheel reading at the position
//!   of the last one. A polled wheel reports the same per-frame total.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::accumulate::FrameAccumulator;
//!
//! let mut acc = FrameAccumulator::<u64>::default();
//! acc.touch_began(7, Point::new(100.0, 100.0));
//! acc.touch_began(9, Point::new(200.0, 100.0));
//! let first = acc.finish_frame(0.0);
//! assert_eq!(first.pressed_touches().count(), 2);
//!
//! acc.touch_moved(9, Point::new(240.0, 100.0));
//! let second = acc.finish_frame(1.0 / 60.0);
//! assert_eq!(second.touches[1].delta.x, 40.0);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::input::{FrameInput, PointerSample, ScrollSample, TouchSample};

/// Conversion of non-line scroll deltas into wheel notches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUnits {
    /// Logical pixels that count as one notch for pixel-precise devices.
    pub pixels_per_line: f64,
    /// Notches per page for page-wise scrolling.
    pub lines_per_page: f64,
}

impl Default for ScrollUnits {
    fn default() -> Self {
        Self {
            pixels_per_line: 40.0,
            lines_per_page: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct LiveTouch<K> {
    key: K,
    sample: TouchSample,
    lifted: bool,
}

/// Collects input events between frame ticks.
///
/// `K` identifies touch contacts; use whatever id the host's touch events
/// carry.
#[derive(Clone, Debug)]
pub struct FrameAccumulator<K> {
    units: ScrollUnits,
    pointer_position: Option<Point>,
    primary_pressed: bool,
    touches: SmallVec<[LiveTouch<K>; 4]>,
    scroll_y: f64,
    scroll_position: Option<Point>,
}

impl<K: Copy + PartialEq> Default for FrameAccumulator<K> {
    fn default() -> Self {
        Self::new(ScrollUnits::default())
    }
}

impl<K: Copy + PartialEq> FrameAccumulator<K> {
    /// Creates an accumulator using `units` for scroll conversion.
    #[must_use]
    pub fn new(units: ScrollUnits) -> Self {
        Self {
            units,
            pointer_position: None,
            primary_pressed: false,
            touches: SmallVec::new(),
            scroll_y: 0.0,
            scroll_position: None,
        }
    }

    /// Returns the scroll conversion units.
    #[must_use]
    pub fn units(&self) -> ScrollUnits {
        self.units
    }

    /// Records a pointer position without a press.
    pub fn pointer_moved(&mut self, position: Point) {
        self.pointer_position = Some(position);
    }

    /// Records a pointer button press; only the primary button counts as a tap.
    pub fn pointer_pressed(&mut self, position: Point, primary: bool) {
        self.pointer_position = Some(position);
        if primary {
            self.primary_pressed = true;
        }
    }

    /// Records a new touch contact. A contact already known under `key` is
    /// restarted.
    pub fn touch_began(&mut self, key: K, position: Point) {
        let sample = TouchSample::began(position);
        match self.touch_mut(key) {
            Some(touch) => {
                touch.sample = sample;
                touch.lifted = false;
            }
            None => self.touches.push(LiveTouch {
                key,
                sample,
                lifted: false,
            }),
        }
    }

    /// Records movement of a known contact. Returns `false` for unknown keys.
    pub fn touch_moved(&mut self, key: K, position: Point) -> bool {
        let Some(touch) = self.touch_mut(key) else {
            return false;
        };
        touch.sample.delta += position - touch.sample.position;
        touch.sample.position = position;
        true
    }

    /// Records the end of a contact. Returns `false` for unknown keys.
    ///
    /// A contact that began in the same frame is still reported as pressed
    /// once, so taps shorter than a frame are not lost.
    pub fn touch_ended(&mut self, key: K, position: Point) -> bool {
        if !self.touch_moved(key, position) {
            return false;
        }
        if let Some(touch) = self.touch_mut(key) {
            touch.lifted = true;
            if !touch.sample.pressed_this_frame {
                touch.sample.pressed = false;
            }
        }
        true
    }

    /// Forgets a contact without reporting a release. Returns `false` for
    /// unknown keys.
    pub fn touch_cancelled(&mut self, key: K) -> bool {
        let before = self.touches.len();
        self.touches.retain(|t| t.key != key);
        self.touches.len() != before
    }

    /// Adds a wheel step measured in lines (notches).
    ///
    /// Steps within one frame are summed into that frame's single
    /// [`ScrollSample`], which zooms once by the total.
    pub fn scroll_lines(&mut self, position: Point, lines: f64) {
        self.pointer_position = Some(position);
        self.scroll_position = Some(position);
        self.scroll_y += lines;
    }

    /// Adds a wheel step measured in pages.
    pub fn scroll_pages(&mut self, position: Point, pages: f64) {
        self.scroll_lines(position, pages * self.units.lines_per_page);
    }

    /// Adds a wheel step measured in logical pixels.
    pub fn scroll_pixels(&mut self, position: Point, pixels: f64) {
        if self.units.pixels_per_line > 0.0 {
            self.scroll_lines(position, pixels / self.units.pixels_per_line);
        }
    }

    /// Emits the frame accumulated so far and starts the next one.
    pub fn finish_frame(&mut self, time: f64) -> FrameInput {
        let touches = self
            .touches
            .iter()
            .filter(|t| !t.lifted || t.sample.pressed_this_frame)
            .map(|t| t.sample)
            .collect();
        let pointer = self.pointer_position.map(|position| PointerSample {
            position,
            primary_pressed: self.primary_pressed,
        });
        let scroll = self.scroll_position.map(|position| ScrollSample {
            position,
            delta_y: self.scroll_y,
        });

        self.touches.retain(|t| !t.lifted);
        for touch in &mut self.touches {
            touch.sample.delta = Vec2::ZERO;
            touch.sample.pressed_this_frame = false;
        }
        self.primary_pressed = false;
        self.scroll_y = 0.0;
        self.scroll_position = None;

        FrameInput {
            time,
            pointer,
            touches,
            scroll,
        }
    }

    fn touch_mut(&mut self, key: K) -> Option<&mut LiveTouch<K>> {
        self.touches.iter_mut().find(|t| t.key == key)
    }
}
