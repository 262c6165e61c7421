// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from `ui-events` pointer events to per-frame samples.
//!
//! Touch contacts are keyed by their [`PointerId`]; every other pointer type
//! drives the single mouse channel.

use ui_events::ScrollDelta;
use ui_events::pointer::{PointerButton, PointerEvent, PointerId, PointerInfo, PointerType};

use crate::accumulate::FrameAccumulator;

/// Accumulator keyed by `ui-events` pointer ids.
pub type PointerEventAccumulator = FrameAccumulator<Option<PointerId>>;

impl FrameAccumulator<Option<PointerId>> {
    /// Records one pointer event.
    ///
    /// Returns `true` if the event contributed to the pending frame.
    pub fn push(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => {
                let position = e.state.logical_point();
                if is_touch(&e.pointer) {
                    self.touch_began(e.pointer.pointer_id, position);
                } else {
                    self.pointer_pressed(position, e.button == Some(PointerButton::Primary));
                }
                true
            }
            PointerEvent::Up(e) => {
                let position = e.state.logical_point();
                if is_touch(&e.pointer) {
                    self.touch_ended(e.pointer.pointer_id, position)
                } else {
                    self.pointer_moved(position);
                    true
                }
            }
            PointerEvent::Move(e) => {
                let position = e.current.logical_point();
                if is_touch(&e.pointer) {
                    self.touch_moved(e.pointer.pointer_id, position)
                } else {
                    self.pointer_moved(position);
                    true
                }
            }
            PointerEvent::Scroll(e) => {
                let position = e.state.logical_point();
                match &e.delta {
                    ScrollDelta::LineDelta(_, y) => self.scroll_lines(position, f64::from(*y)),
                    ScrollDelta::PageDelta(_, y) => self.scroll_pages(position, f64::from(*y)),
                    ScrollDelta::PixelDelta(pos) => self.scroll_pixels(
                        position,
                        pos.to_logical::<f64>(e.state.scale_factor).y,
                    ),
                }
                true
            }
            PointerEvent::Cancel(info) => is_touch(info) && self.touch_cancelled(info.pointer_id),
            _ => false,
        }
    }
}

fn is_touch(info: &PointerInfo) -> bool {
    matches!(info.pointer_type, PointerType::Touch)
}
