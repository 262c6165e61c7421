// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_gesture --heading-base-level=0

//! Loupe Gesture: per-frame recognition of zoom gestures.
//!
//! This crate turns raw input readings, sampled once per frame, into the zoom
//! gestures a viewport reacts to. Each module handles one piece:
//!
//! - [`input`]: the per-frame samples ([`FrameInput`]) for mouse, touch and
//!   wheel devices.
//! - [`tap`]: last-tap memory that recognizes double taps and double clicks
//!   within a time window and a pixel radius.
//! - [`pinch`]: signed finger-distance change between two contacts, with a
//!   jitter deadzone.
//! - [`recognizer`]: the [`GestureRecognizer`] that runs every channel once
//!   per frame and reports at most one [`Gesture`] per channel.
//! - [`accumulate`]: folds event streams into per-frame samples for hosts that
//!   deliver events instead of device readings.
//!
//! Gestures carry measurements and a screen anchor only. Deciding the target
//! scale is the job of the zoom controller in `loupe_zoom`. Drag-to-pan is not
//! recognized here; it belongs to the host's scroll container.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{FrameInput, Gesture, GestureRecognizer, TouchSample, tap::TapTolerance};
//!
//! let mut recognizer = GestureRecognizer::new(TapTolerance::default());
//!
//! // Two fingers spread from 100 px apart to 140 px apart in one frame.
//! let frame = FrameInput::at(0.5)
//!     .with_touch(TouchSample::moved(Point::new(150.0, 300.0), Point::new(130.0, 300.0)))
//!     .with_touch(TouchSample::moved(Point::new(250.0, 300.0), Point::new(270.0, 300.0)));
//!
//! let gestures = recognizer.recognize(&frame);
//! assert!(matches!(
//!     gestures.as_slice(),
//!     [Gesture::Pinch { distance_delta, .. }] if (distance_delta - 40.0).abs() < 1e-9
//! ));
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): `FrameAccumulator::push` for
//!   `ui_events::pointer::PointerEvent`.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod accumulate;
pub mod input;
pub mod pinch;
pub mod recognizer;
pub mod tap;

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events_adapter;

pub use input::{FrameInput, PointerSample, ScrollSample, TouchSample};
pub use recognizer::{FrameGestures, Gesture, GestureRecognizer, InputChannel};
