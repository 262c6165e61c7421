// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_zoom --heading-base-level=0

//! Loupe Zoom: anchor-preserving zoom for a scrollable viewport.
//!
//! This crate ties the geometry of `loupe_view` to the gestures of
//! `loupe_gesture`:
//!
//! - [`config`]: the [`GestureConfig`] (scale range, zoom speeds, tap
//!   tolerances and clamp policy) with defaults and validation.
//! - [`profile`]: a [`ProfileLibrary`] of named configs shared between
//!   viewports, and the per-instance [`ConfigSource`].
//! - [`controller`]: the [`ZoomController`], the only writer of scale and pan.
//!   It clamps the target scale, keeps the anchor under the finger or cursor,
//!   then re-clamps the pan.
//! - [`notify`]: [`ZoomObserver`]s receive a [`ZoomChange`] after every
//!   committed scale change.
//! - [`engine`]: activation through [`EngineBuilder`] and the per-frame
//!   [`ZoomEngine::tick`].
//!
//! The engine owns no clock and no animation. The host samples input once per
//! frame, calls `tick`, and renders content through
//! [`ZoomEngine::presentation`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use loupe_gesture::{FrameInput, PointerSample};
//! use loupe_zoom::{EngineBuilder, ProfileLibrary};
//!
//! let library = ProfileLibrary::new();
//! let mut engine = EngineBuilder::new()
//!     .viewport(Rect::new(0.0, 0.0, 400.0, 400.0))
//!     .content_size(Size::new(100.0, 100.0))
//!     .activate(&library)
//!     .unwrap();
//!
//! // A double click at the center zooms in to twice the base scale.
//! let at = Point::new(200.0, 200.0);
//! engine.tick(&FrameInput::at(1.0).with_pointer(PointerSample::press(at)));
//! engine.tick(&FrameInput::at(1.016).with_pointer(PointerSample::hover(at)));
//! let report = engine.tick(&FrameInput::at(1.1).with_pointer(PointerSample::press(at)));
//!
//! assert!(report.scale_changed());
//! assert_eq!(engine.scale(), 2.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `ui_events_adapter` (default): enables the `ui-events` accumulator in
//!   `loupe_gesture`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`GestureConfig`],
//!   [`ConfigSource`] and [`ProfileLibrary`].

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod notify;
pub mod profile;

pub use config::GestureConfig;
pub use controller::{ToggleDecision, ZoomController, ZoomDebugInfo, ZoomOutcome, toggle_decision};
pub use engine::{AppliedGesture, EngineBuilder, FrameReport, ZoomEngine};
pub use error::{ActivationError, ConfigError};
pub use notify::{ZoomCause, ZoomChange, ZoomObserver};
pub use profile::{ConfigSource, ProfileLibrary};
