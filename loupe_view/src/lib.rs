// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: geometry and state for a zoomable content frame.
//!
//! This crate provides the headless, side-effect free pieces of a viewport
//! zoom engine. A content frame of some unscaled size sits centered inside a
//! viewport rectangle, scaled uniformly about its center and shifted by a pan
//! offset. The crate focuses on:
//! - Coordinate conversion between screen, viewport-local and content-local
//!   space ([`FrameGeometry`]).
//! - Pan clamping so content never slides past its own edge, with optional
//!   centering when content is smaller than the viewport ([`clamp_pan`]).
//! - The mutable zoom record itself ([`ViewportState`]) and the allowed scale
//!   interval ([`ScaleRange`]).
//!
//! It does **not** interpret input or decide how far to zoom. Gesture
//! recognition lives in `loupe_gesture`, and the anchor-preserving zoom
//! controller that ties everything together lives in `loupe_zoom`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use loupe_view::{ClampPolicy, FrameGeometry, clamp_pan};
//!
//! // 400x400 viewport showing a 1000x600 content frame.
//! let geometry = FrameGeometry::new(Rect::new(0.0, 0.0, 400.0, 400.0), Size::new(1000.0, 600.0));
//!
//! // Which content point is under the cursor at scale 0.5, pan (20, 0)?
//! let cursor = Point::new(250.0, 200.0);
//! let local = geometry.screen_to_content_local(cursor, 0.5, Vec2::new(20.0, 0.0));
//! let back = geometry.content_local_to_screen(local, 0.5, Vec2::new(20.0, 0.0));
//! assert!((back - cursor).hypot() < 1e-9);
//!
//! // At scale 0.5 the frame is 500x300: 50 px of horizontal overhang per
//! // side, and vertically it fits, so it is centered.
//! let pan = clamp_pan(
//!     Vec2::new(80.0, 40.0),
//!     geometry.viewport().size(),
//!     geometry.scaled_content_size(0.5),
//!     ClampPolicy::CenterWhenSmaller,
//! );
//! assert_eq!(pan, Vec2::new(50.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform and always about the content frame's center.
//! - The pan offset is measured in viewport-local units after scaling.
//! - Degenerate geometry (zero-size viewport or content) is a boundary case:
//!   the clamper pins the pan to zero on that axis instead of failing.
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod geometry;
mod modes;
mod range;
mod state;

pub use clamp::{clamp_axis, clamp_pan};
pub use geometry::FrameGeometry;
pub use modes::ClampPolicy;
pub use range::ScaleRange;
pub use state::ViewportState;
