// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Placement of a content frame inside a viewport.
///
/// `FrameGeometry` is the pure coordinate adapter between three spaces:
/// - **Screen space**: where pointer and touch samples are reported.
/// - **Viewport-local space**: screen space re-centered on the viewport
///   center.
/// - **Content-local space**: the content frame's own unscaled coordinates,
///   with the origin at the frame's minimum corner.
///
/// The content frame is scaled about its own center, and its center rests at
/// the viewport center shifted by the pan offset. Scale and pan are passed in
/// on every call; this type holds no zoom state of its own.
///
/// All conversions assume a finite, strictly positive `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    viewport: Rect,
    content_size: Size,
}

impl FrameGeometry {
    /// Creates a geometry for a viewport rect (screen space) and an unscaled
    /// content size.
    #[must_use]
    pub fn new(viewport: Rect, content_size: Size) -> Self {
        Self {
            viewport,
            content_size,
        }
    }

    /// Returns the viewport rectangle in screen coordinates.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Replaces the viewport rectangle.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Replaces the unscaled content size.
    pub fn set_content_size(&mut self, content_size: Size) {
        self.content_size = content_size;
    }

    /// Returns the content size after applying `scale`.
    #[must_use]
    pub fn scaled_content_size(&self, scale: f64) -> Size {
        self.content_size * scale
    }

    /// Converts a screen-space point into viewport-local coordinates.
    #[must_use]
    pub fn screen_to_viewport_local(&self, screen: Point) -> Point {
        (screen - self.viewport.center()).to_point()
    }

    /// Converts a viewport-local point back into screen coordinates.
    #[must_use]
    pub fn viewport_local_to_screen(&self, local: Point) -> Point {
        self.viewport.center() + local.to_vec2()
    }

    /// Maps a screen-space point into content-local coordinates.
    ///
    /// Undoes viewport placement, then the pan offset, then the scale.
    #[must_use]
    pub fn screen_to_content_local(&self, screen: Point, scale: f64, pan: Vec2) -> Point {
        let local = self.screen_to_viewport_local(screen).to_vec2();
        let unpanned = local - pan;
        let unscaled = unpanned / scale;
        (unscaled + self.half_content()).to_point()
    }

    /// Maps a content-local point into screen coordinates.
    ///
    /// This is the exact inverse of [`FrameGeometry::screen_to_content_local`]:
    /// it applies the scale, then the pan offset, then viewport placement.
    #[must_use]
    pub fn content_local_to_screen(&self, content: Point, scale: f64, pan: Vec2) -> Point {
        let centered = content.to_vec2() - self.half_content();
        let scaled = centered * scale;
        self.viewport_local_to_screen((scaled + pan).to_point())
    }

    /// Returns the presentation transform mapping content-local coordinates to
    /// screen space.
    ///
    /// This is the affine form of [`FrameGeometry::content_local_to_screen`],
    /// suitable for handing to a renderer.
    #[must_use]
    pub fn content_to_screen(&self, scale: f64, pan: Vec2) -> Affine {
        // Content → screen: recenter on the frame center, scale, then move the
        // center to the panned viewport center.
        Affine::translate(self.viewport.center().to_vec2() + pan)
            * Affine::scale(scale)
            * Affine::translate(-self.half_content())
    }

    /// Returns the content-local rectangle currently visible through the
    /// viewport.
    ///
    /// The result is not intersected with the content bounds; parts of it may
    /// lie outside the frame when the content is smaller than the viewport.
    #[must_use]
    pub fn visible_content_rect(&self, scale: f64, pan: Vec2) -> Rect {
        let p0 = self.screen_to_content_local(self.viewport.origin(), scale, pan);
        let p1 = self.screen_to_content_local(
            Point::new(self.viewport.max_x(), self.viewport.max_y()),
            scale,
            pan,
        );
        Rect::from_points(p0, p1)
    }

    fn half_content(&self) -> Vec2 {
        self.content_size.to_vec2() * 0.5
    }
}
