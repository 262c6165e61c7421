// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation and the per-frame tick.
//!
//! An [`EngineBuilder`] collects everything one zoomable viewport needs: the
//! viewport rectangle, the content frame size, a [`ConfigSource`] and an
//! optional observer. [`EngineBuilder::activate`] resolves the config against
//! the injected [`ProfileLibrary`] and either yields a running [`ZoomEngine`]
//! or an [`ActivationError`]. There is no half-activated state.
//!
//! The host then calls [`ZoomEngine::tick`] exactly once per rendering frame
//! with that frame's input samples.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Rect, Size, Vec2};
use loupe_gesture::{FrameInput, Gesture, GestureRecognizer};
use loupe_view::FrameGeometry;
use smallvec::SmallVec;

use crate::controller::{ZoomController, ZoomOutcome};
use crate::error::ActivationError;
use crate::notify::ZoomObserver;
use crate::profile::{ConfigSource, ProfileLibrary};

/// Collects the collaborators of one [`ZoomEngine`].
#[derive(Default)]
pub struct EngineBuilder {
    viewport: Option<Rect>,
    content_size: Option<Size>,
    source: ConfigSource,
    observer: Option<Box<dyn ZoomObserver>>,
}

impl fmt::Debug for EngineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineBuilder")
            .field("viewport", &self.viewport)
            .field("content_size", &self.content_size)
            .field("source", &self.source)
            .field("observer", &self.observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}

impl EngineBuilder {
    /// Creates a builder with no geometry and default inline config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport rectangle in screen space.
    #[must_use]
    pub fn viewport(mut self, viewport: Rect) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Sets the unscaled content frame size.
    #[must_use]
    pub fn content_size(mut self, size: Size) -> Self {
        self.content_size = Some(size);
        self
    }

    /// Sets where the gesture config comes from.
    #[must_use]
    pub fn config(mut self, source: ConfigSource) -> Self {
        self.source = source;
        self
    }

    /// Sets the scale-change observer.
    #[must_use]
    pub fn observer(mut self, observer: impl ZoomObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Resolves the config and starts the engine.
    ///
    /// Fails when the viewport or the content frame is missing, or when the
    /// resolved config does not validate. Failures are logged at error level.
    pub fn activate(self, library: &ProfileLibrary) -> Result<ZoomEngine, ActivationError> {
        let result = self.try_activate(library);
        if let Err(err) = &result {
            tracing::error!(%err, "zoom engine disabled");
        }
        result
    }

    fn try_activate(self, library: &ProfileLibrary) -> Result<ZoomEngine, ActivationError> {
        let viewport = self.viewport.ok_or(ActivationError::MissingViewport)?;
        let content_size = self.content_size.ok_or(ActivationError::MissingContent)?;
        let config = self.source.resolve(library)?;

        let geometry = FrameGeometry::new(viewport, content_size);
        let mut controller = ZoomController::new(geometry, config);
        if let Some(observer) = self.observer {
            controller.set_boxed_observer(observer);
        }
        tracing::debug!(
            viewport_width = viewport.width(),
            viewport_height = viewport.height(),
            content_width = content_size.width,
            content_height = content_size.height,
            "zoom engine activated"
        );
        Ok(ZoomEngine {
            recognizer: GestureRecognizer::new(config.tap_tolerance()),
            controller,
        })
    }
}

/// A gesture applied during one tick, with its effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedGesture {
    /// The recognized gesture.
    pub gesture: Gesture,
    /// What applying it did.
    pub outcome: ZoomOutcome,
}

/// Summary of one [`ZoomEngine::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Gestures in the order they were applied.
    pub applied: SmallVec<[AppliedGesture; 3]>,
}

impl FrameReport {
    /// Returns `true` if no gesture was recognized this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Returns `true` if any gesture changed the scale.
    #[must_use]
    pub fn scale_changed(&self) -> bool {
        self.applied.iter().any(|a| a.outcome.scale_changed())
    }
}

/// A running zoom engine for one viewport.
#[derive(Debug)]
pub struct ZoomEngine {
    recognizer: GestureRecognizer,
    controller: ZoomController,
}

impl ZoomEngine {
    /// Runs one update pass: recognizes this frame's gestures and applies them
    /// in channel order (mouse, touch, wheel).
    pub fn tick(&mut self, input: &FrameInput) -> FrameReport {
        let mut report = FrameReport::default();
        for gesture in self.recognizer.recognize(input) {
            let outcome = self.controller.apply_gesture(&gesture);
            report.applied.push(AppliedGesture { gesture, outcome });
        }
        if !report.is_empty() {
            tracing::trace!(
                gestures = report.applied.len(),
                scale = self.controller.scale(),
                "frame applied"
            );
        }
        report
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.controller.scale()
    }

    /// Current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.controller.pan()
    }

    /// Transform a renderer applies to content-local coordinates.
    #[must_use]
    pub fn presentation(&self) -> Affine {
        self.controller.presentation()
    }

    /// Returns to the rest scale, centered.
    pub fn reset_zoom(&mut self) -> ZoomOutcome {
        self.controller.reset_zoom()
    }

    /// Re-runs the pan clamp, e.g. after an external layout change.
    pub fn reclamp_now(&mut self) -> bool {
        self.controller.reclamp_now()
    }

    /// The zoom controller.
    #[must_use]
    pub fn controller(&self) -> &ZoomController {
        &self.controller
    }

    /// Mutable access to the zoom controller, for host synchronization.
    pub fn controller_mut(&mut self) -> &mut ZoomController {
        &mut self.controller
    }

    /// The gesture recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Drops any half-finished double tap or pinch, e.g. when the viewport
    /// loses focus.
    pub fn reset_gestures(&mut self) {
        self.recognizer.reset();
    }
}
