// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and activation.

use thiserror::Error;

/// A gesture configuration value that cannot drive a zoom controller.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The scale range has a non-finite bound or a non-positive minimum.
    #[error("scale range [{min}, {max}] must have finite bounds and a positive minimum")]
    InvalidScaleRange {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// A speed, factor or tolerance is not finite or not strictly positive.
    #[error("`{name}` must be finite and strictly positive, got {value}")]
    InvalidParameter {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Why a [`ZoomEngine`](crate::ZoomEngine) could not be activated.
///
/// An instance that fails to activate performs no further work; the host is
/// expected to fix its wiring and activate again.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActivationError {
    /// No viewport rectangle was supplied.
    #[error("no viewport rectangle was supplied")]
    MissingViewport,
    /// No content frame size was supplied.
    #[error("no content frame was supplied")]
    MissingContent,
    /// The resolved gesture configuration was rejected.
    #[error("invalid gesture configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
