// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named, shareable gesture profiles and per-instance config selection.
//!
//! Several viewports can share one tuned [`GestureConfig`] by referring to it
//! by name in a [`ProfileLibrary`]. Each engine describes where its config
//! comes from with a [`ConfigSource`], resolved once at activation.
//!
//! ```rust
//! use loupe_zoom::{ConfigSource, GestureConfig, ProfileLibrary};
//!
//! let mut library = ProfileLibrary::new();
//! library.insert("maps", GestureConfig::default().with_toggle_zoom_factor(4.0));
//!
//! let source = ConfigSource::profile("maps");
//! assert_eq!(source.resolve(&library).unwrap().toggle_zoom_factor, 4.0);
//!
//! // Unknown profiles fall back to the inline values.
//! let source = ConfigSource::profile("photos");
//! assert_eq!(source.resolve(&library).unwrap().toggle_zoom_factor, 2.0);
//! ```

use alloc::string::String;

use hashbrown::HashMap;

use crate::config::GestureConfig;
use crate::error::ConfigError;

/// A set of named [`GestureConfig`]s.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ProfileLibrary {
    profiles: HashMap<String, GestureConfig>,
}

impl ProfileLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `config` under `name`, returning any profile it replaced.
    pub fn insert(&mut self, name: impl Into<String>, config: GestureConfig) -> Option<GestureConfig> {
        self.profiles.insert(name.into(), config)
    }

    /// Removes and returns the profile named `name`.
    pub fn remove(&mut self, name: &str) -> Option<GestureConfig> {
        self.profiles.remove(name)
    }

    /// Looks up the profile named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GestureConfig> {
        self.profiles.get(name)
    }

    /// Number of stored profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns `true` if no profile is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterates over profile names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}

/// Where one engine takes its [`GestureConfig`] from.
///
/// When `use_profile` is set and `profile` names an entry of the library, that
/// profile wins. Otherwise the inline values apply.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConfigSource {
    /// Per-instance values.
    pub inline: GestureConfig,
    /// Name of a shared profile.
    pub profile: Option<String>,
    /// Prefer the named profile over the inline values.
    pub use_profile: bool,
}

impl ConfigSource {
    /// Uses `config` directly.
    #[must_use]
    pub fn inline(config: GestureConfig) -> Self {
        Self {
            inline: config,
            profile: None,
            use_profile: false,
        }
    }

    /// Uses the profile called `name`, with default inline values as fallback.
    #[must_use]
    pub fn profile(name: impl Into<String>) -> Self {
        Self {
            inline: GestureConfig::default(),
            profile: Some(name.into()),
            use_profile: true,
        }
    }

    /// Replaces the inline fallback values.
    #[must_use]
    pub fn with_inline(mut self, config: GestureConfig) -> Self {
        self.inline = config;
        self
    }

    /// Picks the effective config and validates it.
    ///
    /// A profile name that is missing from `library` is logged and the inline
    /// values are used instead.
    pub fn resolve(&self, library: &ProfileLibrary) -> Result<GestureConfig, ConfigError> {
        let chosen = match (self.use_profile, self.profile.as_deref()) {
            (true, Some(name)) => match library.get(name) {
                Some(config) => {
                    tracing::debug!(profile = name, "using shared gesture profile");
                    *config
                }
                None => {
                    tracing::warn!(
                        profile = name,
                        "gesture profile not found, falling back to inline values"
                    );
                    self.inline
                }
            },
            _ => self.inline,
        };
        chosen.validated()
    }
}
