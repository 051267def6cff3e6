//! Host engine version detection and adapter selection.
//!
//! The container layer is written once against
//! [`spyglass_core::holder::PlayerHolder`]; what varies per host engine
//! version is only the adapter producing live holders. Exactly one adapter
//! is registered per supported version, and selection happens once at
//! startup so an unsupported host fails immediately rather than at first
//! use.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use spyglass_core::holder::SharedHolder;
use thiserror::Error;
use uuid::Uuid;

/// A parsed host engine version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version, zero when absent.
    pub patch: u32,
}

impl EngineVersion {
    /// Creates a version from its parts.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a `major.minor` or `major.minor.patch` version string.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed(raw.to_owned());
        let mut parts = raw.trim().split('.');
        let major = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(malformed)?;
        let minor = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(malformed)?;
        let patch = match parts.next() {
            Some(part) => part.parse().map_err(|_| malformed())?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(malformed());
        }
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Errors from version parsing and adapter selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The version string did not parse.
    #[error("malformed engine version string {0:?}")]
    Malformed(String),
    /// No adapter is registered for the detected version.
    #[error("unsupported engine version {version} (supported: {supported})")]
    Unsupported {
        /// The detected version.
        version: EngineVersion,
        /// Comma-separated supported versions.
        supported: String,
    },
}

/// Produces live holder representations on one host engine version.
///
/// Implemented by host-side glue, once per supported engine version.
pub trait HolderAdapter: Send + Sync {
    /// The engine version this adapter supports.
    fn version(&self) -> EngineVersion;

    /// Resolves the live in-simulation representation of a player, or
    /// `None` when the player is not online.
    fn live_holder(&self, uuid: Uuid) -> Option<SharedHolder>;
}

/// Registry of holder adapters, keyed by the engine version they support.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: FxHashMap<EngineVersion, Arc<dyn HolderAdapter>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter, replacing any previous one for its version.
    pub fn register(&mut self, adapter: Arc<dyn HolderAdapter>) {
        self.adapters.insert(adapter.version(), adapter);
    }

    /// Selects the adapter for a detected engine version.
    pub fn select(&self, version: EngineVersion) -> Result<Arc<dyn HolderAdapter>, VersionError> {
        self.adapters.get(&version).cloned().ok_or_else(|| {
            let mut supported: Vec<EngineVersion> = self.adapters.keys().copied().collect();
            supported.sort_unstable();
            VersionError::Unsupported {
                version,
                supported: supported
                    .iter()
                    .map(EngineVersion::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
    }
}
