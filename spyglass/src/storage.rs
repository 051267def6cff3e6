//! Offline player data persistence.
//!
//! One JSON document per player UUID under the configured data directory.
//! Only the persistent regions are stored; crafting grid and cursor are
//! session-local and never serialized.

use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use spyglass_core::config::SPYGLASS_CONFIG;
use spyglass_core::holder::{HolderProfile, PlayerHolder, RegionKind, ShadowHolder};
use spyglass_registry::ItemStack;
use thiserror::Error;
use uuid::Uuid;

/// Errors from loading or saving player data.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No inventory data has ever been recorded for the player.
    #[error("no inventory data recorded for player {0}")]
    NotFound(Uuid),
    /// The data file could not be read or written.
    #[error("failed to access player data: {0}")]
    Io(#[from] io::Error),
    /// The data file exists but does not parse.
    #[error("malformed player data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted regions of one player, detached from any holder so it can
/// be captured on the simulation thread and written elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    name: String,
    main: Vec<ItemStack>,
    armor: Vec<ItemStack>,
    off_hand: Vec<ItemStack>,
}

impl PlayerSnapshot {
    /// Captures the persistent regions of a holder.
    #[must_use]
    pub fn capture(holder: &dyn PlayerHolder) -> Self {
        Self {
            name: holder.profile().name.clone(),
            main: holder.region(RegionKind::Main).to_vec(),
            armor: holder.region(RegionKind::Armor).to_vec(),
            off_hand: holder.region(RegionKind::OffHand).to_vec(),
        }
    }

    fn into_shadow(self, uuid: Uuid) -> ShadowHolder {
        ShadowHolder::from_regions(
            HolderProfile::new(uuid, self.name),
            self.main,
            self.armor,
            self.off_hand,
        )
    }
}

/// Disk-backed store of per-player inventory documents.
#[derive(Debug, Clone)]
pub struct PlayerDataStore {
    dir: PathBuf,
}

impl PlayerDataStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a store rooted at the configured data directory.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(SPYGLASS_CONFIG.data_dir.clone())
    }

    fn path_for(&self, uuid: Uuid) -> PathBuf {
        self.dir.join(format!("{uuid}.json"))
    }

    /// Loads a player's shadow holder from storage.
    ///
    /// Returns [`StorageError::NotFound`] when the player has no recorded
    /// data; callers must not construct a container in that case.
    pub async fn load(&self, uuid: Uuid) -> Result<ShadowHolder, StorageError> {
        let path = self.path_for(uuid);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound(uuid));
            }
            Err(error) => return Err(error.into()),
        };
        let snapshot: PlayerSnapshot = serde_json::from_slice(&raw)?;
        Ok(snapshot.into_shadow(uuid))
    }

    /// Writes a player's snapshot to storage.
    pub async fn save(&self, uuid: Uuid, snapshot: &PlayerSnapshot) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let raw = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(self.path_for(uuid), raw).await?;
        log::debug!("Saved inventory data for {} ({uuid})", snapshot.name);
        Ok(())
    }
}
