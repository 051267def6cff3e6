//! Holder representations: the players whose storage a virtual container
//! exposes.
//!
//! Per-engine-version adapters all implement [`PlayerHolder`]; the container
//! layer never sees a concrete engine type. The one implementation shipped
//! here is [`ShadowHolder`], the offline representation populated from
//! persisted data.

mod region;
mod shadow;

use std::sync::Arc;

use spyglass_registry::ItemStack;
use uuid::Uuid;

pub use region::{RegionKind, RegionSizes};
pub use shadow::ShadowHolder;

use crate::locks::SyncMutex;

/// Identity of a holder: stable id plus display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderProfile {
    /// The player's unique id.
    pub uuid: Uuid,
    /// The player's display name.
    pub name: String,
}

impl HolderProfile {
    /// Creates a profile.
    #[must_use]
    pub fn new(uuid: Uuid, name: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
        }
    }
}

/// Capability interface over one player representation.
///
/// Engine adapters implement this once per supported host version; the
/// container, layout, and slot layers are written against it exclusively.
pub trait PlayerHolder: Send + Sync {
    /// The holder's identity.
    fn profile(&self) -> &HolderProfile;

    /// Lengths of every storage region.
    fn region_sizes(&self) -> RegionSizes {
        RegionSizes {
            main: self.region(RegionKind::Main).len(),
            armor: self.region(RegionKind::Armor).len(),
            off_hand: self.region(RegionKind::OffHand).len(),
            crafting: self.region(RegionKind::Crafting).len(),
        }
    }

    /// The items of one region, in backing order.
    fn region(&self, kind: RegionKind) -> &[ItemStack];

    /// Mutable access to one region.
    fn region_mut(&mut self, kind: RegionKind) -> &mut [ItemStack];

    /// The item currently held on the cursor.
    fn cursor(&self) -> &ItemStack;

    /// Replaces the cursor item.
    fn set_cursor(&mut self, item: ItemStack);

    /// Called after a region's contents changed, so derived state (a
    /// would-be crafting result) can be recomputed.
    fn notify_changed(&mut self, kind: RegionKind);

    /// Ejects an item into the world at the holder's position.
    fn drop_item(&mut self, item: ItemStack);

    /// Whether this representation is backed by a connected player.
    fn is_online(&self) -> bool;
}

/// Shared handle to a holder, swappable on ownership hand-off.
pub type SharedHolder = Arc<SyncMutex<dyn PlayerHolder>>;
