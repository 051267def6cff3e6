//! Offline holder representation.

use spyglass_registry::ItemStack;

use super::{HolderProfile, PlayerHolder, RegionKind, RegionSizes};

/// An offline player's storage, populated from persisted data.
///
/// Persistent regions (main, armor, off-hand) carry the loaded contents;
/// crafting grid and cursor start empty and stay session-local. A shadow can
/// also be captured from a live holder when a player disconnects, so open
/// viewer sessions keep a target to edit.
#[derive(Debug)]
pub struct ShadowHolder {
    profile: HolderProfile,
    main: Vec<ItemStack>,
    armor: Vec<ItemStack>,
    off_hand: Vec<ItemStack>,
    crafting: Vec<ItemStack>,
    crafting_result: Vec<ItemStack>,
    cursor: ItemStack,
    changed: bool,
}

impl ShadowHolder {
    /// Creates an empty shadow with the conventional region sizes.
    #[must_use]
    pub fn new(profile: HolderProfile) -> Self {
        Self::with_sizes(profile, RegionSizes::VANILLA)
    }

    /// Creates an empty shadow with the given region sizes.
    #[must_use]
    pub fn with_sizes(profile: HolderProfile, sizes: RegionSizes) -> Self {
        Self {
            profile,
            main: empty_region(sizes.main),
            armor: empty_region(sizes.armor),
            off_hand: empty_region(sizes.off_hand),
            crafting: empty_region(sizes.crafting),
            crafting_result: empty_region(1),
            cursor: ItemStack::empty(),
            changed: false,
        }
    }

    /// Creates a shadow from loaded persistent regions. Crafting and cursor
    /// start empty.
    #[must_use]
    pub fn from_regions(
        profile: HolderProfile,
        main: Vec<ItemStack>,
        armor: Vec<ItemStack>,
        off_hand: Vec<ItemStack>,
    ) -> Self {
        Self {
            profile,
            main,
            armor,
            off_hand,
            crafting: empty_region(RegionSizes::VANILLA.crafting),
            crafting_result: empty_region(1),
            cursor: ItemStack::empty(),
            changed: false,
        }
    }

    /// Captures the persistent regions of another holder, typically a live
    /// one that is about to disconnect.
    #[must_use]
    pub fn capture(holder: &dyn PlayerHolder) -> Self {
        Self::from_regions(
            holder.profile().clone(),
            holder.region(RegionKind::Main).to_vec(),
            holder.region(RegionKind::Armor).to_vec(),
            holder.region(RegionKind::OffHand).to_vec(),
        )
    }

    /// Returns whether any region changed since the last
    /// [`Self::clear_changed`].
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Clears the changed flag.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}

impl PlayerHolder for ShadowHolder {
    fn profile(&self) -> &HolderProfile {
        &self.profile
    }

    fn region(&self, kind: RegionKind) -> &[ItemStack] {
        match kind {
            RegionKind::Main => &self.main,
            RegionKind::Armor => &self.armor,
            RegionKind::OffHand => &self.off_hand,
            RegionKind::Crafting => &self.crafting,
            RegionKind::CraftingResult => &self.crafting_result,
        }
    }

    fn region_mut(&mut self, kind: RegionKind) -> &mut [ItemStack] {
        self.changed = true;
        match kind {
            RegionKind::Main => &mut self.main,
            RegionKind::Armor => &mut self.armor,
            RegionKind::OffHand => &mut self.off_hand,
            RegionKind::Crafting => &mut self.crafting,
            RegionKind::CraftingResult => &mut self.crafting_result,
        }
    }

    fn cursor(&self) -> &ItemStack {
        &self.cursor
    }

    fn set_cursor(&mut self, item: ItemStack) {
        self.cursor = item;
        self.changed = true;
    }

    fn notify_changed(&mut self, _kind: RegionKind) {
        // No derived state to recompute offline; the flag drives persistence.
        self.changed = true;
    }

    fn drop_item(&mut self, item: ItemStack) {
        // No world to eject into while the owner is offline.
        log::debug!(
            "Discarded {}x {} dropped from {}'s offline inventory",
            item.count(),
            item.id(),
            self.profile.name
        );
    }

    fn is_online(&self) -> bool {
        false
    }
}

fn empty_region(len: usize) -> Vec<ItemStack> {
    (0..len).map(|_| ItemStack::empty()).collect()
}
