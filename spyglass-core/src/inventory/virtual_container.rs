//! The unified virtual container over a holder's storage regions.

use spyglass_registry::ItemStack;
use uuid::Uuid;

use crate::config::SPYGLASS_CONFIG;
use crate::error::InventoryError;
use crate::holder::{RegionKind, SharedHolder};

use super::container::Container;
use super::layout::{self, Layout};
use super::slot_policy::{SlotPolicy, SlotType};
use super::viewers::ViewerRegistry;

/// One player's storage regions presented as a single slot-addressable
/// container.
///
/// Built once per "open inventory" request from the owner's region sizes at
/// that moment; the slot arrangement is fixed for the container's lifetime.
/// The backing holder can be swapped by [`rebind`] when the owner changes
/// representation, without disturbing open viewer sessions.
///
/// [`rebind`]: super::binder::rebind
pub struct VirtualContainer {
    slots: Vec<SlotPolicy>,
    size: usize,
    owner: SharedHolder,
    max_stack_size: i32,
    viewers: ViewerRegistry,
}

impl VirtualContainer {
    /// Creates a container over the given holder.
    #[must_use]
    pub fn new(owner: SharedHolder) -> Self {
        let sizes = owner.lock().region_sizes();
        let Layout { size, slots } = layout::compute_layout(&sizes);
        Self {
            slots,
            size,
            owner,
            max_stack_size: SPYGLASS_CONFIG.default_max_stack_size,
            viewers: ViewerRegistry::new(),
        }
    }

    /// Returns the current backing holder.
    #[must_use]
    pub fn owner(&self) -> &SharedHolder {
        &self.owner
    }

    /// Returns the owner's unique id.
    #[must_use]
    pub fn owner_uuid(&self) -> Uuid {
        self.owner.lock().profile().uuid
    }

    /// Returns the owner's display name.
    #[must_use]
    pub fn owner_name(&self) -> String {
        self.owner.lock().profile().name.clone()
    }

    pub(super) fn set_owner(&mut self, owner: SharedHolder) {
        self.owner = owner;
    }

    /// Sets the maximum stack size this container reports.
    pub fn set_max_stack_size(&mut self, max_stack_size: i32) {
        self.max_stack_size = max_stack_size;
    }

    /// Returns the classification of the slot at `index`.
    pub fn slot_type(&self, index: usize) -> Result<SlotType, InventoryError> {
        Ok(self.policy(index)?.slot_type())
    }

    /// Returns whether the slot at `index` accepts viewer interaction.
    pub fn is_interactable(&self, index: usize) -> Result<bool, InventoryError> {
        Ok(self.policy(index)?.is_interactable())
    }

    /// Returns the fixed item a decorative slot renders, if any.
    pub fn display_item(&self, index: usize) -> Result<Option<ItemStack>, InventoryError> {
        Ok(self.policy(index)?.display_item().cloned())
    }

    /// The sessions currently viewing this container.
    #[must_use]
    pub fn viewers(&self) -> &ViewerRegistry {
        &self.viewers
    }

    /// Mutable access to the viewer sessions.
    pub fn viewers_mut(&mut self) -> &mut ViewerRegistry {
        &mut self.viewers
    }

    fn policy(&self, index: usize) -> Result<&SlotPolicy, InventoryError> {
        self.slots.get(index).ok_or(InventoryError::SlotOutOfRange {
            index,
            size: self.size,
        })
    }
}

impl Container for VirtualContainer {
    fn size(&self) -> usize {
        self.size
    }

    fn get_item(&self, index: usize) -> Result<ItemStack, InventoryError> {
        let policy = self.policy(index)?;
        Ok(policy.get(&*self.owner.lock()))
    }

    fn set_item(&mut self, index: usize, item: ItemStack) -> Result<(), InventoryError> {
        let policy = self.policy(index)?;
        policy.set(&mut *self.owner.lock(), item);
        Ok(())
    }

    fn remove_item(&mut self, index: usize, amount: i32) -> Result<ItemStack, InventoryError> {
        let policy = self.policy(index)?;
        Ok(policy.remove_partial(&mut *self.owner.lock(), amount))
    }

    fn remove_item_no_update(&mut self, index: usize) -> Result<ItemStack, InventoryError> {
        let policy = self.policy(index)?;
        Ok(policy.remove(&mut *self.owner.lock()))
    }

    fn max_stack_size(&self) -> i32 {
        self.max_stack_size
    }

    fn set_changed(&mut self) {
        // Region writes already go through the holder; nothing to track here.
    }

    fn clear(&mut self) {
        let mut owner = self.owner.lock();
        for kind in RegionKind::ALL {
            for slot in owner.region_mut(kind) {
                *slot = ItemStack::empty();
            }
        }
        owner.set_cursor(ItemStack::empty());
        owner.notify_changed(RegionKind::Crafting);
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use spyglass_registry::ItemStack;
    use uuid::Uuid;

    use crate::error::InventoryError;
    use crate::holder::{HolderProfile, PlayerHolder, RegionKind, ShadowHolder, SharedHolder};
    use crate::inventory::container::Container;
    use crate::inventory::slot_policy::SlotType;
    use crate::locks::SyncMutex;

    use super::VirtualContainer;

    fn shared_shadow() -> SharedHolder {
        Arc::new(SyncMutex::new(ShadowHolder::new(HolderProfile::new(
            Uuid::new_v4(),
            "Steve",
        ))))
    }

    #[test]
    fn vanilla_shadow_gets_the_pretty_size() {
        let container = VirtualContainer::new(shared_shadow());
        assert_eq!(container.size(), 54);
        assert_eq!(container.max_stack_size(), 99);
        assert!(container.is_still_valid());
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut container = VirtualContainer::new(shared_shadow());
        assert_eq!(
            container.get_item(54),
            Err(InventoryError::SlotOutOfRange {
                index: 54,
                size: 54
            })
        );
        assert!(container.set_item(99, ItemStack::empty()).is_err());
        assert!(container.remove_item(54, 1).is_err());
        assert!(container.remove_item_no_update(54).is_err());
    }

    #[test]
    fn set_and_get_through_the_hotbar_remap() {
        let holder = shared_shadow();
        let mut container = VirtualContainer::new(holder.clone());

        // Virtual index 0 is the first non-hotbar row, backing index 9.
        let stack = ItemStack::new("minecraft:stone", 3);
        container.set_item(0, stack.clone()).expect("set");
        assert_eq!(container.get_item(0).expect("get"), stack);
        assert_eq!(holder.lock().region(RegionKind::Main)[9], stack);

        // Virtual index 27 is the first hotbar slot, backing index 0.
        let sword = ItemStack::new("minecraft:iron_sword", 1);
        container.set_item(27, sword.clone()).expect("set");
        assert_eq!(holder.lock().region(RegionKind::Main)[0], sword);
    }

    #[test]
    fn is_empty_matches_snapshot() {
        let mut container = VirtualContainer::new(shared_shadow());
        assert!(container.is_empty());
        assert!(container.snapshot().iter().all(ItemStack::is_empty));

        container
            .set_item(5, ItemStack::new("minecraft:dirt", 1))
            .expect("set");
        assert!(!container.is_empty());
        let snapshot = container.snapshot();
        assert_eq!(snapshot.len(), 54);
        assert_eq!(snapshot.iter().filter(|item| !item.is_empty()).count(), 1);
    }

    #[test]
    fn decorative_slot_renders_but_holds_nothing() {
        let container = VirtualContainer::new(shared_shadow());
        assert!(container.get_item(43).expect("get").is_empty());
        assert!(container.display_item(43).expect("display").is_some());
        assert!(container.display_item(0).expect("display").is_none());
    }

    #[test]
    fn partial_removal_leaves_remainder() {
        let mut container = VirtualContainer::new(shared_shadow());
        container
            .set_item(10, ItemStack::new("minecraft:arrow", 16))
            .expect("set");
        let taken = container.remove_item(10, 6).expect("remove");
        assert_eq!(taken.count(), 6);
        assert_eq!(container.get_item(10).expect("get").count(), 10);
    }

    #[test]
    fn clear_empties_regions_and_cursor() {
        let holder = shared_shadow();
        let mut container = VirtualContainer::new(holder.clone());
        container
            .set_item(0, ItemStack::new("minecraft:stone", 1))
            .expect("set");
        holder
            .lock()
            .set_cursor(ItemStack::new("minecraft:diamond", 2));
        holder.lock().region_mut(RegionKind::Crafting)[0] = ItemStack::new("minecraft:oak_log", 1);

        container.clear();
        assert!(container.is_empty());
        assert!(holder.lock().cursor().is_empty());
    }

    #[test]
    fn slot_classification_is_exposed() {
        let container = VirtualContainer::new(shared_shadow());
        assert_eq!(container.slot_type(27).expect("type"), SlotType::Hotbar);
        assert_eq!(container.slot_type(36).expect("type"), SlotType::Armor);
        assert_eq!(container.slot_type(53).expect("type"), SlotType::Drop);
        assert!(!container.is_interactable(43).expect("interactable"));
        assert!(container.slot_type(54).is_err());
    }
}
