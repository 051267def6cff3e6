//! Container trait for item storage.

use spyglass_registry::ItemStack;

use crate::error::InventoryError;

/// A uniform interface over slot-addressable item storage.
///
/// Unlike a chest backed by its own item list, implementations may proxy
/// storage shared with the simulation (a player's regions behind a mutex),
/// so accessors return owned stacks and indexed access is fallible: callers
/// such as the UI bridge must never issue indices at or beyond [`size`].
///
/// [`size`]: Container::size
pub trait Container: Send + Sync {
    /// Returns the number of slots in this container.
    fn size(&self) -> usize;

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        for index in 0..self.size() {
            if self
                .get_item(index)
                .is_ok_and(|item| !item.is_empty())
            {
                return false;
            }
        }
        true
    }

    /// Gets the item in the given slot.
    fn get_item(&self, index: usize) -> Result<ItemStack, InventoryError>;

    /// Sets the item in the given slot.
    fn set_item(&mut self, index: usize, item: ItemStack) -> Result<(), InventoryError>;

    /// Removes up to `amount` items from the given slot and returns them,
    /// leaving any remainder in place.
    fn remove_item(&mut self, index: usize, amount: i32) -> Result<ItemStack, InventoryError>;

    /// Removes and returns the entire stack from the given slot without
    /// triggering updates.
    fn remove_item_no_update(&mut self, index: usize) -> Result<ItemStack, InventoryError>;

    /// Returns the maximum stack size this container allows.
    fn max_stack_size(&self) -> i32 {
        99
    }

    /// Called when the container contents change.
    fn set_changed(&mut self);

    /// Materializes every slot's current item, in index order.
    fn snapshot(&self) -> Vec<ItemStack> {
        (0..self.size())
            .map(|index| self.get_item(index).unwrap_or_default())
            .collect()
    }

    /// Clears all items from this container.
    fn clear(&mut self);

    /// Returns whether the container can still be interacted with.
    ///
    /// A player-backed view has no location constraint, so the default is
    /// unconditionally true.
    fn is_still_valid(&self) -> bool {
        true
    }
}
