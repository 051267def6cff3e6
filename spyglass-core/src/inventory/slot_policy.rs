//! Per-slot behavior policies.
//!
//! Each virtual slot is a policy value carrying its region tag and remapped
//! backing index as data. Policies don't own their holder; every operation
//! takes the holder as an argument, mirroring how menu slots address their
//! container.

use spyglass_registry::ItemStack;

use crate::holder::{PlayerHolder, RegionKind};

use super::equipment_slot::EquipmentSlot;

/// Which section of the main list a [`SlotPolicy::List`] slot displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSection {
    /// The non-hotbar rows.
    Container,
    /// The hotbar row.
    Hotbar,
}

/// Classification of a virtual slot, consumed by the UI bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    /// Plain main-inventory slot.
    Container,
    /// Hotbar slot.
    Hotbar,
    /// Armor slot.
    Armor,
    /// Off-hand slot.
    OffHand,
    /// Crafting grid slot.
    Crafting,
    /// Crafting result slot.
    Result,
    /// The holder's cursor item.
    Cursor,
    /// Items placed here are ejected into the world.
    Drop,
    /// Decorative, non-interactable.
    Placeholder,
}

/// The behavior bound to one virtual slot.
#[derive(Debug, Clone)]
pub enum SlotPolicy {
    /// A slot of the main inventory list, `index` already hotbar-remapped.
    List {
        /// Backing index into the main region.
        index: usize,
        /// Display section, for classification.
        section: ListSection,
    },
    /// An armor slot.
    Equipment {
        /// Backing index into the armor region.
        index: usize,
        /// Equipment category tag.
        slot: EquipmentSlot,
    },
    /// An off-hand slot.
    OffHand {
        /// Backing index into the off-hand region.
        index: usize,
    },
    /// A crafting grid slot. Writes notify the holder so derived state can
    /// be recomputed.
    Crafting {
        /// Backing index into the crafting region.
        index: usize,
    },
    /// The crafting output. Removal always takes the whole stack.
    CraftingResult,
    /// The item held on the holder's cursor.
    Cursor,
    /// Ephemeral: anything placed here is ejected into the world, never
    /// stored.
    Drop,
    /// Decorative filler, optionally rendering a fixed display item.
    Placeholder {
        /// The item to display, if any.
        display: Option<ItemStack>,
    },
}

impl SlotPolicy {
    /// Returns the slot's current item.
    #[must_use]
    pub fn get(&self, holder: &dyn PlayerHolder) -> ItemStack {
        match self {
            SlotPolicy::List { index, .. } => holder.region(RegionKind::Main)[*index].clone(),
            SlotPolicy::Equipment { index, .. } => holder.region(RegionKind::Armor)[*index].clone(),
            SlotPolicy::OffHand { index } => holder.region(RegionKind::OffHand)[*index].clone(),
            SlotPolicy::Crafting { index } => holder.region(RegionKind::Crafting)[*index].clone(),
            SlotPolicy::CraftingResult => holder
                .region(RegionKind::CraftingResult)
                .first()
                .cloned()
                .unwrap_or_default(),
            SlotPolicy::Cursor => holder.cursor().clone(),
            SlotPolicy::Drop | SlotPolicy::Placeholder { .. } => ItemStack::empty(),
        }
    }

    /// Returns the fixed item a decorative slot renders, if any.
    ///
    /// Display items are a rendering default for the UI bridge; they are not
    /// contents, so [`Self::get`] still reports such slots as empty.
    #[must_use]
    pub fn display_item(&self) -> Option<&ItemStack> {
        match self {
            SlotPolicy::Placeholder { display } => display.as_ref(),
            _ => None,
        }
    }

    /// Replaces the slot's item.
    pub fn set(&self, holder: &mut dyn PlayerHolder, item: ItemStack) {
        match self {
            SlotPolicy::List { index, .. } => {
                holder.region_mut(RegionKind::Main)[*index] = item;
            }
            SlotPolicy::Equipment { index, .. } => {
                holder.region_mut(RegionKind::Armor)[*index] = item;
            }
            SlotPolicy::OffHand { index } => {
                holder.region_mut(RegionKind::OffHand)[*index] = item;
            }
            SlotPolicy::Crafting { index } => {
                holder.region_mut(RegionKind::Crafting)[*index] = item;
                holder.notify_changed(RegionKind::Crafting);
            }
            SlotPolicy::CraftingResult => {
                if let Some(slot) = holder.region_mut(RegionKind::CraftingResult).first_mut() {
                    *slot = item;
                }
            }
            SlotPolicy::Cursor => holder.set_cursor(item),
            SlotPolicy::Drop => {
                if !item.is_empty() {
                    holder.drop_item(item);
                }
            }
            SlotPolicy::Placeholder { .. } => {}
        }
    }

    /// Removes and returns the slot's entire stack.
    pub fn remove(&self, holder: &mut dyn PlayerHolder) -> ItemStack {
        match self {
            SlotPolicy::List { index, .. } => {
                holder.region_mut(RegionKind::Main)[*index].copy_and_clear()
            }
            SlotPolicy::Equipment { index, .. } => {
                holder.region_mut(RegionKind::Armor)[*index].copy_and_clear()
            }
            SlotPolicy::OffHand { index } => {
                holder.region_mut(RegionKind::OffHand)[*index].copy_and_clear()
            }
            SlotPolicy::Crafting { index } => {
                let taken = holder.region_mut(RegionKind::Crafting)[*index].copy_and_clear();
                holder.notify_changed(RegionKind::Crafting);
                taken
            }
            SlotPolicy::CraftingResult => holder
                .region_mut(RegionKind::CraftingResult)
                .first_mut()
                .map(ItemStack::copy_and_clear)
                .unwrap_or_default(),
            SlotPolicy::Cursor => {
                let taken = holder.cursor().clone();
                holder.set_cursor(ItemStack::empty());
                taken
            }
            SlotPolicy::Drop | SlotPolicy::Placeholder { .. } => ItemStack::empty(),
        }
    }

    /// Removes up to `amount` items, leaving any remainder in the slot.
    ///
    /// The crafting result is produced whole and is not divisible from the
    /// view side, so it always yields the full stack.
    pub fn remove_partial(&self, holder: &mut dyn PlayerHolder, amount: i32) -> ItemStack {
        match self {
            SlotPolicy::List { index, .. } => {
                holder.region_mut(RegionKind::Main)[*index].split(amount)
            }
            SlotPolicy::Equipment { index, .. } => {
                holder.region_mut(RegionKind::Armor)[*index].split(amount)
            }
            SlotPolicy::OffHand { index } => {
                holder.region_mut(RegionKind::OffHand)[*index].split(amount)
            }
            SlotPolicy::Crafting { index } => {
                let taken = holder.region_mut(RegionKind::Crafting)[*index].split(amount);
                holder.notify_changed(RegionKind::Crafting);
                taken
            }
            SlotPolicy::CraftingResult => self.remove(holder),
            SlotPolicy::Cursor => {
                let mut held = holder.cursor().clone();
                let taken = held.split(amount);
                holder.set_cursor(held);
                taken
            }
            SlotPolicy::Drop | SlotPolicy::Placeholder { .. } => ItemStack::empty(),
        }
    }

    /// Returns whether a viewer can interact with this slot.
    #[must_use]
    pub const fn is_interactable(&self) -> bool {
        !matches!(self, SlotPolicy::Placeholder { .. })
    }

    /// Returns the slot classification for the UI bridge.
    #[must_use]
    pub const fn slot_type(&self) -> SlotType {
        match self {
            SlotPolicy::List {
                section: ListSection::Container,
                ..
            } => SlotType::Container,
            SlotPolicy::List {
                section: ListSection::Hotbar,
                ..
            } => SlotType::Hotbar,
            SlotPolicy::Equipment { .. } => SlotType::Armor,
            SlotPolicy::OffHand { .. } => SlotType::OffHand,
            SlotPolicy::Crafting { .. } => SlotType::Crafting,
            SlotPolicy::CraftingResult => SlotType::Result,
            SlotPolicy::Cursor => SlotType::Cursor,
            SlotPolicy::Drop => SlotType::Drop,
            SlotPolicy::Placeholder { .. } => SlotType::Placeholder,
        }
    }
}

#[cfg(test)]
mod test {
    use spyglass_registry::ItemStack;
    use uuid::Uuid;

    use crate::holder::{HolderProfile, PlayerHolder, RegionKind, ShadowHolder};

    use super::{ListSection, SlotPolicy, SlotType};

    fn shadow() -> ShadowHolder {
        ShadowHolder::new(HolderProfile::new(Uuid::new_v4(), "Alex"))
    }

    #[test]
    fn list_slot_round_trip() {
        let mut holder = shadow();
        let policy = SlotPolicy::List {
            index: 12,
            section: ListSection::Container,
        };
        policy.set(&mut holder, ItemStack::new("minecraft:stone", 7));
        assert_eq!(policy.get(&holder), ItemStack::new("minecraft:stone", 7));
        assert_eq!(
            holder.region(RegionKind::Main)[12],
            ItemStack::new("minecraft:stone", 7)
        );

        let taken = policy.remove_partial(&mut holder, 3);
        assert_eq!(taken.count(), 3);
        assert_eq!(policy.get(&holder).count(), 4);

        let rest = policy.remove(&mut holder);
        assert_eq!(rest.count(), 4);
        assert!(policy.get(&holder).is_empty());
    }

    #[test]
    fn drop_slot_never_retains() {
        let mut holder = shadow();
        let policy = SlotPolicy::Drop;
        policy.set(&mut holder, ItemStack::new("minecraft:diamond", 5));
        assert!(policy.get(&holder).is_empty());
        assert!(policy.remove(&mut holder).is_empty());
    }

    #[test]
    fn placeholder_is_display_only() {
        let mut holder = shadow();
        let display = ItemStack::new("minecraft:barrier", 1);
        let policy = SlotPolicy::Placeholder {
            display: Some(display.clone()),
        };
        assert!(!policy.is_interactable());
        assert_eq!(policy.display_item(), Some(&display));

        // The display item is a rendering default, not contents.
        assert!(policy.get(&holder).is_empty());
        policy.set(&mut holder, ItemStack::new("minecraft:stone", 1));
        assert!(policy.get(&holder).is_empty());
        assert!(policy.remove(&mut holder).is_empty());
    }

    #[test]
    fn crafting_write_notifies_holder() {
        let mut holder = shadow();
        holder.clear_changed();
        let policy = SlotPolicy::Crafting { index: 2 };
        policy.set(&mut holder, ItemStack::new("minecraft:oak_planks", 2));
        assert!(holder.has_changed());
    }

    #[test]
    fn crafting_result_takes_whole_stack() {
        let mut holder = shadow();
        holder.region_mut(RegionKind::CraftingResult)[0] = ItemStack::new("minecraft:stick", 4);
        let policy = SlotPolicy::CraftingResult;
        let taken = policy.remove_partial(&mut holder, 1);
        assert_eq!(taken.count(), 4);
        assert!(policy.get(&holder).is_empty());
    }

    #[test]
    fn cursor_partial_removal_leaves_remainder() {
        let mut holder = shadow();
        holder.set_cursor(ItemStack::new("minecraft:arrow", 10));
        let policy = SlotPolicy::Cursor;
        let taken = policy.remove_partial(&mut holder, 4);
        assert_eq!(taken.count(), 4);
        assert_eq!(holder.cursor().count(), 6);
    }

    #[test]
    fn classification() {
        assert_eq!(
            SlotPolicy::List {
                index: 0,
                section: ListSection::Hotbar
            }
            .slot_type(),
            SlotType::Hotbar
        );
        assert_eq!(SlotPolicy::Drop.slot_type(), SlotType::Drop);
        assert_eq!(
            SlotPolicy::Placeholder { display: None }.slot_type(),
            SlotType::Placeholder
        );
    }
}
