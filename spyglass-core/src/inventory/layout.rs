//! Region layout: mapping virtual slot indices to slot policies.
//!
//! Holders with the conventional region sizes get a hand-tuned arrangement
//! matching the single-player inventory screen. Anything else (an engine
//! version growing a region) degrades to a linear pack; deviations are never
//! an error and never lose a slot.

use spyglass_registry::placeholder;

use crate::holder::RegionSizes;

use super::equipment_slot::EquipmentSlot;
use super::slot_policy::{ListSection, SlotPolicy};

/// Slots per display row; container sizes are padded to full rows.
pub const SLOTS_PER_ROW: usize = 9;

/// A computed arrangement of virtual slots.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Total virtual slot count, a multiple of [`SLOTS_PER_ROW`].
    pub size: usize,
    /// One policy per index, no gaps.
    pub slots: Vec<SlotPolicy>,
}

/// Computes the slot arrangement for a holder with the given region sizes.
#[must_use]
pub fn compute_layout(sizes: &RegionSizes) -> Layout {
    let size = sizes.raw_total().div_ceil(SLOTS_PER_ROW) * SLOTS_PER_ROW;
    let mut slots = vec![SlotPolicy::Placeholder { display: None }; size];

    // Top of the view: regular contents.
    let next = add_main_inventory(&mut slots, sizes.main);

    if sizes.is_vanilla() {
        // Armor bottom left, reversed so the helmet reads first.
        add_armor(&mut slots, 36, sizes.armor, true);
        // Off-hand below the chestplate.
        add_off_hand(&mut slots, 46, sizes.off_hand);
        // Drop slot bottom right, cursor above it.
        slots[53] = SlotPolicy::Drop;
        slots[44] = SlotPolicy::Cursor;
        // Crafting is displayed as a 2x2 in the bottom right corner.
        add_crafting(&mut slots, 41, sizes.crafting, true);
        return Layout { size, slots };
    }

    // Otherwise pack the regions linearly.
    let next = add_armor(&mut slots, next, sizes.armor, false);
    let next = add_off_hand(&mut slots, next, sizes.off_hand);
    let next = add_crafting(&mut slots, next, sizes.crafting, false);
    slots[next] = SlotPolicy::Cursor;
    // Drop slot last.
    slots[size - 1] = SlotPolicy::Drop;

    Layout { size, slots }
}

/// Maps a virtual local index into the main list to its backing index.
///
/// The backing list keeps the hotbar at indices 0-8; the view shows it as
/// the last row, so everything else moves up a row. A bijection on
/// `[0, main_len)`, computed once at bind time.
#[must_use]
pub const fn remap_main_index(local: usize, main_len: usize) -> usize {
    let hotbar_diff = main_len.saturating_sub(SLOTS_PER_ROW);
    if local < hotbar_diff {
        local + SLOTS_PER_ROW
    } else {
        local - hotbar_diff
    }
}

fn add_main_inventory(slots: &mut [SlotPolicy], main_len: usize) -> usize {
    let hotbar_diff = main_len.saturating_sub(SLOTS_PER_ROW);
    for local in 0..main_len {
        let section = if local < hotbar_diff {
            ListSection::Container
        } else {
            ListSection::Hotbar
        };
        slots[local] = SlotPolicy::List {
            index: remap_main_index(local, main_len),
            section,
        };
    }
    main_len
}

fn add_armor(slots: &mut [SlotPolicy], start: usize, armor_len: usize, reversed: bool) -> usize {
    for local in 0..armor_len {
        // Backing armor goes boots-first; the pretty view displays
        // head-to-toe left-to-right instead.
        let (index, slot) = if reversed && local < 4 {
            match local {
                0 => (3, EquipmentSlot::Head),
                1 => (2, EquipmentSlot::Chest),
                2 => (1, EquipmentSlot::Legs),
                _ => (0, EquipmentSlot::Feet),
            }
        } else {
            (local, EquipmentSlot::from_armor_index(local))
        };
        slots[start + local] = SlotPolicy::Equipment { index, slot };
    }
    start + armor_len
}

fn add_off_hand(slots: &mut [SlotPolicy], start: usize, off_hand_len: usize) -> usize {
    for local in 0..off_hand_len {
        slots[start + local] = SlotPolicy::OffHand { index: local };
    }
    start + off_hand_len
}

fn add_crafting(slots: &mut [SlotPolicy], start: usize, crafting_len: usize, pretty: bool) -> usize {
    let pretty = pretty && crafting_len == 4;

    for local in 0..crafting_len {
        // The pretty display is a 2x2 rather than linear: the second pair
        // moves down a row, into the same columns.
        let position = if local < 2 || !pretty {
            start + local
        } else {
            start + local + SLOTS_PER_ROW - 2
        };
        slots[position] = SlotPolicy::Crafting { index: local };
    }

    if pretty {
        slots[start + 2] = SlotPolicy::Placeholder {
            display: Some(placeholder::crafting_output()),
        };
        slots[start + 11] = SlotPolicy::CraftingResult;
    }

    start + crafting_len
}
