//! Ownership hand-off between holder representations.

use std::sync::Arc;

use crate::holder::{RegionKind, SharedHolder};

use super::virtual_container::VirtualContainer;

/// Rebinds a container to a new representation of its owner.
///
/// Used when the real player transitions between an offline shadow and a
/// live in-simulation representation while someone has their inventory open:
/// the persistent regions (main, armor, off-hand) are carried over, crafting
/// grid and cursor are transient and left behind, and every open viewer
/// session keeps working against the new holder. The reverse transition
/// (live to offline) needs no rebind at all.
///
/// The whole hand-off completes within this call; slots address regions by
/// kind and index, so no viewer can observe a partially rebound container.
///
/// # Panics
/// Panics if the new representation's persistent regions differ in shape
/// from the old one's; region shapes are engine-version-invariant within a
/// rebind, so a mismatch is a logic error.
pub fn rebind(container: &mut VirtualContainer, new_holder: SharedHolder) {
    if Arc::ptr_eq(container.owner(), &new_holder) {
        return;
    }

    {
        let old = container.owner().lock();
        let mut new = new_holder.lock();
        for kind in RegionKind::PERSISTENT {
            let source = old.region(kind);
            let target = new.region_mut(kind);
            assert_eq!(
                source.len(),
                target.len(),
                "{} region changed shape during rebind of {}",
                kind.name(),
                new.profile().name,
            );
            target.clone_from_slice(source);
        }
        log::info!(
            "Rebound {}'s inventory to a {} holder",
            new.profile().name,
            if new.is_online() { "live" } else { "shadow" },
        );
    }

    container.set_owner(new_holder);
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use spyglass_registry::ItemStack;
    use uuid::Uuid;

    use crate::holder::{HolderProfile, PlayerHolder, RegionKind, ShadowHolder, SharedHolder};
    use crate::inventory::container::Container;
    use crate::inventory::virtual_container::VirtualContainer;
    use crate::locks::SyncMutex;

    use super::rebind;

    fn shared(holder: ShadowHolder) -> SharedHolder {
        Arc::new(SyncMutex::new(holder))
    }

    #[test]
    fn rebind_transfers_persistent_regions_only() {
        let uuid = Uuid::new_v4();
        let offline = shared(ShadowHolder::new(HolderProfile::new(uuid, "Steve")));
        let mut container = VirtualContainer::new(offline.clone());

        // Edit through the view while offline: virtual 0 -> backing 9.
        container
            .set_item(0, ItemStack::new("minecraft:diamond", 3))
            .expect("set");
        // Leave transient state behind in the old representation.
        offline.lock().region_mut(RegionKind::Crafting)[1] = ItemStack::new("minecraft:stick", 2);
        offline.lock().set_cursor(ItemStack::new("minecraft:dirt", 1));
        container
            .set_item(36, ItemStack::new("minecraft:iron_helmet", 1))
            .expect("set");

        let live = shared(ShadowHolder::new(HolderProfile::new(uuid, "Steve")));
        rebind(&mut container, live.clone());

        assert!(Arc::ptr_eq(container.owner(), &live));
        assert_eq!(
            live.lock().region(RegionKind::Main)[9],
            ItemStack::new("minecraft:diamond", 3)
        );
        // The pretty armor row is reversed: virtual 36 -> backing 3.
        assert_eq!(
            live.lock().region(RegionKind::Armor)[3],
            ItemStack::new("minecraft:iron_helmet", 1)
        );
        assert!(live.lock().region(RegionKind::Crafting)[1].is_empty());
        assert!(live.lock().cursor().is_empty());

        // The open view now reads and writes the new holder.
        assert_eq!(
            container.get_item(0).expect("get"),
            ItemStack::new("minecraft:diamond", 3)
        );
        container
            .set_item(1, ItemStack::new("minecraft:emerald", 1))
            .expect("set");
        assert_eq!(
            live.lock().region(RegionKind::Main)[10],
            ItemStack::new("minecraft:emerald", 1)
        );
    }

    #[test]
    fn rebind_to_the_same_holder_is_a_no_op() {
        let holder = shared(ShadowHolder::new(HolderProfile::new(
            Uuid::new_v4(),
            "Alex",
        )));
        let mut container = VirtualContainer::new(holder.clone());
        rebind(&mut container, holder.clone());
        assert!(Arc::ptr_eq(container.owner(), &holder));
    }

    #[test]
    fn rebind_keeps_viewer_sessions() {
        let uuid = Uuid::new_v4();
        let offline = shared(ShadowHolder::new(HolderProfile::new(uuid, "Steve")));
        let mut container = VirtualContainer::new(offline);
        let viewer = Uuid::new_v4();
        container.viewers_mut().open(viewer);

        let live = shared(ShadowHolder::new(HolderProfile::new(uuid, "Steve")));
        rebind(&mut container, live);
        assert_eq!(container.viewers().viewers(), &[viewer]);
    }

    #[test]
    #[should_panic(expected = "region changed shape")]
    fn rebind_rejects_mismatched_region_shapes() {
        let uuid = Uuid::new_v4();
        let offline = shared(ShadowHolder::new(HolderProfile::new(uuid, "Steve")));
        let mut container = VirtualContainer::new(offline);

        let mismatched = shared(ShadowHolder::with_sizes(
            HolderProfile::new(uuid, "Steve"),
            crate::holder::RegionSizes {
                main: 27,
                armor: 4,
                off_hand: 1,
                crafting: 4,
            },
        ));
        rebind(&mut container, mismatched);
    }
}
