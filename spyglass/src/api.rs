//! Session management for remotely opened inventories.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use spyglass_core::config::SPYGLASS_CONFIG;
use spyglass_core::holder::SharedHolder;
use spyglass_core::inventory::{DefaultTitles, TitleProvider, VirtualContainer, rebind};
use spyglass_core::locks::SyncMutex;
use uuid::Uuid;

use crate::storage::{PlayerDataStore, PlayerSnapshot, StorageError};
use crate::version::HolderAdapter;

/// Shared handle to an open container.
pub type SharedContainer = Arc<SyncMutex<VirtualContainer>>;

/// The plugin service: tracks which targets have their inventory open and
/// wires together holder resolution, storage, and ownership hand-off.
///
/// Offline data loading may run on a background task, but containers and
/// their slots must only be touched from the simulation thread.
pub struct Spyglass {
    adapter: Arc<dyn HolderAdapter>,
    store: PlayerDataStore,
    titles: Box<dyn TitleProvider>,
    open: SyncMutex<FxHashMap<Uuid, SharedContainer>>,
}

impl Spyglass {
    /// Creates the service for one engine adapter and data store.
    #[must_use]
    pub fn new(adapter: Arc<dyn HolderAdapter>, store: PlayerDataStore) -> Self {
        Self {
            adapter,
            store,
            titles: Box::new(DefaultTitles),
            open: SyncMutex::new(FxHashMap::default()),
        }
    }

    /// Replaces the title provider.
    #[must_use]
    pub fn with_titles(mut self, titles: Box<dyn TitleProvider>) -> Self {
        self.titles = titles;
        self
    }

    /// Opens `target`'s inventory for `viewer`.
    ///
    /// An already-open container is shared with the new viewer. Otherwise
    /// the target's live representation is used when online, else their
    /// shadow is loaded from storage; a target with no recorded data fails
    /// with [`StorageError::NotFound`] and nothing is constructed.
    pub async fn open_inventory(
        &self,
        viewer: Uuid,
        target: Uuid,
    ) -> Result<SharedContainer, StorageError> {
        if let Some(existing) = self.open.lock().get(&target).cloned() {
            existing.lock().viewers_mut().open(viewer);
            return Ok(existing);
        }

        let holder: SharedHolder = match self.adapter.live_holder(target) {
            Some(live) => live,
            None => {
                let shadow = self.store.load(target).await?;
                Arc::new(SyncMutex::new(shadow))
            }
        };

        let mut open = self.open.lock();
        // The load yielded; someone may have opened the target meanwhile.
        if let Some(existing) = open.get(&target).cloned() {
            existing.lock().viewers_mut().open(viewer);
            return Ok(existing);
        }

        let mut container = VirtualContainer::new(holder);
        container.viewers_mut().open(viewer);
        let shared = Arc::new(SyncMutex::new(container));
        open.insert(target, Arc::clone(&shared));
        log::info!("Viewer {viewer} opened {target}'s inventory");
        Ok(shared)
    }

    /// Closes `viewer`'s session on `target`'s inventory.
    ///
    /// When the last viewer leaves, the container is dropped; an offline
    /// target's shadow is persisted first if so configured.
    pub async fn close_inventory(&self, viewer: Uuid, target: Uuid) -> Result<(), StorageError> {
        let Some(container) = self.open.lock().get(&target).cloned() else {
            return Ok(());
        };

        let snapshot = {
            let mut guard = container.lock();
            guard.viewers_mut().close(viewer);
            if !guard.viewers().is_unviewed() {
                return Ok(());
            }
            let owner = guard.owner().lock();
            (!owner.is_online() && SPYGLASS_CONFIG.save_offline_on_close)
                .then(|| PlayerSnapshot::capture(&*owner))
        };

        self.open.lock().remove(&target);
        log::info!("Closed {target}'s inventory (last viewer left)");
        if let Some(snapshot) = snapshot {
            self.store.save(target, &snapshot).await?;
        }
        Ok(())
    }

    /// Hands any open container for `target` over to their live
    /// representation; called when the player logs in mid-session.
    pub fn handle_login(&self, target: Uuid, live: SharedHolder) {
        if let Some(container) = self.open.lock().get(&target).cloned() {
            rebind(&mut container.lock(), live);
        }
    }

    /// Persists `target`'s inventory when they disconnect.
    ///
    /// The live-to-offline direction needs no rebind: open sessions keep
    /// editing the representation they already hold.
    pub async fn handle_logout(&self, target: Uuid) -> Result<(), StorageError> {
        let Some(container) = self.open.lock().get(&target).cloned() else {
            return Ok(());
        };
        let snapshot = {
            let guard = container.lock();
            let owner = guard.owner().lock();
            PlayerSnapshot::capture(&*owner)
        };
        self.store.save(target, &snapshot).await
    }

    /// Returns whether `target`'s inventory is currently open.
    #[must_use]
    pub fn is_open(&self, target: Uuid) -> bool {
        self.open.lock().contains_key(&target)
    }

    /// Returns the view title for `viewer` on an open container.
    #[must_use]
    pub fn title_for(&self, viewer: Uuid, container: &SharedContainer) -> String {
        let guard = container.lock();
        let owner_name = guard.owner_name();
        self.titles.title(&owner_name, guard.owner_uuid() == viewer)
    }
}
