//! Viewer session tracking.

use uuid::Uuid;

/// The sessions currently viewing a container.
///
/// Opens are appended without deduplication (a viewer holding two views is
/// two entries); closing removes a single occurrence. The host decides when
/// an unviewed container can be torn down.
#[derive(Debug, Default)]
pub struct ViewerRegistry {
    open: Vec<Uuid>,
}

impl ViewerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a viewer opening the container.
    pub fn open(&mut self, viewer: Uuid) {
        self.open.push(viewer);
    }

    /// Removes one occurrence of the viewer.
    pub fn close(&mut self, viewer: Uuid) {
        if let Some(position) = self.open.iter().position(|open| *open == viewer) {
            self.open.remove(position);
        }
    }

    /// The current open sessions, in opening order.
    #[must_use]
    pub fn viewers(&self) -> &[Uuid] {
        &self.open
    }

    /// Returns true when no session has the container open.
    #[must_use]
    pub fn is_unviewed(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use super::ViewerRegistry;

    #[test]
    fn duplicate_opens_close_one_at_a_time() {
        let mut registry = ViewerRegistry::new();
        let viewer = Uuid::new_v4();
        registry.open(viewer);
        registry.open(viewer);
        assert_eq!(registry.viewers().len(), 2);

        registry.close(viewer);
        assert_eq!(registry.viewers(), &[viewer]);
        registry.close(viewer);
        assert!(registry.is_unviewed());
    }

    #[test]
    fn closing_an_unknown_viewer_is_harmless() {
        let mut registry = ViewerRegistry::new();
        registry.open(Uuid::new_v4());
        registry.close(Uuid::new_v4());
        assert_eq!(registry.viewers().len(), 1);
    }
}
