//! Lock type aliases.

/// A synchronous mutex for state shared with the simulation thread.
///
/// All container and slot operations run on the single simulation thread;
/// this mutex exists to satisfy `Send + Sync` sharing, not to coordinate
/// concurrent access.
pub type SyncMutex<T> = parking_lot::Mutex<T>;
