//! Error types for inventory operations.

use thiserror::Error;

/// Errors raised by container slot access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A slot index at or beyond the container size was used.
    #[error("slot index {index} out of bounds for container of size {size}")]
    SlotOutOfRange {
        /// The offending index.
        index: usize,
        /// The container's slot count.
        size: usize,
    },
}
