use thiserror::Error;

use crate::DestinationId;

/// Errors from [`crate::MemoryCatalogue::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// Two destinations share an identifier.
    ///
    /// Lookups would be ambiguous, so the catalogue refuses to build.
    #[error("destination id '{id}' appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: DestinationId,
    },
}
