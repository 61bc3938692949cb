//! In-memory catalogue backed by a hash map.

use std::collections::HashMap;

use crate::{Destination, DestinationId};

use super::{CatalogueError, DestinationCatalogue};

/// Catalogue holding every destination in memory.
///
/// Insertion order is remembered so [`MemoryCatalogue::iter`] is stable.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Destination, DestinationCatalogue, MemoryCatalogue};
///
/// # fn main() -> Result<(), tripwise_core::CatalogueError> {
/// let catalogue = MemoryCatalogue::new(vec![Destination::new(
///     "lyon",
///     "Lyon",
///     Coord { x: 4.8357, y: 45.764 },
///     Vec::new(),
/// )])?;
/// assert!(catalogue.destination(&"lyon".into()).is_some());
/// assert!(catalogue.destination(&"nice".into()).is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogue {
    order: Vec<DestinationId>,
    entries: HashMap<DestinationId, Destination>,
}

impl MemoryCatalogue {
    /// Build a catalogue, rejecting duplicate identifiers.
    pub fn new<I>(destinations: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = Destination>,
    {
        let mut catalogue = Self::default();
        for destination in destinations {
            let id = destination.id.clone();
            if catalogue.entries.contains_key(&id) {
                return Err(CatalogueError::DuplicateId { id });
            }
            catalogue.order.push(id.clone());
            catalogue.entries.insert(id, destination);
        }
        Ok(catalogue)
    }

    /// Number of destinations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate destinations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }
}

impl DestinationCatalogue for MemoryCatalogue {
    fn destination(&self, id: &DestinationId) -> Option<Destination> {
        self.entries.get(id).cloned()
    }
}
