//! Lookup of destination reference data.
//!
//! The `DestinationCatalogue` trait resolves [`DestinationId`] values to full
//! [`Destination`] records. Planning code only ever reads from a catalogue;
//! how the records are loaded is up to the implementer.

mod error;
mod memory;

pub use error::CatalogueError;
pub use memory::MemoryCatalogue;

use crate::{Destination, DestinationId};

/// Outcome of resolving an ordered list of identifiers.
///
/// `found` keeps the order of the input, minus any identifiers the
/// catalogue does not know. Those are listed in `missing`, also in input
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolution {
    /// Destinations that were resolved.
    pub found: Vec<Destination>,
    /// Identifiers without a catalogue entry.
    pub missing: Vec<DestinationId>,
}

/// Read-only access to destinations.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use tripwise_core::{Destination, DestinationCatalogue, DestinationId};
///
/// struct Single(Destination);
///
/// impl DestinationCatalogue for Single {
///     fn destination(&self, id: &DestinationId) -> Option<Destination> {
///         (self.0.id == *id).then(|| self.0.clone())
///     }
/// }
///
/// let rome = Destination::new("rome", "Rome", Coord { x: 12.5, y: 41.9 }, Vec::new());
/// let catalogue = Single(rome);
/// let resolution = catalogue.resolve(&["rome".into(), "oslo".into()]);
/// assert_eq!(resolution.found.len(), 1);
/// assert_eq!(resolution.missing, vec![DestinationId::from("oslo")]);
/// ```
pub trait DestinationCatalogue {
    /// Return the destination registered under `id`, if any.
    fn destination(&self, id: &DestinationId) -> Option<Destination>;

    /// Resolve `ids` in order, separating known from unknown identifiers.
    fn resolve(&self, ids: &[DestinationId]) -> Resolution {
        let mut resolution = Resolution::default();
        for id in ids {
            match self.destination(id) {
                Some(found) => resolution.found.push(found),
                None => resolution.missing.push(id.clone()),
            }
        }
        resolution
    }
}

impl<C: DestinationCatalogue + ?Sized> DestinationCatalogue for &C {
    fn destination(&self, id: &DestinationId) -> Option<Destination> {
        (**self).destination(id)
    }
}
