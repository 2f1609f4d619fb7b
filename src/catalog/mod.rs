//! Immutable venue catalog with O(1) lookup by id
//!
//! The catalog is loaded once and never mutated. `all()` preserves load
//! order, which is the stable display order for unfiltered lists. Missing
//! ids are not an error: callers treat `None` as "skip", which is how
//! stale persisted favorites degrade gracefully.

pub mod dataset;
pub mod types;

use std::collections::HashMap;

use anyhow::{bail, Result};

pub use types::{Coordinate, DietaryTag, District, PriceLevel, Venue, VenueId};

/// Read-only venue collection backed by an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
    venues: Vec<Venue>,
    index: HashMap<VenueId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered sequence of venues.
    ///
    /// Rejects duplicate ids and out-of-range ratings; a catalog that
    /// loaded is guaranteed well-formed for the rest of the process.
    pub fn new(venues: Vec<Venue>) -> Result<Self> {
        let mut index = HashMap::with_capacity(venues.len());

        for (position, venue) in venues.iter().enumerate() {
            if !(0.0..=5.0).contains(&venue.rating) {
                bail!(
                    "Venue '{}' has rating {} outside 0.0..=5.0",
                    venue.id,
                    venue.rating
                );
            }
            if index.insert(venue.id.clone(), position).is_some() {
                bail!("Duplicate venue id in catalog: {}", venue.id);
            }
        }

        Ok(Self { venues, index })
    }

    /// The 25-venue Berlin dataset bundled with the crate.
    pub fn builtin() -> Result<Self> {
        dataset::builtin()
    }

    pub fn get(&self, id: &VenueId) -> Option<&Venue> {
        self.index.get(id).map(|&position| &self.venues[position])
    }

    /// All venues in load order.
    pub fn all(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}
