pub mod catalog;
pub mod daily_pick;
pub mod engine;
pub mod explore;
pub mod filter;
pub mod geo;
pub mod interactions;
pub mod search;
pub mod storage;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use catalog::{Catalog, Coordinate, DietaryTag, District, PriceLevel, Venue, VenueId};
pub use engine::{Engine, VenueFlags};
pub use filter::{DietaryMode, FilterSelection, RawFilterSelection};
pub use geo::{MapProjection, PinSelection, PlanarPosition};
pub use interactions::{InteractionStore, Relation};
pub use storage::{JsonFileStore, MemoryStore, StateStore};
