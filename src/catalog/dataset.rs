//! Bundled Berlin venue dataset
//!
//! The client ships with a static catalog; there is no backend to fetch
//! one from. The data lives in `data/venues.json` and is embedded at
//! compile time.

use anyhow::{Context, Result};

use super::{Catalog, Venue};

const VENUES_JSON: &str = include_str!("../../data/venues.json");

/// Parse the embedded dataset into a validated catalog.
pub fn builtin() -> Result<Catalog> {
    let venues: Vec<Venue> =
        serde_json::from_str(VENUES_JSON).context("Failed to parse bundled venue dataset")?;
    Catalog::new(venues)
}
