//! Filter predicate composition over the venue catalog
//!
//! A selection has three independent facets - districts, price levels,
//! dietary tags. An empty facet places no constraint; a venue passes when
//! it satisfies every non-empty facet. The dietary facet supports two
//! matching modes because the client uses both: discovery screens want
//! "has at least one selected tag", strict personal-preference filtering
//! wants "has every selected tag". The call site declares which.

use std::collections::BTreeSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::{DietaryTag, District, PriceLevel, Venue};

/// How the dietary facet matches a venue's dietary options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryMode {
    /// Venue offers at least one of the selected tags.
    Any,
    /// Venue offers every selected tag.
    All,
}

/// A validated filter selection. Empty facets are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub districts: BTreeSet<District>,
    pub price_levels: BTreeSet<PriceLevel>,
    pub dietary: BTreeSet<DietaryTag>,
}

impl FilterSelection {
    /// True when no facet constrains anything.
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty() && self.price_levels.is_empty() && self.dietary.is_empty()
    }

    /// Total number of selected values, shown as the filter badge count.
    pub fn active_count(&self) -> usize {
        self.districts.len() + self.price_levels.len() + self.dietary.len()
    }

    /// Evaluate the selection against a venue.
    pub fn matches(&self, venue: &Venue, mode: DietaryMode) -> bool {
        let district_ok =
            self.districts.is_empty() || self.districts.contains(&venue.district);
        let price_ok =
            self.price_levels.is_empty() || self.price_levels.contains(&venue.price_level);
        let dietary_ok = self.dietary.is_empty()
            || match mode {
                DietaryMode::Any => self
                    .dietary
                    .iter()
                    .any(|tag| venue.dietary_options.contains(tag)),
                DietaryMode::All => self
                    .dietary
                    .iter()
                    .all(|tag| venue.dietary_options.contains(tag)),
            };

        district_ok && price_ok && dietary_ok
    }
}

/// Stringly-typed selection as it arrives from the UI or persisted
/// settings. Must be validated into a `FilterSelection` before use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterSelection {
    #[serde(default)]
    pub districts: Vec<String>,
    #[serde(default)]
    pub price_levels: Vec<u8>,
    #[serde(default)]
    pub dietary: Vec<String>,
}

impl RawFilterSelection {
    /// Validate enum membership of every selected value.
    ///
    /// Unknown districts, price levels, or dietary tags are rejected here
    /// so the predicate itself can assume validated input.
    pub fn parse(&self) -> Result<FilterSelection> {
        let mut selection = FilterSelection::default();

        for raw in &self.districts {
            let district = raw
                .parse::<District>()
                .map_err(|err| err.context("Invalid filter selection"))?;
            selection.districts.insert(district);
        }
        for &raw in &self.price_levels {
            let level = PriceLevel::try_from(raw)
                .map_err(|err| err.context("Invalid filter selection"))?;
            selection.price_levels.insert(level);
        }
        for raw in &self.dietary {
            let tag = raw
                .parse::<DietaryTag>()
                .map_err(|err| err.context("Invalid filter selection"))?;
            selection.dietary.insert(tag);
        }

        Ok(selection)
    }
}
