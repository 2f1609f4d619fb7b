//! Engine facade tying the catalog to personalization state
//!
//! Owns the catalog, the interaction store, and the daily pick record.
//! Callers go through these operations for every read and mutation of
//! persisted state; nothing outside the engine holds a handle to the
//! backing storage.

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::catalog::{Catalog, DietaryTag, Venue, VenueId};
use crate::daily_pick;
use crate::filter::{DietaryMode, FilterSelection};
use crate::interactions::{InteractionStore, Relation};
use crate::search;
use crate::storage::StateStore;

/// Personal-state annotation for a single venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VenueFlags {
    pub favorite: bool,
    pub visited: bool,
    pub want_to_visit: bool,
}

pub struct Engine<S: StateStore> {
    catalog: Catalog,
    interactions: InteractionStore<S>,
    rng: fastrand::Rng,
}

impl<S: StateStore> Engine<S> {
    pub fn new(catalog: Catalog, backend: S) -> Self {
        Self {
            catalog,
            interactions: InteractionStore::new(backend),
            rng: fastrand::Rng::new(),
        }
    }

    /// Engine over the bundled Berlin catalog.
    pub fn with_builtin_catalog(backend: S) -> Result<Self> {
        Ok(Self::new(Catalog::builtin()?, backend))
    }

    /// Seeded variant for reproducible daily pick selection.
    pub fn with_seeded_rng(catalog: Catalog, backend: S, seed: u64) -> Self {
        Self {
            catalog,
            interactions: InteractionStore::new(backend),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Venues passing both the filter selection and the search query,
    /// in catalog order.
    pub fn filtered(
        &self,
        selection: &FilterSelection,
        mode: DietaryMode,
        query: &str,
    ) -> Vec<&Venue> {
        self.catalog
            .all()
            .iter()
            .filter(|venue| selection.matches(venue, mode) && search::matches(venue, query))
            .collect()
    }

    /// Today's pick using the local calendar date.
    pub fn daily_pick_today(&mut self) -> Result<Option<&Venue>> {
        self.daily_pick(Local::now().date_naive())
    }

    pub fn daily_pick(&mut self, today: NaiveDate) -> Result<Option<&Venue>> {
        self.daily_pick_with_preferences(today, &BTreeSet::new())
    }

    /// Today's pick, preferring venues that offer any of `preferences`.
    ///
    /// The persisted record is only rewritten when the pick actually
    /// changes (day rollover or dangling cached id).
    pub fn daily_pick_with_preferences(
        &mut self,
        today: NaiveDate,
        preferences: &BTreeSet<DietaryTag>,
    ) -> Result<Option<&Venue>> {
        let cached = daily_pick::load(self.interactions.backend());
        let Some(entry) = daily_pick::select(
            &self.catalog,
            today,
            cached.as_ref(),
            preferences,
            &mut self.rng,
        ) else {
            return Ok(None);
        };

        if cached.as_ref() != Some(&entry) {
            daily_pick::save(self.interactions.backend_mut(), &entry)?;
        }
        Ok(self.catalog.get(&entry.venue_id))
    }

    pub fn toggle(&mut self, relation: Relation, id: &VenueId) -> Result<bool> {
        self.interactions.toggle(relation, id)
    }

    pub fn has(&self, relation: Relation, id: &VenueId) -> bool {
        self.interactions.has(relation, id)
    }

    pub fn ids(&self, relation: Relation) -> Vec<VenueId> {
        self.interactions.ids(relation)
    }

    /// The relation's venues in toggle-insertion order, dropping ids
    /// that no longer resolve in the catalog.
    pub fn list_by(&self, relation: Relation) -> Vec<&Venue> {
        self.interactions.list_by(relation, &self.catalog)
    }

    /// All three personal-state flags for one venue.
    pub fn flags(&self, id: &VenueId) -> VenueFlags {
        VenueFlags {
            favorite: self.has(Relation::Favorite, id),
            visited: self.has(Relation::Visited, id),
            want_to_visit: self.has(Relation::WantToVisit, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{District, PriceLevel};
    use crate::storage::MemoryStore;
    use crate::test_support::{venue, venue_with_dietary};

    fn engine() -> Engine<MemoryStore> {
        let catalog = Catalog::new(vec![
            venue("1", "Sakura Sushi Bar", District::Mitte, 2),
            venue_with_dietary(
                "2",
                "Pizza Paradiso",
                District::Kreuzberg,
                1,
                &[DietaryTag::Vegetarian],
            ),
            venue("3", "Le Petit Bistro", District::Charlottenburg, 3),
        ])
        .unwrap();
        Engine::with_seeded_rng(catalog, MemoryStore::new(), 7)
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_filtered_combines_selection_and_query() {
        let engine = engine();
        let mut selection = FilterSelection::default();
        selection.price_levels.insert(PriceLevel::Budget);
        selection.price_levels.insert(PriceLevel::Moderate);

        let names: Vec<&str> = engine
            .filtered(&selection, DietaryMode::Any, "pizza")
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["Pizza Paradiso"]);
    }

    #[test]
    fn test_filtered_preserves_catalog_order() {
        let engine = engine();
        let all = engine.filtered(&FilterSelection::default(), DietaryMode::Any, "");
        let names: Vec<&str> = all.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sakura Sushi Bar", "Pizza Paradiso", "Le Petit Bistro"]
        );
    }

    #[test]
    fn test_daily_pick_stable_within_a_day() {
        let mut engine = engine();
        let today = day("2026-08-30");

        let first = engine.daily_pick(today).unwrap().unwrap().id.clone();
        for _ in 0..10 {
            let again = engine.daily_pick(today).unwrap().unwrap().id.clone();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_daily_pick_rolls_over_with_the_date() {
        let mut engine = engine();
        engine.daily_pick(day("2026-08-29")).unwrap().unwrap();

        let pick = engine.daily_pick(day("2026-08-30")).unwrap().unwrap();
        let id = pick.id.clone();
        let raw = daily_pick::load(engine.interactions.backend()).unwrap();
        assert_eq!(raw.day_key.as_str(), "2026-08-30");
        assert_eq!(raw.venue_id, id);
    }

    #[test]
    fn test_daily_pick_survives_engine_restart() {
        let catalog = || {
            Catalog::new(vec![
                venue("1", "Sakura Sushi Bar", District::Mitte, 2),
                venue("2", "Pizza Paradiso", District::Kreuzberg, 1),
                venue("3", "Le Petit Bistro", District::Charlottenburg, 3),
            ])
            .unwrap()
        };
        let today = day("2026-08-30");

        let mut first = Engine::with_seeded_rng(catalog(), MemoryStore::new(), 11);
        let picked = first.daily_pick(today).unwrap().unwrap().id.clone();

        // Hand the same backend to a fresh engine with a different seed.
        let backend = first.interactions.backend().clone();
        let mut second = Engine::with_seeded_rng(catalog(), backend, 99);
        assert_eq!(second.daily_pick(today).unwrap().unwrap().id, picked);
    }

    #[test]
    fn test_flags_reflect_toggles() {
        let mut engine = engine();
        let id = VenueId::from("2");

        assert_eq!(engine.flags(&id), VenueFlags::default());

        engine.toggle(Relation::Favorite, &id).unwrap();
        engine.toggle(Relation::Visited, &id).unwrap();
        let flags = engine.flags(&id);
        assert!(flags.favorite);
        assert!(flags.visited);
        assert!(!flags.want_to_visit);
    }

    #[test]
    fn test_list_by_joins_against_catalog() {
        let mut engine = engine();
        engine.toggle(Relation::Favorite, &VenueId::from("3")).unwrap();
        engine.toggle(Relation::Favorite, &VenueId::from("removed")).unwrap();

        let listed: Vec<&str> = engine
            .list_by(Relation::Favorite)
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(listed, vec!["Le Petit Bistro"]);
    }
}
