//! Persisted per-user interaction state
//!
//! Three independent sets of venue ids - favorites, visited, want-to-visit -
//! each mutated only through `toggle`, which writes the updated set back to
//! storage before returning. A venue may belong to any combination of the
//! three. Reads always go to the persisted set; there is no cache to drift
//! out of sync. Ids that no longer resolve in the catalog are kept in
//! storage but dropped when joining against the catalog.

use anyhow::Result;

use crate::catalog::{Catalog, Venue, VenueId};
use crate::storage::StateStore;

/// One of the three personal interaction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Favorite,
    Visited,
    WantToVisit,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Favorite, Relation::Visited, Relation::WantToVisit];

    /// Logical record name in the persisted state layout.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Relation::Favorite => "favorites",
            Relation::Visited => "visited",
            Relation::WantToVisit => "wantToVisit",
        }
    }
}

/// Single choke point for all interaction-state reads and mutations.
pub struct InteractionStore<S: StateStore> {
    backend: S,
}

impl<S: StateStore> InteractionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Whether `id` is currently in the relation's persisted set.
    pub fn has(&self, relation: Relation, id: &VenueId) -> bool {
        self.load_ids(relation).contains(id)
    }

    /// Flip membership of `id` in the relation's set.
    ///
    /// Returns the new membership: `true` after adding, `false` after
    /// removing. The updated set is persisted before this returns.
    pub fn toggle(&mut self, relation: Relation, id: &VenueId) -> Result<bool> {
        let mut ids = self.load_ids(relation);

        let added = if let Some(position) = ids.iter().position(|stored| stored == id) {
            ids.remove(position);
            false
        } else {
            ids.push(id.clone());
            true
        };

        let raw = serde_json::to_string_pretty(&ids)?;
        self.backend.write(relation.storage_key(), &raw)?;
        Ok(added)
    }

    /// The persisted ids for a relation, in insertion order.
    pub fn ids(&self, relation: Relation) -> Vec<VenueId> {
        self.load_ids(relation)
    }

    /// Join the relation's ids against the catalog, skipping ids that no
    /// longer resolve.
    pub fn list_by<'a>(&self, relation: Relation, catalog: &'a Catalog) -> Vec<&'a Venue> {
        self.load_ids(relation)
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }

    pub(crate) fn backend(&self) -> &S {
        &self.backend
    }

    pub(crate) fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    // Missing or malformed stored data is the empty set.
    fn load_ids(&self, relation: Relation) -> Vec<VenueId> {
        self.backend
            .read(relation.storage_key())
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}
