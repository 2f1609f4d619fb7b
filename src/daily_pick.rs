//! Date-scoped "pick of the day" selection
//!
//! The pick is chosen at random once per calendar day and then cached:
//! `{venueId, dayKey}` is persisted, and every request within the same
//! day returns the same venue. Only a day rollover - or a cached id that
//! no longer resolves in the catalog - triggers a fresh selection. The
//! day key is derived from the calendar date alone, never time-of-day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, DietaryTag, Venue, VenueId};
use crate::storage::StateStore;

/// Storage key for the persisted daily pick record.
pub const DAILY_PICK_KEY: &str = "dailyPick";

/// Date-only identifier scoping the cache to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The persisted cache entry for the daily recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPick {
    pub venue_id: VenueId,
    pub day_key: DayKey,
}

/// Resolve today's pick.
///
/// Returns the cached entry when its day key matches `today` and its id
/// still resolves in the catalog; otherwise selects uniformly at random
/// from the venues offering any of `preferences` (the whole catalog when
/// preferences are empty or nothing matches them). `None` only when the
/// catalog is empty.
pub fn select(
    catalog: &Catalog,
    today: NaiveDate,
    cached: Option<&DailyPick>,
    preferences: &BTreeSet<DietaryTag>,
    rng: &mut fastrand::Rng,
) -> Option<DailyPick> {
    let day_key = DayKey::from_date(today);

    if let Some(entry) = cached {
        // A dangling venue id is treated as a cache miss.
        if entry.day_key == day_key && catalog.get(&entry.venue_id).is_some() {
            return Some(entry.clone());
        }
    }

    let pool = candidate_pool(catalog, preferences);
    if pool.is_empty() {
        return None;
    }
    let venue = pool[rng.usize(..pool.len())];

    Some(DailyPick {
        venue_id: venue.id.clone(),
        day_key,
    })
}

fn candidate_pool<'a>(catalog: &'a Catalog, preferences: &BTreeSet<DietaryTag>) -> Vec<&'a Venue> {
    if !preferences.is_empty() {
        let matching: Vec<&Venue> = catalog
            .all()
            .iter()
            .filter(|venue| {
                preferences
                    .iter()
                    .any(|tag| venue.dietary_options.contains(tag))
            })
            .collect();
        if !matching.is_empty() {
            return matching;
        }
    }
    catalog.all().iter().collect()
}

/// Read the persisted pick record. Missing or malformed data is no entry.
pub fn load(store: &dyn StateStore) -> Option<DailyPick> {
    store
        .read(DAILY_PICK_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Persist the pick record.
pub fn save(store: &mut dyn StateStore, entry: &DailyPick) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(entry)?;
    store.write(DAILY_PICK_KEY, &raw)
}
