//! Free-text search over venue fields
//!
//! Plain case-insensitive substring containment over name, cuisine,
//! district, and tags. The catalog holds tens of entries, so anything
//! smarter (tokenization, fuzzy matching) would be complexity without
//! payoff.

use crate::catalog::Venue;

/// True when the query matches the venue, or is blank.
pub fn matches(venue: &Venue, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    venue.name.to_lowercase().contains(&query)
        || venue.cuisine.to_lowercase().contains(&query)
        || venue.district.name().to_lowercase().contains(&query)
        || venue
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}
