//! Curated catalog views for the explore tab
//!
//! Plain sorts and filters over the catalog - no scoring model.

use std::collections::HashMap;

use crate::catalog::{Catalog, District, PriceLevel, Venue};

/// Minimum rating for a venue to count as a hot spot.
const HOT_SPOT_RATING: f32 = 4.5;

/// Spots shown per district in the grouped view.
const DISTRICT_SPOT_LIMIT: usize = 3;

/// The `n` best-rated venues, highest first. Ties keep catalog order.
pub fn top_rated(catalog: &Catalog, n: usize) -> Vec<&Venue> {
    let mut venues: Vec<&Venue> = catalog.all().iter().collect();
    venues.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    venues.truncate(n);
    venues
}

/// Venues rated at least 4.5, highest first, capped at `n`.
pub fn hot_spots(catalog: &Catalog, n: usize) -> Vec<&Venue> {
    let mut venues: Vec<&Venue> = catalog
        .all()
        .iter()
        .filter(|venue| venue.rating >= HOT_SPOT_RATING)
        .collect();
    venues.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    venues.truncate(n);
    venues
}

/// The top-tier (`€€€`) venues in catalog order.
pub fn premium(catalog: &Catalog) -> Vec<&Venue> {
    catalog
        .all()
        .iter()
        .filter(|venue| venue.price_level == PriceLevel::Upscale)
        .collect()
}

/// The budget (`€`) venues in catalog order.
pub fn budget_friendly(catalog: &Catalog) -> Vec<&Venue> {
    catalog
        .all()
        .iter()
        .filter(|venue| venue.price_level == PriceLevel::Budget)
        .collect()
}

/// One district's entry in the grouped view: its first few venues and
/// the full venue count.
#[derive(Debug, Clone)]
pub struct DistrictSpots<'a> {
    pub district: District,
    pub spots: Vec<&'a Venue>,
    pub count: usize,
}

/// Venues grouped by district, busiest district first.
///
/// Each group lists at most three venues (catalog order) alongside the
/// district's total count. Districts with equal counts keep
/// first-appearance order.
pub fn by_district(catalog: &Catalog) -> Vec<DistrictSpots<'_>> {
    let mut order: Vec<District> = Vec::new();
    let mut grouped: HashMap<District, Vec<&Venue>> = HashMap::new();

    for venue in catalog.all() {
        let spots = grouped.entry(venue.district).or_insert_with(|| {
            order.push(venue.district);
            Vec::new()
        });
        spots.push(venue);
    }

    let mut groups: Vec<DistrictSpots<'_>> = order
        .into_iter()
        .map(|district| {
            let mut spots = grouped.remove(&district).unwrap_or_default();
            let count = spots.len();
            spots.truncate(DISTRICT_SPOT_LIMIT);
            DistrictSpots {
                district,
                spots,
                count,
            }
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::District;
    use crate::test_support::venue;

    fn catalog() -> Catalog {
        let mut venues = vec![
            venue("1", "Middling", District::Mitte, 2),
            venue("2", "Great", District::Kreuzberg, 1),
            venue("3", "Best", District::Pankow, 3),
            venue("4", "Fine Dining", District::Charlottenburg, 3),
        ];
        venues[0].rating = 4.0;
        venues[1].rating = 4.6;
        venues[2].rating = 4.9;
        venues[3].rating = 4.2;
        Catalog::new(venues).unwrap()
    }

    #[test]
    fn test_top_rated_sorted_and_capped() {
        let catalog = catalog();
        let top: Vec<&str> = top_rated(&catalog, 2).iter().map(|v| v.name.as_str()).collect();
        assert_eq!(top, vec!["Best", "Great"]);
    }

    #[test]
    fn test_hot_spots_apply_rating_floor() {
        let catalog = catalog();
        let hot: Vec<&str> = hot_spots(&catalog, 10).iter().map(|v| v.name.as_str()).collect();
        assert_eq!(hot, vec!["Best", "Great"]);
    }

    #[test]
    fn test_premium_keeps_catalog_order() {
        let catalog = catalog();
        let tier3: Vec<&str> = premium(&catalog).iter().map(|v| v.name.as_str()).collect();
        assert_eq!(tier3, vec!["Best", "Fine Dining"]);
    }

    #[test]
    fn test_budget_friendly_keeps_catalog_order() {
        let venues = vec![
            venue("1", "Falafel Point", District::Wedding, 1),
            venue("2", "Le Petit Bistro", District::Charlottenburg, 3),
            venue("3", "Taco Loco", District::Friedrichshain, 1),
        ];
        let catalog = Catalog::new(venues).unwrap();

        let tier1: Vec<&str> = budget_friendly(&catalog)
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(tier1, vec!["Falafel Point", "Taco Loco"]);
    }

    #[test]
    fn test_by_district_counts_and_ordering() {
        let venues = vec![
            venue("1", "Solo Mitte", District::Mitte, 2),
            venue("2", "Kreuzberg One", District::Kreuzberg, 1),
            venue("3", "Kreuzberg Two", District::Kreuzberg, 2),
            venue("4", "Kreuzberg Three", District::Kreuzberg, 3),
            venue("5", "Kreuzberg Four", District::Kreuzberg, 2),
            venue("6", "Pankow One", District::Pankow, 2),
            venue("7", "Pankow Two", District::Pankow, 1),
        ];
        let catalog = Catalog::new(venues).unwrap();

        let groups = by_district(&catalog);
        let summary: Vec<(District, usize)> =
            groups.iter().map(|g| (g.district, g.count)).collect();
        assert_eq!(
            summary,
            vec![
                (District::Kreuzberg, 4),
                (District::Pankow, 2),
                (District::Mitte, 1),
            ]
        );

        // Each group lists at most three venues, in catalog order.
        let kreuzberg = &groups[0];
        let names: Vec<&str> = kreuzberg.spots.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Kreuzberg One", "Kreuzberg Two", "Kreuzberg Three"]);
    }

    #[test]
    fn test_by_district_ties_keep_first_appearance_order() {
        let venues = vec![
            venue("1", "Wedding Spot", District::Wedding, 1),
            venue("2", "Tempelhof Spot", District::Tempelhof, 2),
        ];
        let catalog = Catalog::new(venues).unwrap();

        let districts: Vec<District> = by_district(&catalog).iter().map(|g| g.district).collect();
        assert_eq!(districts, vec![District::Wedding, District::Tempelhof]);
    }
}
