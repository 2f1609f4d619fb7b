//! Shared fixtures for unit tests.

use crate::catalog::{DietaryTag, District, PriceLevel, Venue, VenueId};

pub fn venue(id: &str, name: &str, district: District, tier: u8) -> Venue {
    Venue {
        id: VenueId::from(id),
        name: name.to_string(),
        district,
        cuisine: "International".to_string(),
        price_level: PriceLevel::try_from(tier).unwrap(),
        rating: 4.5,
        dietary_options: Default::default(),
        latitude: 52.52,
        longitude: 13.405,
        tags: Vec::new(),
        description: String::new(),
        address: String::new(),
    }
}

pub fn venue_with_dietary(
    id: &str,
    name: &str,
    district: District,
    tier: u8,
    dietary: &[DietaryTag],
) -> Venue {
    let mut v = venue(id, name, district, tier);
    v.dietary_options = dietary.iter().copied().collect();
    v
}
