//! Domain types for the venue catalog
//!
//! These types are storage-agnostic - they carry no knowledge of how the
//! catalog is loaded or where interaction state is persisted.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Stable identity of a venue across the catalog and persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VenueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Closed set of Berlin districts covered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum District {
    Mitte,
    Kreuzberg,
    Friedrichshain,
    #[serde(rename = "Neukölln")]
    Neukoelln,
    #[serde(rename = "Prenzlauer Berg")]
    PrenzlauerBerg,
    Charlottenburg,
    #[serde(rename = "Schöneberg")]
    Schoeneberg,
    Tempelhof,
    Wedding,
    Pankow,
    Lichtenberg,
}

impl District {
    pub const ALL: [District; 11] = [
        District::Mitte,
        District::Kreuzberg,
        District::Friedrichshain,
        District::Neukoelln,
        District::PrenzlauerBerg,
        District::Charlottenburg,
        District::Schoeneberg,
        District::Tempelhof,
        District::Wedding,
        District::Pankow,
        District::Lichtenberg,
    ];

    /// Display name as it appears in the catalog and on screen.
    pub fn name(&self) -> &'static str {
        match self {
            District::Mitte => "Mitte",
            District::Kreuzberg => "Kreuzberg",
            District::Friedrichshain => "Friedrichshain",
            District::Neukoelln => "Neukölln",
            District::PrenzlauerBerg => "Prenzlauer Berg",
            District::Charlottenburg => "Charlottenburg",
            District::Schoeneberg => "Schöneberg",
            District::Tempelhof => "Tempelhof",
            District::Wedding => "Wedding",
            District::Pankow => "Pankow",
            District::Lichtenberg => "Lichtenberg",
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for District {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for district in District::ALL {
            if district.name() == s {
                return Ok(district);
            }
        }
        bail!("Unknown district: {s}")
    }
}

/// Ordinal price tier, rendered as repeated `€` glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceLevel {
    Budget,
    Moderate,
    Upscale,
}

impl PriceLevel {
    pub fn tier(&self) -> u8 {
        match self {
            PriceLevel::Budget => 1,
            PriceLevel::Moderate => 2,
            PriceLevel::Upscale => 3,
        }
    }

    /// `€` repeated once per tier, the display convention of the client.
    pub fn glyphs(&self) -> String {
        "€".repeat(self.tier() as usize)
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = anyhow::Error;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(PriceLevel::Budget),
            2 => Ok(PriceLevel::Moderate),
            3 => Ok(PriceLevel::Upscale),
            other => bail!("Price level must be 1..=3, got {other}"),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> u8 {
        level.tier()
    }
}

impl FromStr for PriceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "€" => Ok(PriceLevel::Budget),
            "2" | "€€" => Ok(PriceLevel::Moderate),
            "3" | "€€€" => Ok(PriceLevel::Upscale),
            other => bail!("Unknown price level: {other}"),
        }
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}

/// Dietary option a venue can offer. Serialized with the dataset's
/// lowercase labels (`vegan`, `vegetarian`, `glutenfree`, `halal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietaryTag {
    Vegan,
    Vegetarian,
    GlutenFree,
    Halal,
}

impl DietaryTag {
    pub const ALL: [DietaryTag; 4] = [
        DietaryTag::Vegan,
        DietaryTag::Vegetarian,
        DietaryTag::GlutenFree,
        DietaryTag::Halal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryTag::Vegan => "vegan",
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::GlutenFree => "glutenfree",
            DietaryTag::Halal => "halal",
        }
    }
}

impl FromStr for DietaryTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for tag in DietaryTag::ALL {
            if tag.label() == s {
                return Ok(tag);
            }
        }
        bail!("Unknown dietary tag: {s}")
    }
}

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single restaurant or café entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub district: District,
    pub cuisine: String,
    pub price_level: PriceLevel,
    pub rating: f32,
    pub dietary_options: BTreeSet<DietaryTag>,
    pub latitude: f64,
    pub longitude: f64,
    pub tags: Vec<String>,
    pub description: String,
    pub address: String,
}

impl Venue {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
