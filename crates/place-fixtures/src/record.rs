//! Catalogue record types.
//!
//! Field names follow the snake_case JSON spelling used by the listing API so
//! the embedded document reads like a captured API response.

use serde::Deserialize;

/// One place in the fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRecord {
    /// Stable place identifier used in page links.
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Nightly price in whole currency units.
    pub price_per_night: u32,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Hosting owner.
    pub owner: OwnerRecord,
    /// Amenities in display order.
    #[serde(default)]
    pub amenities: Vec<AmenityRecord>,
    /// Reviews in display order.
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

/// Owner of a fixture place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwnerRecord {
    /// Owner first name.
    pub first_name: String,
    /// Owner last name.
    pub last_name: String,
}

/// Amenity attached to a fixture place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AmenityRecord {
    /// Amenity label.
    pub name: String,
    /// Optional icon path relative to the site root.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Review attached to a fixture place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    /// Review identifier.
    pub id: String,
    /// Reviewer identity.
    pub user: OwnerRecord,
    /// Star rating, validated to lie in `1..=5`.
    pub rating: u8,
    /// Review body.
    pub comment: String,
}

impl OwnerRecord {
    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
