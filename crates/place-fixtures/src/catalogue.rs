//! Catalogue loading and lookup.

use serde::Deserialize;

use crate::error::CatalogueError;
use crate::record::PlaceRecord;
use crate::validation::validate_places;

const SUPPORTED_VERSION: u32 = 1;
const BUILTIN_CATALOGUE: &str = include_str!("../fixtures/catalogue.json");

/// A validated, ordered set of fixture places.
///
/// # Example
///
/// ```
/// use place_fixtures::FixtureCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "places": [{
///         "id": "p1",
///         "title": "Cozy Loft",
///         "price_per_night": 120,
///         "city": "Paris",
///         "country": "France",
///         "owner": {"first_name": "Alice", "last_name": "Martin"}
///     }]
/// }"#;
///
/// let catalogue = FixtureCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.places()[0].price_per_night, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCatalogue {
    places: Vec<PlaceRecord>,
}

#[derive(Deserialize)]
struct RawCatalogue {
    version: u32,
    places: Vec<PlaceRecord>,
}

impl FixtureCatalogue {
    /// Loads the catalogue compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if the embedded document fails validation.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_json(BUILTIN_CATALOGUE)
    }

    /// Parses and validates a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - A place id is blank or repeated, or a title or amenity name is blank
    /// - A review rating lies outside `1..=5`
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::Parse {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogueError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        validate_places(&raw.places)?;
        Ok(Self { places: raw.places })
    }

    /// Returns every place in document order.
    #[must_use]
    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    /// Finds a place by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::PlaceNotFound`] when no place has the id.
    pub fn find_place(&self, id: &str) -> Result<&PlaceRecord, CatalogueError> {
        self.places
            .iter()
            .find(|place| place.id == id)
            .ok_or_else(|| CatalogueError::PlaceNotFound { id: id.to_owned() })
    }
}
