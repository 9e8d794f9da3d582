//! Place listing model.

use std::fmt;

use super::review::Review;

/// Validation failure for place identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceValidationError {
    /// The identifier was missing or blank.
    BlankId,
}

impl fmt::Display for PlaceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankId => write!(f, "Place ID not found in URL"),
        }
    }
}

impl std::error::Error for PlaceValidationError {}

/// Opaque place identifier as issued by the API.
///
/// # Examples
/// ```
/// use frontend::domain::PlaceId;
///
/// let id = PlaceId::new(" 42 ").unwrap();
/// assert_eq!(id.as_ref(), "42");
/// assert!(PlaceId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PlaceValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlaceValidationError::BlankId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PlaceId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Nightly price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    /// Wrap a nightly amount.
    pub const fn per_night(amount: u32) -> Self {
        Self(amount)
    }

    /// Nightly amount.
    pub const fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} per night", self.0)
    }
}

/// Hosting owner of a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Owner {
    /// `"First Last"`, skipping blank parts.
    pub fn full_name(&self) -> String {
        join_non_blank(&[&self.first_name, &self.last_name], " ")
    }
}

/// One amenity shown on the details page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amenity {
    /// Amenity label.
    pub name: String,
    /// Optional icon path relative to the site root.
    pub icon: Option<String>,
}

/// A rentable place with its amenities and reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Identifier used in page links.
    pub id: PlaceId,
    /// Listing title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Nightly price.
    pub price: Price,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
    /// Owner, when the API includes one.
    pub owner: Option<Owner>,
    /// Amenities in display order.
    pub amenities: Vec<Amenity>,
    /// Reviews in display order.
    pub reviews: Vec<Review>,
}

impl Place {
    /// `"City, Country"`, skipping blank parts.
    pub fn location(&self) -> String {
        join_non_blank(&[&self.city, &self.country], ", ")
    }
}

fn join_non_blank(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("New York", "USA", "New York, USA")]
    #[case("", "USA", "USA")]
    #[case("Aspen", " ", "Aspen")]
    fn location_skips_blank_parts(#[case] city: &str, #[case] country: &str, #[case] expected: &str) {
        let place = Place {
            id: PlaceId::new("1").expect("valid id"),
            title: "Cabin".to_owned(),
            description: String::new(),
            price: Price::per_night(85),
            city: city.to_owned(),
            country: country.to_owned(),
            owner: None,
            amenities: Vec::new(),
            reviews: Vec::new(),
        };
        assert_eq!(place.location(), expected);
    }

    #[rstest]
    fn price_displays_per_night() {
        assert_eq!(Price::per_night(120).to_string(), "$120 per night");
    }

    #[rstest]
    fn blank_place_id_uses_page_message() {
        let err = PlaceId::new("  ").expect_err("blank id");
        assert_eq!(err.to_string(), "Place ID not found in URL");
    }
}
