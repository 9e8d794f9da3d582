//! Catalogue invariants checked on load.

use std::collections::HashSet;

use crate::error::CatalogueError;
use crate::record::PlaceRecord;

/// Lowest accepted review rating.
pub const RATING_MIN: u8 = 1;

/// Highest accepted review rating.
pub const RATING_MAX: u8 = 5;

/// Validates every place record, returning the first violation found.
pub(crate) fn validate_places(places: &[PlaceRecord]) -> Result<(), CatalogueError> {
    let mut seen = HashSet::with_capacity(places.len());
    for (index, place) in places.iter().enumerate() {
        if place.id.trim().is_empty() {
            return Err(CatalogueError::BlankPlaceId { index });
        }
        if !seen.insert(place.id.as_str()) {
            return Err(CatalogueError::DuplicatePlaceId {
                id: place.id.clone(),
            });
        }
        validate_place(place)?;
    }
    Ok(())
}

fn validate_place(place: &PlaceRecord) -> Result<(), CatalogueError> {
    if place.title.trim().is_empty() {
        return Err(CatalogueError::BlankTitle {
            id: place.id.clone(),
        });
    }
    if place.amenities.iter().any(|a| a.name.trim().is_empty()) {
        return Err(CatalogueError::BlankAmenity {
            id: place.id.clone(),
        });
    }
    if let Some(review) = place
        .reviews
        .iter()
        .find(|r| !(RATING_MIN..=RATING_MAX).contains(&r.rating))
    {
        return Err(CatalogueError::RatingOutOfRange {
            place_id: place.id.clone(),
            review_id: review.id.clone(),
            rating: review.rating,
        });
    }
    Ok(())
}
