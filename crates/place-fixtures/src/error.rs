//! Error types for the place-fixtures crate.

use thiserror::Error;

/// Errors raised while loading or querying a fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// A place record has a blank identifier.
    #[error("place at index {index} has a blank id")]
    BlankPlaceId {
        /// Position of the place in the document.
        index: usize,
    },

    /// Two place records share an identifier.
    #[error("duplicate place id '{id}'")]
    DuplicatePlaceId {
        /// The repeated identifier.
        id: String,
    },

    /// A place record has a blank title.
    #[error("place '{id}' has a blank title")]
    BlankTitle {
        /// Identifier of the offending place.
        id: String,
    },

    /// An amenity record has a blank name.
    #[error("place '{id}' lists an amenity with a blank name")]
    BlankAmenity {
        /// Identifier of the offending place.
        id: String,
    },

    /// A review rating lies outside the accepted range.
    #[error("review '{review_id}' on place '{place_id}' has rating {rating}; expected 1..=5")]
    RatingOutOfRange {
        /// Identifier of the reviewed place.
        place_id: String,
        /// Identifier of the offending review.
        review_id: String,
        /// The rejected rating.
        rating: u8,
    },

    /// The requested place is not part of the catalogue.
    #[error("place '{id}' not found in catalogue")]
    PlaceNotFound {
        /// The identifier that was requested.
        id: String,
    },
}
