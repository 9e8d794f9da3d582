//! Domain primitives, services and ports.
//!
//! Purpose: model places, reviews, credentials and the client session in
//! strongly typed values that the HTTP adapter renders and the API adapter
//! decodes into. Nothing here knows about HTML or reqwest.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure.
//! - LoginCredentials, RegistrationProfile, AccessToken, LoginGrant: auth input.
//! - Place, Review, ReviewDraft, PriceFilter: listing model.
//! - SessionStore: token lifecycle over a pluggable backend.
//! - PlaceCatalogueService: reads with fixture degradation.

pub mod auth;
pub mod catalogue_service;
pub mod error;
pub mod place;
pub mod ports;
pub mod price_filter;
pub mod review;
pub mod session;

pub use self::auth::{
    AccessToken, AuthValidationError, LoginCredentials, LoginGrant, RegistrationProfile,
    is_valid_email,
};
pub use self::catalogue_service::{DataOrigin, PlaceCatalogueService, Sourced};
pub use self::error::{Error, ErrorCode};
pub use self::place::{Amenity, Owner, Place, PlaceId, PlaceValidationError, Price};
pub use self::price_filter::{PRICE_FILTER_OPTIONS, PriceFilter, PriceFilterParseError};
pub use self::review::{
    MIN_COMMENT_CHARS, RATING_MAX, RATING_MIN, Rating, Review, ReviewDraft,
    ReviewValidationError, Reviewer, reviewer_label,
};
pub use self::session::{SessionStore, SessionTtl, SessionTtlError};

/// Convenient result alias for page handlers.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use frontend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
