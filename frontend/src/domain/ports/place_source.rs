//! Driven port for reading places and reviews.
//!
//! Two adapters implement it: the HBnB API client and the built-in fixture
//! catalogue. Page controllers never call either directly; they go through
//! [`crate::domain::PlaceCatalogueService`], which decides when to fall back.

use std::sync::Arc;

use async_trait::async_trait;
use place_fixtures::{CatalogueError, FixtureCatalogue, PlaceRecord, ReviewRecord};

use super::define_port_error;
use crate::domain::{
    AccessToken, Amenity, Owner, Place, PlaceId, PlaceValidationError, Price, Rating, Review,
    Reviewer,
};

define_port_error! {
    /// Errors surfaced while reading place data.
    pub enum PlaceSourceError {
        /// The API answered `401`; the session token is no longer valid.
        AuthExpired => "authentication expired",
        /// The requested place does not exist.
        NotFound { id: String } => "place {id} not found",
        /// The API answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "API rejected request with status {status}: {message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } => "API transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } => "API timeout: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "API response decode failed: {message}",
    }
}

impl PlaceSourceError {
    /// Return whether the source is unreachable or broken, as opposed to
    /// having given a definite answer.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::ports::PlaceSourceError;
    ///
    /// assert!(PlaceSourceError::transport("connection refused").is_unavailable());
    /// assert!(PlaceSourceError::rejected(503_u16, "maintenance").is_unavailable());
    /// assert!(!PlaceSourceError::rejected(400_u16, "bad id").is_unavailable());
    /// assert!(!PlaceSourceError::auth_expired().is_unavailable());
    /// ```
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } | Self::Decode { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::AuthExpired | Self::NotFound { .. } => false,
        }
    }
}

/// Port for reading the place catalogue.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// List every place.
    async fn list_places(&self, token: Option<&AccessToken>)
    -> Result<Vec<Place>, PlaceSourceError>;

    /// Fetch one place, including amenities and any embedded reviews.
    async fn get_place(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Place, PlaceSourceError>;

    /// List the reviews of one place.
    async fn list_reviews(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Review>, PlaceSourceError>;
}

/// Fixture implementation serving the built-in catalogue.
///
/// Tokens are ignored; every read succeeds unless the id is unknown.
///
/// # Examples
/// ```
/// use frontend::domain::ports::{FixturePlaceSource, PlaceSource};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let source = FixturePlaceSource::builtin().expect("catalogue loads");
/// let places = source.list_places(None).await.expect("fixture read");
/// assert_eq!(places.len(), 6);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct FixturePlaceSource {
    catalogue: Arc<FixtureCatalogue>,
    places: Arc<Vec<Place>>,
}

impl FixturePlaceSource {
    /// Serve the catalogue compiled into `place-fixtures`.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Ok(Self::from_catalogue(&FixtureCatalogue::builtin()?))
    }

    /// Serve an arbitrary validated catalogue.
    pub fn from_catalogue(catalogue: &FixtureCatalogue) -> Self {
        let places = catalogue
            .places()
            .iter()
            .filter_map(|record| match place_from_record(record) {
                Ok(place) => Some(place),
                Err(error) => {
                    tracing::warn!(%error, id = %record.id, "skipping fixture place");
                    None
                }
            })
            .collect();
        Self {
            catalogue: Arc::new(catalogue.clone()),
            places: Arc::new(places),
        }
    }

    fn find(&self, id: &PlaceId) -> Result<Place, PlaceSourceError> {
        let record = self
            .catalogue
            .find_place(id.as_ref())
            .map_err(|_| PlaceSourceError::not_found(id.as_ref()))?;
        place_from_record(record).map_err(|error| PlaceSourceError::decode(error.to_string()))
    }
}

#[async_trait]
impl PlaceSource for FixturePlaceSource {
    async fn list_places(
        &self,
        _token: Option<&AccessToken>,
    ) -> Result<Vec<Place>, PlaceSourceError> {
        Ok(self.places.as_ref().clone())
    }

    async fn get_place(
        &self,
        id: &PlaceId,
        _token: Option<&AccessToken>,
    ) -> Result<Place, PlaceSourceError> {
        self.find(id)
    }

    async fn list_reviews(
        &self,
        id: &PlaceId,
        _token: Option<&AccessToken>,
    ) -> Result<Vec<Review>, PlaceSourceError> {
        Ok(self.find(id)?.reviews)
    }
}

fn place_from_record(record: &PlaceRecord) -> Result<Place, PlaceValidationError> {
    Ok(Place {
        id: PlaceId::new(&record.id)?,
        title: record.title.clone(),
        description: record.description.clone(),
        price: Price::per_night(record.price_per_night),
        city: record.city.clone(),
        country: record.country.clone(),
        owner: Some(Owner {
            first_name: record.owner.first_name.clone(),
            last_name: record.owner.last_name.clone(),
        }),
        amenities: record
            .amenities
            .iter()
            .map(|amenity| Amenity {
                name: amenity.name.clone(),
                icon: amenity.icon.clone(),
            })
            .collect(),
        reviews: record.reviews.iter().map(review_from_record).collect(),
    })
}

fn review_from_record(record: &ReviewRecord) -> Review {
    Review {
        id: Some(record.id.clone()),
        reviewer: Reviewer::Named(record.user.full_name()),
        rating: Rating::clamped(i64::from(record.rating)),
        comment: record.comment.clone(),
    }
}
