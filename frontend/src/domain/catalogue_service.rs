//! Single data-source abstraction used by page controllers.
//!
//! The service reads from a primary [`PlaceSource`] and, when configured,
//! degrades to a fallback source if the primary is unreachable. Definite
//! answers (`401`, `404`, other `4xx`) are never masked by the fallback.
//! During an outage a place id the fallback does not know resolves to the
//! fallback's first place rather than an error.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{PlaceSource, PlaceSourceError};
use super::{AccessToken, Place, PlaceId};

/// Which source served a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    /// The HBnB API.
    Remote,
    /// The built-in catalogue, selected by configuration.
    Fixture,
    /// The built-in catalogue, because the primary source was unavailable.
    FixtureFallback,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Remote => "remote",
            Self::Fixture => "fixture",
            Self::FixtureFallback => "fixture_fallback",
        })
    }
}

/// A value plus the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    /// The data read.
    pub value: T,
    /// Where it came from.
    pub origin: DataOrigin,
}

/// Catalogue reads with optional degradation to a fallback source.
#[derive(Clone)]
pub struct PlaceCatalogueService {
    primary: Arc<dyn PlaceSource>,
    origin: DataOrigin,
    fallback: Option<Arc<dyn PlaceSource>>,
}

impl PlaceCatalogueService {
    /// Read from `primary` only; `origin` labels its results.
    pub fn new(primary: Arc<dyn PlaceSource>, origin: DataOrigin) -> Self {
        Self {
            primary,
            origin,
            fallback: None,
        }
    }

    /// Degrade to `fallback` when the primary is unavailable.
    pub fn with_fallback(mut self, fallback: Arc<dyn PlaceSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    fn fallback_for(
        &self,
        error: PlaceSourceError,
        operation: &'static str,
    ) -> Result<&dyn PlaceSource, PlaceSourceError> {
        match &self.fallback {
            Some(fallback) if error.is_unavailable() => {
                warn!(%error, operation, "primary place source unavailable; serving fixtures");
                Ok(fallback.as_ref())
            }
            _ => Err(error),
        }
    }

    /// List every place.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use frontend::domain::ports::FixturePlaceSource;
    /// use frontend::domain::{DataOrigin, PlaceCatalogueService};
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let fixtures = Arc::new(FixturePlaceSource::builtin().unwrap());
    /// let service = PlaceCatalogueService::new(fixtures, DataOrigin::Fixture);
    /// let listed = service.list_places(None).await.unwrap();
    /// assert_eq!(listed.origin, DataOrigin::Fixture);
    /// # });
    /// ```
    pub async fn list_places(
        &self,
        token: Option<&AccessToken>,
    ) -> Result<Sourced<Vec<Place>>, PlaceSourceError> {
        match self.primary.list_places(token).await {
            Ok(value) => Ok(Sourced {
                value,
                origin: self.origin,
            }),
            Err(error) => {
                let fallback = self.fallback_for(error, "list_places")?;
                Ok(Sourced {
                    value: fallback.list_places(token).await?,
                    origin: DataOrigin::FixtureFallback,
                })
            }
        }
    }

    /// Fetch one place with its reviews.
    ///
    /// When the primary returns the place without reviews, the review list is
    /// fetched separately. A failed review fetch leaves the list empty unless
    /// it signals an expired session.
    pub async fn place_details(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Sourced<Place>, PlaceSourceError> {
        let mut sourced = self.place(id, token).await?;
        if sourced.origin == DataOrigin::FixtureFallback || !sourced.value.reviews.is_empty() {
            return Ok(sourced);
        }

        match self.primary.list_reviews(id, token).await {
            Ok(reviews) => sourced.value.reviews = reviews,
            Err(PlaceSourceError::AuthExpired) => return Err(PlaceSourceError::AuthExpired),
            Err(error) => debug!(%error, place_id = %id, "reviews unavailable"),
        }
        Ok(sourced)
    }

    /// Fetch one place as the source returns it, without a review lookup.
    pub async fn place(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Sourced<Place>, PlaceSourceError> {
        match self.primary.get_place(id, token).await {
            Ok(value) => Ok(Sourced {
                value,
                origin: self.origin,
            }),
            Err(error) => {
                let fallback = self.fallback_for(error, "get_place")?;
                Ok(Sourced {
                    value: Self::fallback_place(fallback, id, token).await?,
                    origin: DataOrigin::FixtureFallback,
                })
            }
        }
    }

    /// Fallback lookup during an outage. An id the fallback does not know is
    /// answered with its first place so the visitor still gets a usable page.
    async fn fallback_place(
        fallback: &dyn PlaceSource,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Place, PlaceSourceError> {
        match fallback.get_place(id, token).await {
            Err(PlaceSourceError::NotFound { .. }) => {
                debug!(place_id = %id, "place unknown to fallback; serving its first place");
                fallback
                    .list_places(token)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or_else(|| PlaceSourceError::not_found(id.as_ref()))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::FixturePlaceSource;
    use crate::domain::{Price, Rating, Review, Reviewer};
    use async_trait::async_trait;
    use place_fixtures::FixtureCatalogue;
    use rstest::{fixture, rstest};
    use std::sync::Mutex;

    /// Scripted source that records every call and answers from queues.
    #[derive(Default)]
    struct ScriptedSource {
        list: Mutex<Option<Result<Vec<Place>, PlaceSourceError>>>,
        place: Mutex<Option<Result<Place, PlaceSourceError>>>,
        reviews: Mutex<Option<Result<Vec<Review>, PlaceSourceError>>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedSource {
        fn record(&self, call: &'static str) {
            self.calls.lock().expect("calls lock").push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl PlaceSource for ScriptedSource {
        async fn list_places(
            &self,
            _token: Option<&AccessToken>,
        ) -> Result<Vec<Place>, PlaceSourceError> {
            self.record("list_places");
            self.list.lock().expect("lock").take().expect("scripted list")
        }

        async fn get_place(
            &self,
            _id: &PlaceId,
            _token: Option<&AccessToken>,
        ) -> Result<Place, PlaceSourceError> {
            self.record("get_place");
            self.place.lock().expect("lock").take().expect("scripted place")
        }

        async fn list_reviews(
            &self,
            _id: &PlaceId,
            _token: Option<&AccessToken>,
        ) -> Result<Vec<Review>, PlaceSourceError> {
            self.record("list_reviews");
            self.reviews.lock().expect("lock").take().expect("scripted reviews")
        }
    }

    fn bare_place(id: &str) -> Place {
        Place {
            id: PlaceId::new(id).expect("valid id"),
            title: "Remote Place".to_owned(),
            description: String::new(),
            price: Price::per_night(99),
            city: "Lyon".to_owned(),
            country: "France".to_owned(),
            owner: None,
            amenities: Vec::new(),
            reviews: Vec::new(),
        }
    }

    #[fixture]
    fn fixtures() -> Arc<dyn PlaceSource> {
        Arc::new(FixturePlaceSource::builtin().expect("built-in catalogue"))
    }

    fn service(primary: Arc<ScriptedSource>, fixtures: Arc<dyn PlaceSource>) -> PlaceCatalogueService {
        PlaceCatalogueService::new(primary, DataOrigin::Remote).with_fallback(fixtures)
    }

    #[rstest]
    #[tokio::test]
    async fn network_failure_serves_fixture_catalogue(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.list.lock().expect("lock") =
            Some(Err(PlaceSourceError::transport("connection refused")));

        let listed = service(primary, fixtures)
            .list_places(None)
            .await
            .expect("fallback succeeds");
        assert_eq!(listed.origin, DataOrigin::FixtureFallback);
        assert_eq!(listed.value.len(), 6);
    }

    #[rstest]
    #[case::auth(PlaceSourceError::auth_expired())]
    #[case::client(PlaceSourceError::rejected(400_u16, "bad request"))]
    #[tokio::test]
    async fn definite_answers_are_not_masked(
        fixtures: Arc<dyn PlaceSource>,
        #[case] error: PlaceSourceError,
    ) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.list.lock().expect("lock") = Some(Err(error.clone()));

        let err = service(primary, fixtures)
            .list_places(None)
            .await
            .expect_err("error passes through");
        assert_eq!(err, error);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_remote_place_is_not_replaced(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Err(PlaceSourceError::not_found("1")));

        let id = PlaceId::new("1").expect("valid id");
        let err = service(primary, fixtures)
            .place_details(&id, None)
            .await
            .expect_err("404 passes through");
        assert_eq!(err, PlaceSourceError::not_found("1"));
    }

    #[rstest]
    #[tokio::test]
    async fn reviews_are_fetched_after_the_place(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Ok(bare_place("7")));
        *primary.reviews.lock().expect("lock") = Some(Ok(vec![Review {
            id: None,
            reviewer: Reviewer::UserId("u-9".to_owned()),
            rating: Rating::clamped(4),
            comment: "Quiet and clean flat.".to_owned(),
        }]));

        let id = PlaceId::new("7").expect("valid id");
        let details = service(primary.clone(), fixtures)
            .place_details(&id, None)
            .await
            .expect("details");
        assert_eq!(details.origin, DataOrigin::Remote);
        assert_eq!(details.value.reviews.len(), 1);
        assert_eq!(primary.calls(), vec!["get_place", "list_reviews"]);
    }

    #[rstest]
    #[tokio::test]
    async fn review_outage_leaves_list_empty(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Ok(bare_place("7")));
        *primary.reviews.lock().expect("lock") = Some(Err(PlaceSourceError::timeout("10s")));

        let id = PlaceId::new("7").expect("valid id");
        let details = service(primary, fixtures)
            .place_details(&id, None)
            .await
            .expect("details");
        assert!(details.value.reviews.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn expired_session_during_review_fetch_propagates(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Ok(bare_place("7")));
        *primary.reviews.lock().expect("lock") = Some(Err(PlaceSourceError::auth_expired()));

        let id = PlaceId::new("7").expect("valid id");
        let err = service(primary, fixtures)
            .place_details(&id, None)
            .await
            .expect_err("auth expiry propagates");
        assert_eq!(err, PlaceSourceError::AuthExpired);
    }

    #[rstest]
    #[tokio::test]
    async fn without_fallback_outage_is_reported() {
        let primary = Arc::new(ScriptedSource::default());
        *primary.list.lock().expect("lock") = Some(Err(PlaceSourceError::timeout("10s")));

        let err = PlaceCatalogueService::new(primary, DataOrigin::Remote)
            .list_places(None)
            .await
            .expect_err("no fallback configured");
        assert!(err.is_unavailable());
    }

    #[rstest]
    #[case::known("2", "Mountain View Cabin")]
    #[case::unknown("3fa85f64-5717-4562-b3fc-2c963f66afa6", "Cozy Downtown Apartment")]
    #[tokio::test]
    async fn outage_resolves_places_from_the_fallback(
        fixtures: Arc<dyn PlaceSource>,
        #[case] id: &str,
        #[case] expected_title: &str,
    ) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") =
            Some(Err(PlaceSourceError::transport("connection refused")));

        let id = PlaceId::new(id).expect("valid id");
        let details = service(primary.clone(), fixtures)
            .place_details(&id, None)
            .await
            .expect("fallback answers");
        assert_eq!(details.origin, DataOrigin::FixtureFallback);
        assert_eq!(details.value.title, expected_title);
        assert_eq!(primary.calls(), vec!["get_place"]);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_fallback_still_reports_the_missing_place() {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Err(PlaceSourceError::timeout("10s")));
        let empty = FixtureCatalogue::from_json(r#"{"version": 1, "places": []}"#)
            .expect("empty catalogue");

        let id = PlaceId::new("42").expect("valid id");
        let err = service(primary, Arc::new(FixturePlaceSource::from_catalogue(&empty)))
            .place(&id, None)
            .await
            .expect_err("nothing to serve");
        assert_eq!(err, PlaceSourceError::not_found("42"));
    }

    #[rstest]
    #[tokio::test]
    async fn bare_lookup_skips_the_review_fetch(fixtures: Arc<dyn PlaceSource>) {
        let primary = Arc::new(ScriptedSource::default());
        *primary.place.lock().expect("lock") = Some(Ok(bare_place("7")));

        let id = PlaceId::new("7").expect("valid id");
        let place = service(primary.clone(), fixtures)
            .place(&id, None)
            .await
            .expect("place");
        assert_eq!(place.value.title, bare_place("7").title);
        assert_eq!(primary.calls(), vec!["get_place"]);
    }
}
