//! Shared HTTP adapter state.
//!
//! Page handlers receive this via `actix_web::web::Data` so they depend only
//! on domain services and ports and stay testable without network I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{AuthGateway, ReviewGateway};
use crate::domain::{PlaceCatalogueService, SessionTtl};

/// Dependency bundle for page handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Place reads with optional fixture degradation.
    pub catalogue: PlaceCatalogueService,
    /// Login and registration.
    pub auth: Arc<dyn AuthGateway>,
    /// Review submission.
    pub reviews: Arc<dyn ReviewGateway>,
    /// Time source for session expiry.
    pub clock: Arc<dyn Clock>,
    /// Lifetime of new sessions.
    pub session_ttl: SessionTtl,
}

impl HttpState {
    /// Bundle the ports with the system clock and default session lifetime.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use frontend::domain::ports::{FixtureAuthGateway, FixturePlaceSource, FixtureReviewGateway};
    /// use frontend::domain::{DataOrigin, PlaceCatalogueService};
    /// use frontend::inbound::http::state::HttpState;
    ///
    /// let places = Arc::new(FixturePlaceSource::builtin().unwrap());
    /// let state = HttpState::new(
    ///     PlaceCatalogueService::new(places, DataOrigin::Fixture),
    ///     Arc::new(FixtureAuthGateway),
    ///     Arc::new(FixtureReviewGateway),
    /// );
    /// assert_eq!(state.session_ttl.days(), 7);
    /// ```
    pub fn new(
        catalogue: PlaceCatalogueService,
        auth: Arc<dyn AuthGateway>,
        reviews: Arc<dyn ReviewGateway>,
    ) -> Self {
        Self {
            catalogue,
            auth,
            reviews,
            clock: Arc::new(DefaultClock),
            session_ttl: SessionTtl::default(),
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the session lifetime.
    #[must_use]
    pub fn with_session_ttl(mut self, session_ttl: SessionTtl) -> Self {
        self.session_ttl = session_ttl;
        self
    }
}
