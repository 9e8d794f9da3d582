//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use crate::domain::ports::{FixtureAuthGateway, FixturePlaceSource, FixtureReviewGateway};
use crate::domain::{DataOrigin, PlaceCatalogueService};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::SESSION_COOKIE_NAME;

/// Build a session middleware configured for tests.
///
/// A fresh key per invocation and no `Secure` flag, so plain-HTTP test
/// requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// State backed entirely by the built-in fixtures.
///
/// # Panics
///
/// Panics when the embedded catalogue is invalid.
pub fn fixture_http_state() -> HttpState {
    let places = match FixturePlaceSource::builtin() {
        Ok(places) => places,
        Err(error) => panic!("built-in catalogue must load: {error}"),
    };
    HttpState::new(
        PlaceCatalogueService::new(Arc::new(places), DataOrigin::Fixture),
        Arc::new(FixtureAuthGateway),
        Arc::new(FixtureReviewGateway),
    )
}
