//! Builders for the HTTP state from the configured data source.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use frontend::domain::ports::{
    AuthGateway, FixtureAuthGateway, FixturePlaceSource, FixtureReviewGateway, ReviewGateway,
};
use frontend::domain::{DataOrigin, PlaceCatalogueService};
use frontend::inbound::http::state::HttpState;

use super::ServerConfig;

/// Build page handler state.
///
/// With an API client the catalogue, auth and review ports all talk to the
/// API; the fixture catalogue is only consulted for reads when the API is
/// unreachable and fallback is enabled. Without a client every port is served
/// from fixtures.
///
/// # Errors
/// Returns [`std::io::Error`] when the built-in catalogue fails to load.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let state = match &config.api {
        Some(client) => {
            let client = Arc::new(client.clone());
            let mut catalogue = PlaceCatalogueService::new(client.clone(), DataOrigin::Remote);
            if config.fixture_fallback {
                catalogue = catalogue.with_fallback(Arc::new(builtin_places()?));
            }
            info!(fallback = config.fixture_fallback, "serving places from the HBnB API");
            let auth: Arc<dyn AuthGateway> = client.clone();
            let reviews: Arc<dyn ReviewGateway> = client;
            HttpState::new(catalogue, auth, reviews)
        }
        None => {
            info!("serving places from the built-in catalogue");
            HttpState::new(
                PlaceCatalogueService::new(Arc::new(builtin_places()?), DataOrigin::Fixture),
                Arc::new(FixtureAuthGateway),
                Arc::new(FixtureReviewGateway),
            )
        }
    };
    Ok(web::Data::new(state.with_session_ttl(config.session_ttl)))
}

fn builtin_places() -> std::io::Result<FixturePlaceSource> {
    FixturePlaceSource::builtin()
        .map_err(|e| std::io::Error::other(format!("built-in catalogue failed to load: {e}")))
}

#[cfg(test)]
mod tests {
    //! Coverage for data source selection.

    use super::*;
    use actix_web::cookie::{Key, SameSite};
    use frontend::outbound::hbnb_api::HbnbApiClient;
    use rstest::rstest;
    use std::time::Duration;

    fn config() -> ServerConfig {
        let bind_addr = "127.0.0.1:0".parse().expect("socket address");
        ServerConfig::new(Key::generate(), false, SameSite::Lax, bind_addr)
    }

    #[rstest]
    #[actix_web::test]
    async fn fixture_mode_serves_the_builtin_catalogue() {
        let state = build_http_state(&config()).expect("state builds");
        let listing = state.catalogue.list_places(None).await.expect("places");
        assert_eq!(listing.origin, DataOrigin::Fixture);
        assert!(!listing.value.is_empty());
    }

    #[rstest]
    #[actix_web::test]
    async fn unreachable_api_degrades_to_fixtures_when_enabled() {
        let base = url::Url::parse("http://127.0.0.1:9/api/v1").expect("url");
        let client = HbnbApiClient::new(base, Duration::from_millis(500)).expect("client");
        let state = build_http_state(&config().with_api(client, true)).expect("state builds");
        let listing = state.catalogue.list_places(None).await.expect("fallback places");
        assert_eq!(listing.origin, DataOrigin::FixtureFallback);
    }
}
