//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};

use frontend::domain::SessionTtl;
use frontend::outbound::hbnb_api::HbnbApiClient;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) session_ttl: SessionTtl,
    pub(crate) api: Option<HbnbApiClient>,
    pub(crate) fixture_fallback: bool,
}

impl ServerConfig {
    /// Construct a server configuration serving the built-in catalogue.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            session_ttl: SessionTtl::default(),
            api: None,
            fixture_fallback: false,
        }
    }

    /// Read from the HBnB API, optionally degrading to the built-in
    /// catalogue when it is unreachable.
    #[must_use]
    pub fn with_api(mut self, client: HbnbApiClient, fixture_fallback: bool) -> Self {
        self.api = Some(client);
        self.fixture_fallback = fixture_fallback;
        self
    }

    /// Lifetime of new sessions and of the session cookie.
    #[must_use]
    pub fn with_session_ttl(mut self, session_ttl: SessionTtl) -> Self {
        self.session_ttl = session_ttl;
        self
    }
}
