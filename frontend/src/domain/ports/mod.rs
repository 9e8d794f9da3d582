//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_gateway;
mod place_source;
mod review_gateway;
mod session_backend;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
pub use auth_gateway::{
    AuthGateway, AuthGatewayError, FIXTURE_ACCESS_TOKEN, FixtureAuthGateway,
    NETWORK_ERROR_MESSAGE,
};
pub use place_source::{FixturePlaceSource, PlaceSource, PlaceSourceError};
#[cfg(test)]
pub use review_gateway::MockReviewGateway;
pub use review_gateway::{FixtureReviewGateway, ReviewGateway, ReviewGatewayError};
pub use session_backend::{InMemorySessionBackend, SessionBackend, SessionBackendError};
