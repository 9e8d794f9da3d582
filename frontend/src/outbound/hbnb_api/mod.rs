//! HBnB REST API outbound adapter.
//!
//! One reqwest client implements the place, authentication and review ports.

mod dto;
mod http_client;

use std::fmt;
use std::str::FromStr;

pub use http_client::HbnbApiClient;

/// Review submission route exposed by the API.
///
/// Deployments disagree on the route, so it is a configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewEndpoint {
    /// `POST /places/{id}/reviews` with `{"comment", "rating"}`.
    #[default]
    Place,
    /// `POST /reviews/place/{id}/new` with `{"text", "rating"}`.
    Review,
}

/// Raised for an unknown review endpoint name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review endpoint '{0}'; expected place|review")]
pub struct ReviewEndpointParseError(String);

impl FromStr for ReviewEndpoint {
    type Err = ReviewEndpointParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "place" => Ok(Self::Place),
            "review" => Ok(Self::Review),
            other => Err(ReviewEndpointParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for ReviewEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Place => "place",
            Self::Review => "review",
        })
    }
}
