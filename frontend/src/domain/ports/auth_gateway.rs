//! Driven port for logging in and registering against the HBnB API.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AccessToken, LoginCredentials, LoginGrant, RegistrationProfile};

/// Token handed out by [`FixtureAuthGateway`].
pub const FIXTURE_ACCESS_TOKEN: &str = "fixture-demo-token";

/// Message shown when the API cannot be reached during a write.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

define_port_error! {
    /// Errors surfaced while authenticating.
    pub enum AuthGatewayError {
        /// The API refused the request; `message` is safe to show.
        Rejected { status: u16, message: String } => "{message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } => "auth transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } => "auth timeout: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "auth response decode failed: {message}",
    }
}

impl AuthGatewayError {
    /// Text shown next to the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Transport { .. } | Self::Timeout { .. } => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Decode { .. } => "Unexpected response from the server. Please try again.".to_owned(),
        }
    }
}

/// Port for obtaining bearer tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthGatewayError>;

    /// Create an account. Returns a grant when the API issues a token with
    /// the registration response; otherwise the caller logs in afterwards.
    async fn register(
        &self,
        profile: &RegistrationProfile,
    ) -> Result<Option<LoginGrant>, AuthGatewayError>;
}

/// Offline gateway accepting any well-formed credentials.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAuthGateway;

impl FixtureAuthGateway {
    fn grant_for(email: &str) -> Result<LoginGrant, AuthGatewayError> {
        let token = AccessToken::new(FIXTURE_ACCESS_TOKEN)
            .map_err(|err| AuthGatewayError::decode(err.to_string()))?;
        Ok(LoginGrant::new(token).with_email(email))
    }
}

#[async_trait]
impl AuthGateway for FixtureAuthGateway {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthGatewayError> {
        Self::grant_for(credentials.email())
    }

    async fn register(
        &self,
        profile: &RegistrationProfile,
    ) -> Result<Option<LoginGrant>, AuthGatewayError> {
        Self::grant_for(profile.email()).map(Some)
    }
}
