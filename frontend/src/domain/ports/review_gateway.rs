//! Driven port for submitting reviews.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AccessToken, PlaceId, ReviewDraft};

define_port_error! {
    /// Errors surfaced while submitting a review.
    pub enum ReviewGatewayError {
        /// The API answered `401`; the session token is no longer valid.
        AuthExpired => "authentication expired",
        /// The API refused the review; `message` is safe to show.
        Rejected { status: u16, message: String } => "{message}",
        /// Network transport failed before a response arrived.
        Transport { message: String } => "review transport failed: {message}",
        /// The call exceeded its timeout.
        Timeout { message: String } => "review timeout: {message}",
    }
}

/// Port for posting reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Submit one review for a place on behalf of the token holder.
    async fn submit_review(
        &self,
        place_id: &PlaceId,
        token: &AccessToken,
        draft: &ReviewDraft,
    ) -> Result<(), ReviewGatewayError>;
}

/// Offline gateway that accepts every draft and stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewGateway;

#[async_trait]
impl ReviewGateway for FixtureReviewGateway {
    async fn submit_review(
        &self,
        place_id: &PlaceId,
        _token: &AccessToken,
        draft: &ReviewDraft,
    ) -> Result<(), ReviewGatewayError> {
        tracing::info!(
            place_id = %place_id,
            rating = draft.rating().get(),
            "fixture review accepted without persistence"
        );
        Ok(())
    }
}
