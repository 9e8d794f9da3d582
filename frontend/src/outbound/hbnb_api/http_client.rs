//! Reqwest-backed HBnB API adapter.
//!
//! This adapter owns transport details only: URL construction, bearer
//! headers, timeout and status classification, and JSON decoding into domain
//! values. Each port call issues exactly one request; there are no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::ReviewEndpoint;
use super::dto::{
    ErrorBodyDto, LegacyReviewRequestDto, LoginRequestDto, LoginResponseDto,
    PlaceDto, PlaceReviewRequestDto, RegisterRequestDto, ReviewDto,
};
use crate::domain::ports::{
    AuthGateway, AuthGatewayError, PlaceSource, PlaceSourceError, ReviewGateway,
    ReviewGatewayError,
};
use crate::domain::{
    AccessToken, LoginCredentials, LoginGrant, Place, PlaceId, RegistrationProfile, Review,
    ReviewDraft,
};

const DEFAULT_USER_AGENT: &str = "hbnb-frontend/0.1";
const LOAD_FAILED_MESSAGE: &str = "Failed to load places. Please try again.";
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
const REVIEW_FAILED_MESSAGE: &str = "Failed to submit review";

/// Failure of one HTTP exchange before it is mapped onto a port error.
#[derive(Debug)]
enum CallError {
    Transport(String),
    Timeout(String),
    Status { status: u16, message: Option<String> },
    Decode(String),
}

impl From<CallError> for PlaceSourceError {
    fn from(error: CallError) -> Self {
        match error {
            CallError::Transport(message) => Self::transport(message),
            CallError::Timeout(message) => Self::timeout(message),
            CallError::Decode(message) => Self::decode(message),
            CallError::Status { status: 401, .. } => Self::auth_expired(),
            CallError::Status { status, message } => {
                Self::rejected(status, message.unwrap_or_else(|| LOAD_FAILED_MESSAGE.to_owned()))
            }
        }
    }
}

impl From<CallError> for ReviewGatewayError {
    fn from(error: CallError) -> Self {
        match error {
            CallError::Transport(message) => Self::transport(message),
            CallError::Timeout(message) => Self::timeout(message),
            CallError::Status { status: 401, .. } => Self::auth_expired(),
            CallError::Status { status, message } => Self::rejected(
                status,
                message.unwrap_or_else(|| REVIEW_FAILED_MESSAGE.to_owned()),
            ),
            CallError::Decode(message) => Self::rejected(502_u16, message),
        }
    }
}

fn auth_error(error: CallError, fallback: &str) -> AuthGatewayError {
    match error {
        CallError::Transport(message) => AuthGatewayError::transport(message),
        CallError::Timeout(message) => AuthGatewayError::timeout(message),
        CallError::Decode(message) => AuthGatewayError::decode(message),
        CallError::Status { status, message } => {
            AuthGatewayError::rejected(status, message.unwrap_or_else(|| fallback.to_owned()))
        }
    }
}

/// HBnB API client implementing the place, auth and review ports.
///
/// # Examples
/// ```rust,ignore
/// let client = HbnbApiClient::new(base_url, Duration::from_secs(10))?
///     .with_review_endpoint(ReviewEndpoint::Place);
/// let places = client.list_places(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HbnbApiClient {
    client: Client,
    base_url: Url,
    review_endpoint: ReviewEndpoint,
}

impl HbnbApiClient {
    /// Build a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url,
            review_endpoint: ReviewEndpoint::default(),
        })
    }

    /// Choose the review submission route.
    #[must_use]
    pub fn with_review_endpoint(mut self, review_endpoint: ReviewEndpoint) -> Self {
        self.review_endpoint = review_endpoint;
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CallError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CallError::Transport(format!("base URL {} cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorised(request: RequestBuilder, token: Option<&AccessToken>) -> RequestBuilder {
        let request = request.header(reqwest::header::ACCEPT, "application/json");
        match token {
            Some(token) => request.bearer_auth(token.as_str()),
            None => request,
        }
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        token: Option<&AccessToken>,
    ) -> Result<Vec<u8>, CallError> {
        let response = Self::authorised(request, token)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?.to_vec();
        if status.is_success() {
            Ok(body)
        } else {
            Err(map_status_error(status, &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: Option<&AccessToken>,
    ) -> Result<T, CallError> {
        let url = self.endpoint(segments)?;
        let body = self.execute(self.client.get(url), token).await?;
        decode(body.as_ref())
    }
}

#[async_trait]
impl PlaceSource for HbnbApiClient {
    async fn list_places(
        &self,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Place>, PlaceSourceError> {
        let places: Vec<PlaceDto> = self.get_json(&["places"], token).await?;
        places
            .into_iter()
            .map(PlaceDto::into_domain)
            .collect::<Result<_, _>>()
            .map_err(PlaceSourceError::decode)
    }

    async fn get_place(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Place, PlaceSourceError> {
        let place: PlaceDto = match self.get_json(&["places", id.as_ref()], token).await {
            Ok(place) => place,
            Err(CallError::Status { status: 404, .. }) => {
                return Err(PlaceSourceError::not_found(id.as_ref()));
            }
            Err(error) => return Err(error.into()),
        };
        place.into_domain().map_err(PlaceSourceError::decode)
    }

    async fn list_reviews(
        &self,
        id: &PlaceId,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Review>, PlaceSourceError> {
        let reviews: Vec<ReviewDto> = self
            .get_json(&["reviews", "place", id.as_ref()], token)
            .await?;
        Ok(reviews.into_iter().map(ReviewDto::into_domain).collect())
    }
}

#[async_trait]
impl AuthGateway for HbnbApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginGrant, AuthGatewayError> {
        let url = self
            .endpoint(&["auth", "login"])
            .map_err(|e| auth_error(e, LOGIN_FAILED_MESSAGE))?;
        let request = self.client.post(url).json(&LoginRequestDto {
            email: credentials.email(),
            password: credentials.password(),
        });
        let body = self
            .execute(request, None)
            .await
            .map_err(|e| auth_error(e, LOGIN_FAILED_MESSAGE))?;
        let response: LoginResponseDto =
            decode(body.as_ref()).map_err(|e| auth_error(e, LOGIN_FAILED_MESSAGE))?;
        grant_from_response(response, credentials.email())?
            .ok_or_else(|| AuthGatewayError::decode("login response carried no access token"))
    }

    async fn register(
        &self,
        profile: &RegistrationProfile,
    ) -> Result<Option<LoginGrant>, AuthGatewayError> {
        let url = self
            .endpoint(&["auth", "register"])
            .map_err(|e| auth_error(e, REGISTER_FAILED_MESSAGE))?;
        let request = self.client.post(url).json(&RegisterRequestDto {
            first_name: profile.first_name(),
            last_name: profile.last_name(),
            email: profile.email(),
            password: profile.password(),
        });
        let body = self
            .execute(request, None)
            .await
            .map_err(|e| auth_error(e, REGISTER_FAILED_MESSAGE))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        match serde_json::from_slice::<LoginResponseDto>(body.as_ref()) {
            Ok(response) => grant_from_response(response, profile.email()),
            Err(error) => {
                debug!(%error, "registration response is not a login grant");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ReviewGateway for HbnbApiClient {
    async fn submit_review(
        &self,
        place_id: &PlaceId,
        token: &AccessToken,
        draft: &ReviewDraft,
    ) -> Result<(), ReviewGatewayError> {
        let rating = draft.rating().get();
        let request = match self.review_endpoint {
            ReviewEndpoint::Place => {
                let url = self.endpoint(&["places", place_id.as_ref(), "reviews"])?;
                self.client.post(url).json(&PlaceReviewRequestDto {
                    comment: draft.comment(),
                    rating,
                })
            }
            ReviewEndpoint::Review => {
                let url = self.endpoint(&["reviews", "place", place_id.as_ref(), "new"])?;
                self.client.post(url).json(&LegacyReviewRequestDto {
                    text: draft.comment(),
                    rating,
                })
            }
        };
        self.execute(request, Some(token)).await?;
        Ok(())
    }
}

fn grant_from_response(
    response: LoginResponseDto,
    email: &str,
) -> Result<Option<LoginGrant>, AuthGatewayError> {
    let Some(raw) = response.access_token else {
        return Ok(None);
    };
    let token = AccessToken::new(raw).map_err(|e| AuthGatewayError::decode(e.to_string()))?;
    let user = response.user;
    let email = user
        .as_ref()
        .and_then(|user| user.email.clone())
        .unwrap_or_else(|| email.to_owned());
    let mut grant = LoginGrant::new(token).with_email(email);
    if let Some(user_id) = response.user_id.or_else(|| user.and_then(|user| user.id)) {
        grant = grant.with_user_id(user_id);
    }
    Ok(Some(grant))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CallError> {
    serde_json::from_slice(body).map_err(|error| {
        CallError::Decode(format!(
            "invalid HBnB JSON payload: {error}; body: {}",
            body_preview(body)
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> CallError {
    if error.is_timeout() {
        CallError::Timeout(error.to_string())
    } else {
        CallError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CallError {
    let message = serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(ErrorBodyDto::into_message);
    debug!(
        status = status.as_u16(),
        body = %body_preview(body),
        "HBnB API returned non-success status"
    );
    CallError::Status {
        status: status.as_u16(),
        message,
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
