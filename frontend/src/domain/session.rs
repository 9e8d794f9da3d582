//! Session store: the bearer token and minimal identity kept between pages.
//!
//! All reads and writes go through a [`SessionBackend`], so page controllers
//! never touch cookies. Expiry is checked against an injected clock and an
//! expired or unreadable session is purged on read. A just-submitted review
//! can be flashed into the session and is consumed by the next read.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ports::{SessionBackend, SessionBackendError};
use super::{AccessToken, Error, LoginGrant, PlaceId, Rating, Review, ReviewDraft, Reviewer};

/// Session key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Session key holding the user's email.
pub const USER_EMAIL_KEY: &str = "userEmail";
/// Session key holding the API user id.
pub const USER_ID_KEY: &str = "userId";
/// Session key holding the RFC 3339 expiry instant.
pub const EXPIRES_AT_KEY: &str = "expiresAt";
/// Session key holding a review shown once after submission.
pub const FLASH_REVIEW_KEY: &str = "flashReview";

#[derive(Debug, Serialize, Deserialize)]
struct FlashedReview {
    place_id: String,
    author: Option<String>,
    rating: u8,
    comment: String,
}

/// Session lifetime in whole days, bounded to `1..=30`.
///
/// # Examples
/// ```
/// use frontend::domain::SessionTtl;
///
/// assert_eq!(SessionTtl::default().days(), 7);
/// assert!(SessionTtl::days_checked(0).is_err());
/// assert!(SessionTtl::days_checked(31).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTtl(u16);

/// Raised when a session lifetime falls outside `1..=30` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("session lifetime must be between {min} and {max} days, got {actual}")]
pub struct SessionTtlError {
    min: u16,
    max: u16,
    actual: u64,
}

impl SessionTtl {
    /// Shortest accepted lifetime.
    pub const MIN_DAYS: u16 = 1;
    /// Longest accepted lifetime.
    pub const MAX_DAYS: u16 = 30;
    const DEFAULT_DAYS: u16 = 7;

    /// Validate a lifetime in days.
    pub fn days_checked(days: u64) -> Result<Self, SessionTtlError> {
        u16::try_from(days)
            .ok()
            .filter(|value| (Self::MIN_DAYS..=Self::MAX_DAYS).contains(value))
            .map(Self)
            .ok_or(SessionTtlError {
                min: Self::MIN_DAYS,
                max: Self::MAX_DAYS,
                actual: days,
            })
    }

    /// Lifetime in days.
    pub const fn days(self) -> u16 {
        self.0
    }

    /// Lifetime as a chrono delta.
    pub fn as_delta(self) -> TimeDelta {
        TimeDelta::days(i64::from(self.0))
    }
}

impl Default for SessionTtl {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

/// Request-scoped view over the client session.
pub struct SessionStore<B> {
    backend: B,
    clock: Arc<dyn Clock>,
}

impl<B> fmt::Debug for SessionStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl<B: SessionBackend> SessionStore<B> {
    /// Wrap a backend and a clock.
    pub fn new(backend: B, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    /// Persist a login grant for `ttl`.
    ///
    /// Token, email, user id and expiry are written together. On failure the
    /// session is purged so no partial state survives.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use frontend::domain::ports::InMemorySessionBackend;
    /// use frontend::domain::{AccessToken, LoginGrant, SessionStore, SessionTtl};
    /// use mockable::DefaultClock;
    ///
    /// let store = SessionStore::new(InMemorySessionBackend::default(), Arc::new(DefaultClock));
    /// let grant = LoginGrant::new(AccessToken::new("tok").unwrap()).with_email("ada@hbnb.io");
    /// store.set_session(&grant, SessionTtl::default()).unwrap();
    /// assert!(store.is_authenticated());
    /// assert_eq!(store.user_email().as_deref(), Some("ada@hbnb.io"));
    /// ```
    pub fn set_session(&self, grant: &LoginGrant, ttl: SessionTtl) -> Result<(), Error> {
        let expires_at = self.clock.utc() + ttl.as_delta();
        self.write_grant(grant, expires_at).map_err(|error| {
            self.backend.purge();
            Error::internal(format!("failed to persist session: {error}"))
        })
    }

    fn write_grant(
        &self,
        grant: &LoginGrant,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionBackendError> {
        self.backend.insert(TOKEN_KEY, grant.token.as_str())?;
        self.write_optional(USER_EMAIL_KEY, grant.email.as_deref())?;
        self.write_optional(USER_ID_KEY, grant.user_id.as_deref())?;
        self.backend.insert(EXPIRES_AT_KEY, &expires_at.to_rfc3339())
    }

    fn write_optional(&self, key: &str, value: Option<&str>) -> Result<(), SessionBackendError> {
        match value {
            Some(value) => self.backend.insert(key, value),
            None => {
                self.backend.remove(key);
                Ok(())
            }
        }
    }

    /// Current bearer token, or `None` when absent, expired or unreadable.
    pub fn token(&self) -> Option<AccessToken> {
        match self.read_token() {
            Ok(token) => token,
            Err(reason) => {
                warn!(%reason, "purging session");
                self.backend.purge();
                None
            }
        }
    }

    fn read_token(&self) -> Result<Option<AccessToken>, String> {
        let Some(raw) = self.backend.get(TOKEN_KEY).map_err(|e| e.to_string())? else {
            return Ok(None);
        };
        let expires_at = self
            .backend
            .get(EXPIRES_AT_KEY)
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "session has no expiry".to_owned())?;
        let expires_at = DateTime::parse_from_rfc3339(&expires_at)
            .map_err(|e| format!("unreadable session expiry: {e}"))?;
        if expires_at <= self.clock.utc() {
            return Err("session expired".to_owned());
        }
        AccessToken::new(raw)
            .map(Some)
            .map_err(|e| format!("invalid session token: {e}"))
    }

    /// Email of the signed-in user, if the session is live.
    pub fn user_email(&self) -> Option<String> {
        self.live_value(USER_EMAIL_KEY)
    }

    /// API user id of the signed-in user, if the session is live.
    pub fn user_id(&self) -> Option<String> {
        self.live_value(USER_ID_KEY)
    }

    fn live_value(&self, key: &str) -> Option<String> {
        self.token()?;
        match self.backend.get(key) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "ignoring unreadable session value");
                None
            }
        }
    }

    /// Whether a live token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the signed-in user.
    pub fn clear(&self) {
        self.backend.purge();
    }

    /// Remember a submitted review until the next [`Self::take_flash_review`].
    ///
    /// The signed-in user's email is recorded as the author.
    pub fn flash_review(&self, place_id: &PlaceId, draft: &ReviewDraft) -> Result<(), Error> {
        let flashed = FlashedReview {
            place_id: place_id.to_string(),
            author: self.user_email(),
            rating: draft.rating().get(),
            comment: draft.comment().to_owned(),
        };
        let encoded = serde_json::to_string(&flashed)
            .map_err(|error| Error::internal(format!("failed to encode review: {error}")))?;
        self.backend
            .insert(FLASH_REVIEW_KEY, &encoded)
            .map_err(|error| Error::internal(format!("failed to flash review: {error}")))
    }

    /// Take the flashed review if it belongs to `place_id`.
    ///
    /// The flash is removed whether or not it matches.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use frontend::domain::ports::InMemorySessionBackend;
    /// use frontend::domain::{PlaceId, ReviewDraft, SessionStore};
    /// use mockable::DefaultClock;
    ///
    /// let store = SessionStore::new(InMemorySessionBackend::default(), Arc::new(DefaultClock));
    /// let id = PlaceId::new("1").unwrap();
    /// let draft = ReviewDraft::try_new("Lovely place to stay", "4").unwrap();
    /// store.flash_review(&id, &draft).unwrap();
    /// assert_eq!(store.take_flash_review(&id).map(|r| r.comment).as_deref(), Some("Lovely place to stay"));
    /// assert!(store.take_flash_review(&id).is_none());
    /// ```
    pub fn take_flash_review(&self, place_id: &PlaceId) -> Option<Review> {
        let raw = match self.backend.get(FLASH_REVIEW_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "ignoring unreadable review flash");
                self.backend.remove(FLASH_REVIEW_KEY);
                return None;
            }
        };
        self.backend.remove(FLASH_REVIEW_KEY);
        let flashed: FlashedReview = match serde_json::from_str(&raw) {
            Ok(flashed) => flashed,
            Err(error) => {
                warn!(%error, "discarding malformed review flash");
                return None;
            }
        };
        if flashed.place_id != place_id.as_ref() {
            debug!(
                flashed = %flashed.place_id,
                requested = %place_id,
                "review flash is for another place"
            );
            return None;
        }
        Some(Review {
            id: None,
            reviewer: flashed.author.map_or(Reviewer::Unknown, Reviewer::Named),
            rating: Rating::clamped(i64::from(flashed.rating)),
            comment: flashed.comment,
        })
    }
}
