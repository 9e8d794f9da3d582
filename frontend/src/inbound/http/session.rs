//! Session helpers to keep page handlers free of framework-specific logic.
//!
//! [`ActixSessionBackend`] adapts the cookie session to the domain
//! [`SessionBackend`] port and [`SessionContext`] extracts a ready
//! [`SessionStore`] for each request.

use std::ops::Deref;

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::{SessionBackend, SessionBackendError};
use crate::domain::{Error, SessionStore};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::NavState;

/// Cookie-session implementation of [`SessionBackend`].
#[derive(Clone)]
pub struct ActixSessionBackend(Session);

impl ActixSessionBackend {
    /// Wrap the request's Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }
}

impl SessionBackend for ActixSessionBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SessionBackendError> {
        self.0
            .get::<String>(key)
            .map_err(|error| SessionBackendError::read(key, error.to_string()))
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), SessionBackendError> {
        self.0
            .insert(key, value)
            .map_err(|error| SessionBackendError::write(key, error.to_string()))
    }

    fn remove(&self, key: &str) {
        let _ = self.0.remove(key);
    }

    fn purge(&self) {
        self.0.purge();
    }
}

/// Request-scoped session store.
pub struct SessionContext(SessionStore<ActixSessionBackend>);

impl SessionContext {
    /// Navigation state for the current visitor.
    pub fn nav(&self) -> NavState {
        if self.0.is_authenticated() {
            NavState::SignedIn {
                email: self.0.user_email(),
            }
        } else {
            NavState::Anonymous
        }
    }
}

impl Deref for SessionContext {
    type Target = SessionStore<ActixSessionBackend>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let clock = req
            .app_data::<web::Data<HttpState>>()
            .map(|state| state.clock.clone());
        let fut = Session::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            let clock = clock.ok_or_else(|| Error::internal("HTTP state is not registered"))?;
            Ok(SessionContext(SessionStore::new(
                ActixSessionBackend::new(session),
                clock,
            )))
        })
    }
}
