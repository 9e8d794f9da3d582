//! Key/value storage behind the session store.
//!
//! The store never touches cookies directly; the inbound adapter supplies an
//! implementation over the framework session and tests use the in-memory one.

use std::cell::RefCell;
use std::collections::HashMap;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session storage.
    pub enum SessionBackendError {
        /// A stored value could not be read back.
        Read { key: String, message: String } => "failed to read session key {key}: {message}",
        /// A value could not be stored.
        Write { key: String, message: String } => "failed to write session key {key}: {message}",
    }
}

/// String key/value access scoped to one client session.
///
/// Implementations are request-local and need not be `Send`.
pub trait SessionBackend {
    /// Read one value.
    fn get(&self, key: &str) -> Result<Option<String>, SessionBackendError>;

    /// Store one value, replacing any previous one.
    fn insert(&self, key: &str, value: &str) -> Result<(), SessionBackendError>;

    /// Remove one value if present.
    fn remove(&self, key: &str);

    /// Drop every value in the session.
    fn purge(&self);
}

/// In-memory backend for tests and offline tooling.
///
/// # Examples
/// ```
/// use frontend::domain::ports::{InMemorySessionBackend, SessionBackend};
///
/// let backend = InMemorySessionBackend::default();
/// backend.insert("token", "abc").unwrap();
/// assert_eq!(backend.get("token").unwrap().as_deref(), Some("abc"));
/// backend.purge();
/// assert!(backend.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySessionBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemorySessionBackend {
    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionBackend for InMemorySessionBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SessionBackendError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), SessionBackendError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn purge(&self) {
        self.entries.borrow_mut().clear();
    }
}
