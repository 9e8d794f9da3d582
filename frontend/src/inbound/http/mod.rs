//! HTTP inbound adapter serving the server-rendered pages.

pub mod error;
pub mod pages;
pub mod redirect;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod view;

/// Name of the private cookie carrying the client session.
pub const SESSION_COOKIE_NAME: &str = "hbnb_session";
