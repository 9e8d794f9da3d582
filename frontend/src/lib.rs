//! HBnB front-end library modules.
//!
//! Server-rendered pages for browsing places, signing in and posting reviews
//! against the HBnB REST API, with a built-in catalogue for offline use.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
