//! Outbound adapters implementing domain ports.

pub mod hbnb_api;
