//! Built-in place catalogue for the HBnB web front-end.
//!
//! The front-end renders these records whenever the listing API cannot be
//! reached, so a broken backend still produces usable pages. The catalogue is
//! a JSON document embedded at compile time and validated on load. The crate
//! is independent of the front-end domain types; callers map records into
//! their own model.
//!
//! # Example
//!
//! ```
//! use place_fixtures::FixtureCatalogue;
//!
//! let catalogue = FixtureCatalogue::builtin().expect("embedded catalogue is valid");
//! let cabin = catalogue.find_place("2").expect("cabin exists");
//!
//! assert_eq!(cabin.title, "Mountain View Cabin");
//! assert_eq!(catalogue.places().len(), 6);
//! ```

mod catalogue;
mod error;
mod record;
mod validation;

pub use catalogue::FixtureCatalogue;
pub use error::CatalogueError;
pub use record::{AmenityRecord, OwnerRecord, PlaceRecord, ReviewRecord};
pub use validation::{RATING_MAX, RATING_MIN};
