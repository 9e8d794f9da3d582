//! Client-side price filter for the place list.

use std::fmt;
use std::str::FromStr;

use super::place::Place;

/// Ceilings offered by the price select, in display order. `All` follows.
pub const PRICE_FILTER_OPTIONS: [u32; 4] = [10, 50, 100, 200];

/// Which places the list shows.
///
/// # Examples
/// ```
/// use frontend::domain::PriceFilter;
///
/// let filter: PriceFilter = "100".parse().unwrap();
/// assert_eq!(filter, PriceFilter::AtMost(100));
/// assert_eq!("all".parse::<PriceFilter>().unwrap(), PriceFilter::All);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    /// Show everything.
    #[default]
    All,
    /// Show places whose nightly price is at most the ceiling.
    AtMost(u32),
}

/// Raised when a select value is neither `all` nor a whole number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price filter '{0}'")]
pub struct PriceFilterParseError(String);

impl FromStr for PriceFilter {
    type Err = PriceFilterParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .parse::<u32>()
            .map(Self::AtMost)
            .map_err(|_| PriceFilterParseError(trimmed.to_owned()))
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::AtMost(ceiling) => write!(f, "{ceiling}"),
        }
    }
}

impl PriceFilter {
    /// Whether a place with this nightly amount stays visible.
    pub fn admits(self, amount: u32) -> bool {
        match self {
            Self::All => true,
            Self::AtMost(ceiling) => amount <= ceiling,
        }
    }

    /// Visible subset of `places`, in order. The source list is untouched.
    pub fn apply(self, places: &[Place]) -> Vec<&Place> {
        places
            .iter()
            .filter(|place| self.admits(place.price.amount()))
            .collect()
    }
}
