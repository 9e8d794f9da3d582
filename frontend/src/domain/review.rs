//! Review model, submission drafts and reviewer labelling.

use std::fmt;

/// Lowest star rating.
pub const RATING_MIN: u8 = 1;
/// Highest star rating.
pub const RATING_MAX: u8 = 5;
/// Minimum review length in characters after trimming.
pub const MIN_COMMENT_CHARS: usize = 10;

/// Validation failures for a review submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewValidationError {
    /// Rating or comment was left empty.
    MissingFields,
    /// Comment shorter than [`MIN_COMMENT_CHARS`].
    CommentTooShort,
    /// Rating was not a whole number in `1..=5`.
    InvalidRating,
}

impl fmt::Display for ReviewValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill in all required fields"),
            Self::CommentTooShort => write!(f, "Review must be at least 10 characters long"),
            Self::InvalidRating => write!(f, "Please select a valid rating"),
        }
    }
}

impl std::error::Error for ReviewValidationError {}

/// Star rating in `1..=5`.
///
/// # Examples
/// ```
/// use frontend::domain::Rating;
///
/// assert_eq!(Rating::new(4).map(Rating::get), Ok(4));
/// assert!(Rating::new(0).is_err());
/// assert_eq!(Rating::clamped(9).get(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Validate a rating.
    pub fn new(value: u8) -> Result<Self, ReviewValidationError> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewValidationError::InvalidRating)
        }
    }

    /// Clamp an untrusted API value into range.
    pub fn clamped(value: i64) -> Self {
        let bounded = value.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX));
        Self(u8::try_from(bounded).unwrap_or(RATING_MAX))
    }

    /// Numeric value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Who wrote a review, as far as the API tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reviewer {
    /// Display name is known.
    Named(String),
    /// Only the API user id is known.
    UserId(String),
    /// Nothing identifies the author.
    Unknown,
}

/// A review attached to a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// API identifier, absent for some payload versions.
    pub id: Option<String>,
    /// Author identity.
    pub reviewer: Reviewer,
    /// Star rating.
    pub rating: Rating,
    /// Review body.
    pub comment: String,
}

impl Review {
    /// Name shown next to the review.
    pub fn author_label(&self) -> String {
        reviewer_label(&self.reviewer, self.rating)
    }
}

/// Label shown for a reviewer.
///
/// Named reviewers are shown by name. Everyone else gets an anonymised label
/// derived from the rating so raw user ids never reach the page.
///
/// # Examples
/// ```
/// use frontend::domain::{Rating, Reviewer, reviewer_label};
///
/// let rating = Rating::new(2).unwrap();
/// assert_eq!(reviewer_label(&Reviewer::UserId("u-1".into()), rating), "Unsatisfied customer");
/// assert_eq!(reviewer_label(&Reviewer::Named("Ada".into()), rating), "Ada");
/// ```
pub fn reviewer_label(reviewer: &Reviewer, rating: Rating) -> String {
    match reviewer {
        Reviewer::Named(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ if rating.get() >= 3 => "Satisfied customer".to_owned(),
        _ => "Unsatisfied customer".to_owned(),
    }
}

/// A validated review ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    rating: Rating,
    comment: String,
}

impl ReviewDraft {
    /// Validate raw form input.
    ///
    /// Checks run in order: both fields present, comment length, rating range.
    pub fn try_new(comment: &str, rating: &str) -> Result<Self, ReviewValidationError> {
        let comment = comment.trim();
        let rating = rating.trim();
        if comment.is_empty() || rating.is_empty() {
            return Err(ReviewValidationError::MissingFields);
        }
        if comment.chars().count() < MIN_COMMENT_CHARS {
            return Err(ReviewValidationError::CommentTooShort);
        }
        let value = rating
            .parse::<u8>()
            .map_err(|_| ReviewValidationError::InvalidRating)?;
        Ok(Self {
            rating: Rating::new(value)?,
            comment: comment.to_owned(),
        })
    }

    /// Star rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Trimmed comment text.
    pub fn comment(&self) -> &str {
        self.comment.as_str()
    }
}
