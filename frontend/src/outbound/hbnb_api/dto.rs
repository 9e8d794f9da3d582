//! DTOs for decoding HBnB API payloads.
//!
//! Successive API versions spell the same fields differently, so the DTOs
//! accept every known spelling and the mapping picks the first present one.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::domain::{
    Amenity, Owner, Place, PlaceId, Price, RATING_MIN, Rating, Review, Reviewer,
};

const UNTITLED_PLACE: &str = "Untitled place";

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => Some(raw),
        Some(Value::Number(raw)) => Some(raw.to_string()),
        _ => None,
    })
}

fn number_to_i64(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.is_finite())
            .map(|value| value.round() as i64)
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Deserialize)]
pub(super) struct PersonDto {
    #[serde(default)]
    pub(super) first_name: Option<String>,
    #[serde(default)]
    pub(super) last_name: Option<String>,
}

impl PersonDto {
    fn full_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum AmenityDto {
    Name(String),
    Object {
        name: String,
        #[serde(default)]
        icon: Option<String>,
    },
}

impl AmenityDto {
    fn into_domain(self) -> Option<Amenity> {
        let (name, icon) = match self {
            Self::Name(name) => (name, None),
            Self::Object { name, icon } => (name, icon),
        };
        let name = non_blank(Some(&name))?.to_owned();
        let icon = non_blank(icon.as_deref()).map(str::to_owned);
        Some(Amenity { name, icon })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ReviewDto {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub(super) id: Option<String>,
    #[serde(default, alias = "text")]
    pub(super) comment: Option<String>,
    #[serde(default)]
    pub(super) rating: Option<Number>,
    #[serde(default)]
    pub(super) user: Option<PersonDto>,
    #[serde(default)]
    pub(super) user_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub(super) user_id: Option<String>,
}

impl ReviewDto {
    pub(super) fn into_domain(self) -> Review {
        let reviewer = self
            .user
            .as_ref()
            .and_then(PersonDto::full_name)
            .or_else(|| non_blank(self.user_name.as_deref()).map(str::to_owned))
            .map(Reviewer::Named)
            .or_else(|| {
                non_blank(self.user_id.as_deref()).map(|id| Reviewer::UserId(id.to_owned()))
            })
            .unwrap_or(Reviewer::Unknown);
        let rating = self
            .rating
            .as_ref()
            .and_then(number_to_i64)
            .unwrap_or(i64::from(RATING_MIN));
        Review {
            id: self.id,
            reviewer,
            rating: Rating::clamped(rating),
            comment: self.comment.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaceDto {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub(super) id: Option<String>,
    #[serde(default, alias = "name")]
    pub(super) title: Option<String>,
    #[serde(default)]
    pub(super) description: Option<String>,
    #[serde(default, alias = "price")]
    pub(super) price_per_night: Option<Number>,
    #[serde(default)]
    pub(super) city: Option<String>,
    #[serde(default)]
    pub(super) country: Option<String>,
    #[serde(default)]
    pub(super) owner: Option<PersonDto>,
    #[serde(default)]
    pub(super) owner_first_name: Option<String>,
    #[serde(default)]
    pub(super) owner_last_name: Option<String>,
    #[serde(default)]
    pub(super) amenities: Vec<AmenityDto>,
    #[serde(default)]
    pub(super) reviews: Vec<ReviewDto>,
}

impl PlaceDto {
    pub(super) fn into_domain(self) -> Result<Place, String> {
        let id = PlaceId::new(self.id.unwrap_or_default())
            .map_err(|_| "place payload without an id".to_owned())?;
        let amount = self
            .price_per_night
            .as_ref()
            .and_then(number_to_i64)
            .unwrap_or(0);
        let amount = u32::try_from(amount)
            .map_err(|_| format!("place {id} has an out-of-range price {amount}"))?;
        let owner = match self.owner {
            Some(owner) => Some(owner),
            None if self.owner_first_name.is_some() || self.owner_last_name.is_some() => {
                Some(PersonDto {
                    first_name: self.owner_first_name,
                    last_name: self.owner_last_name,
                })
            }
            None => None,
        }
        .map(|person| Owner {
            first_name: person.first_name.unwrap_or_default(),
            last_name: person.last_name.unwrap_or_default(),
        });

        Ok(Place {
            title: non_blank(self.title.as_deref())
                .unwrap_or(UNTITLED_PLACE)
                .to_owned(),
            id,
            description: self.description.unwrap_or_default(),
            price: Price::per_night(amount),
            city: self.city.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            owner,
            amenities: self
                .amenities
                .into_iter()
                .filter_map(AmenityDto::into_domain)
                .collect(),
            reviews: self.reviews.into_iter().map(ReviewDto::into_domain).collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginUserDto {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub(super) id: Option<String>,
    #[serde(default)]
    pub(super) email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginResponseDto {
    #[serde(default, alias = "token")]
    pub(super) access_token: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub(super) user_id: Option<String>,
    #[serde(default)]
    pub(super) user: Option<LoginUserDto>,
}

/// Error envelope; the API uses either key.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) error: Option<String>,
}

impl ErrorBodyDto {
    pub(super) fn into_message(self) -> Option<String> {
        non_blank(self.message.as_deref())
            .or_else(|| non_blank(self.error.as_deref()))
            .map(str::to_owned)
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequestDto<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct RegisterRequestDto<'a> {
    pub(super) first_name: &'a str,
    pub(super) last_name: &'a str,
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct PlaceReviewRequestDto<'a> {
    pub(super) comment: &'a str,
    pub(super) rating: u8,
}

#[derive(Debug, Serialize)]
pub(super) struct LegacyReviewRequestDto<'a> {
    pub(super) text: &'a str,
    pub(super) rating: u8,
}
