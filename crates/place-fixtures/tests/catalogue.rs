//! Unit tests for the built-in catalogue contents.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use place_fixtures::{FixtureCatalogue, RATING_MAX, RATING_MIN};
use rstest::{fixture, rstest};

#[fixture]
fn catalogue() -> FixtureCatalogue {
    FixtureCatalogue::builtin().expect("built-in catalogue must validate")
}

#[rstest]
fn prices_cover_every_filter_band(catalogue: FixtureCatalogue) {
    let mut prices: Vec<u32> = catalogue
        .places()
        .iter()
        .map(|place| place.price_per_night)
        .collect();
    prices.sort_unstable();
    assert_eq!(prices, vec![75, 85, 95, 110, 120, 200]);
}

#[rstest]
#[case("1", "Cozy Downtown Apartment")]
#[case("2", "Mountain View Cabin")]
#[case("6", "City Center Studio")]
fn finds_places_by_id(catalogue: FixtureCatalogue, #[case] id: &str, #[case] title: &str) {
    let place = catalogue.find_place(id).expect("place exists");
    assert_eq!(place.title, title);
}

#[rstest]
fn every_review_rating_is_in_range(catalogue: FixtureCatalogue) {
    let ratings = catalogue
        .places()
        .iter()
        .flat_map(|place| place.reviews.iter().map(|review| review.rating));
    for rating in ratings {
        assert!((RATING_MIN..=RATING_MAX).contains(&rating));
    }
}

#[rstest]
fn places_without_reviews_default_to_empty(catalogue: FixtureCatalogue) {
    let loft = catalogue.find_place("4").expect("place exists");
    assert!(loft.reviews.is_empty());
    assert!(loft.amenities.is_empty());
}

#[rstest]
fn owner_full_name_joins_parts(catalogue: FixtureCatalogue) {
    let place = catalogue.find_place("1").expect("place exists");
    assert!(!place.owner.full_name().trim().is_empty());
    assert!(place.owner.full_name().contains(' '));
}
