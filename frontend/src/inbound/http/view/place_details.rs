//! Place details rendering: summary, amenities, reviews and the review call
//! to action.

use crate::domain::{Amenity, Place, RATING_MAX, Rating, Review};

use super::html::{escape, push_escaped, query_value};

pub(crate) const NO_REVIEWS_MESSAGE: &str =
    "No reviews yet. Be the first to review this place!";

const FILLED_STAR: char = '\u{2605}';
const EMPTY_STAR: char = '\u{2606}';

/// Fixed-width star sequence: `rating` filled stars then empty ones.
///
/// # Examples
/// ```
/// use frontend::domain::Rating;
/// use frontend::inbound::http::view::render_stars;
///
/// assert_eq!(render_stars(Rating::new(3).unwrap()), "★★★☆☆");
/// ```
pub fn render_stars(rating: Rating) -> String {
    let filled = usize::from(rating.get().min(RATING_MAX));
    let total = usize::from(RATING_MAX);
    std::iter::repeat_n(FILLED_STAR, filled)
        .chain(std::iter::repeat_n(EMPTY_STAR, total - filled))
        .collect()
}

/// Render the amenity list.
pub fn render_amenities(amenities: &[Amenity]) -> String {
    let mut out = String::from(r#"<div id="amenities-list" class="amenities">"#);
    for amenity in amenities {
        out.push_str(r#"<span class="amenity-tag">"#);
        if let Some(icon) = amenity.icon.as_deref().filter(|icon| !icon.trim().is_empty()) {
            out.push_str(&format!(
                r#"<img src="{}" alt="{}" class="amenity-icon">"#,
                escape(icon),
                escape(&amenity.name)
            ));
        }
        push_escaped(&mut out, &amenity.name);
        out.push_str("</span>");
    }
    out.push_str("</div>");
    out
}

/// Render the review list.
pub fn render_reviews(reviews: &[Review]) -> String {
    let mut out = String::from(r#"<div id="reviews-container">"#);
    if reviews.is_empty() {
        out.push_str(r#"<p class="no-reviews">"#);
        out.push_str(NO_REVIEWS_MESSAGE);
        out.push_str("</p>");
    }
    for review in reviews {
        out.push_str(r#"<article class="review-card"><div class="review-header">"#);
        out.push_str(r#"<span class="review-user">"#);
        push_escaped(&mut out, &review.author_label());
        out.push_str("</span>");
        out.push_str(&format!(
            r#"<span class="review-rating" aria-label="{} out of {RATING_MAX} stars">{}</span>"#,
            review.rating.get(),
            render_stars(review.rating)
        ));
        out.push_str(r#"</div><p class="review-comment">"#);
        push_escaped(&mut out, &review.comment);
        out.push_str("</p></article>");
    }
    out.push_str("</div>");
    out
}

/// Render the details page body.
///
/// Signed-in visitors get a link to the review form; everyone else gets a
/// prompt to log in that returns them here.
pub fn render_place_details(place: &Place, authenticated: bool) -> String {
    let mut out = String::from(r#"<section id="place-details" class="place-details">"#);
    out.push_str("<h1 id=\"place-title\">");
    push_escaped(&mut out, &place.title);
    out.push_str("</h1>");
    if let Some(owner) = &place.owner {
        out.push_str(r#"<p><strong>Host:</strong> <span id="host-name">"#);
        push_escaped(&mut out, &owner.full_name());
        out.push_str("</span></p>");
    }
    let location = place.location();
    if !location.is_empty() {
        out.push_str(r#"<p><strong>Location:</strong> <span id="place-location">"#);
        push_escaped(&mut out, &location);
        out.push_str("</span></p>");
    }
    out.push_str(r#"<p><strong>Price:</strong> <span id="place-price">"#);
    push_escaped(&mut out, &place.price.to_string());
    out.push_str("</span></p>");
    if !place.description.trim().is_empty() {
        out.push_str(r#"<p id="place-description">"#);
        push_escaped(&mut out, &place.description);
        out.push_str("</p>");
    }
    out.push_str("<h2>Amenities</h2>");
    out.push_str(&render_amenities(&place.amenities));
    out.push_str("</section>");

    out.push_str(r#"<section id="reviews-section"><h2>Reviews</h2>"#);
    out.push_str(&render_reviews(&place.reviews));
    out.push_str("</section>");

    out.push_str(&render_review_call_to_action(place, authenticated));
    out
}

fn render_review_call_to_action(place: &Place, authenticated: bool) -> String {
    let id = query_value(place.id.as_ref());
    if authenticated {
        format!(
            r#"<section id="add-review"><a id="add-review-link" class="details-button" href="{}">Add a review</a></section>"#,
            escape(&format!("/add_review.html?id={id}"))
        )
    } else {
        let back = query_value(&format!("/place.html?id={id}"));
        format!(
            r#"<section id="login-prompt"><p><a href="{}">Log in</a> to add a review.</p></section>"#,
            escape(&format!("/login.html?redirect={back}"))
        )
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for details rendering.

    use super::*;
    use crate::domain::{Owner, PlaceId, Price, Reviewer};
    use rstest::{fixture, rstest};

    #[fixture]
    fn place() -> Place {
        Place {
            id: PlaceId::new("7").expect("valid id"),
            title: "Beachfront Villa".to_owned(),
            description: "Sea views.".to_owned(),
            price: Price::per_night(200),
            city: "Miami".to_owned(),
            country: "USA".to_owned(),
            owner: Some(Owner {
                first_name: "Sam".to_owned(),
                last_name: "Lee".to_owned(),
            }),
            amenities: vec![
                Amenity {
                    name: "Wi-Fi".to_owned(),
                    icon: Some("images/icon_wifi.png".to_owned()),
                },
                Amenity {
                    name: "Pool".to_owned(),
                    icon: None,
                },
            ],
            reviews: Vec::new(),
        }
    }

    fn review(reviewer: Reviewer, rating: u8, comment: &str) -> Review {
        Review {
            id: None,
            reviewer,
            rating: Rating::new(rating).expect("valid rating"),
            comment: comment.to_owned(),
        }
    }

    #[rstest]
    fn stars_always_have_five_glyphs_with_rating_filled(
        #[values(1, 2, 3, 4, 5)] rating: u8,
    ) {
        let stars = render_stars(Rating::new(rating).expect("valid rating"));
        assert_eq!(stars.chars().count(), 5);
        assert_eq!(
            stars.chars().filter(|c| *c == FILLED_STAR).count(),
            usize::from(rating)
        );
        assert!(stars.chars().skip(usize::from(rating)).all(|c| c == EMPTY_STAR));
    }

    #[rstest]
    fn empty_review_list_invites_the_first_review() {
        assert!(render_reviews(&[]).contains(NO_REVIEWS_MESSAGE));
    }

    #[rstest]
    fn anonymous_reviewers_get_rating_labels() {
        let html = render_reviews(&[
            review(Reviewer::UserId("u-9".to_owned()), 4, "Lovely stay overall"),
            review(Reviewer::Unknown, 1, "Too noisy at night"),
            review(Reviewer::Named("Alice Johnson".to_owned()), 5, "Perfect"),
        ]);
        assert!(html.contains("Satisfied customer"));
        assert!(html.contains("Unsatisfied customer"));
        assert!(html.contains("Alice Johnson"));
        assert!(!html.contains("u-9"));
    }

    #[rstest]
    fn amenity_icons_render_only_when_present(place: Place) {
        let html = render_amenities(&place.amenities);
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"alt="Wi-Fi""#));
        assert!(html.contains("Pool"));
    }

    #[rstest]
    fn signed_in_visitors_see_the_add_review_link(place: Place) {
        let html = render_place_details(&place, true);
        assert!(html.contains(r#"href="/add_review.html?id=7""#));
        assert!(!html.contains("login-prompt"));
    }

    #[rstest]
    fn anonymous_visitors_see_a_login_prompt(place: Place) {
        let html = render_place_details(&place, false);
        assert!(!html.contains("add-review-link"));
        assert!(html.contains(r#"href="/login.html?redirect=%2Fplace.html%3Fid%3D7""#));
    }

    #[rstest]
    fn summary_shows_host_location_and_price(place: Place) {
        let html = render_place_details(&place, false);
        assert!(html.contains(r#"<span id="host-name">Sam Lee</span>"#));
        assert!(html.contains("Miami, USA"));
        assert!(html.contains("$200 per night"));
    }
}
