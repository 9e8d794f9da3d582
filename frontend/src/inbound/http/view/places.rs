//! Place list rendering for the index page.
//!
//! Every fetched place is rendered as a card carrying `data-price`; cards the
//! active filter excludes are marked `hidden`. The inline script re-applies
//! the filter on `change` against the cards already in the page.

use crate::domain::{PRICE_FILTER_OPTIONS, Place, PriceFilter};

use super::html::{place_href, push_escaped};

pub(crate) const EMPTY_LIST_MESSAGE: &str = "No places found matching your criteria.";

const FILTER_SCRIPT: &str = r#"<script>
(function () {
  var select = document.getElementById('price-filter');
  if (!select) { return; }
  select.addEventListener('change', function () {
    var max = select.value;
    var shown = 0;
    document.querySelectorAll('.place-card').forEach(function (card) {
      var hide = max !== 'all' && Number(card.dataset.price) > Number(max);
      card.hidden = hide;
      if (!hide) { shown += 1; }
    });
    document.getElementById('no-places').hidden = shown > 0;
  });
})();
</script>"#;

/// Render the price filter select.
///
/// The select sits in a `GET` form so the filter also works without scripts.
pub fn render_price_filter(selected: PriceFilter) -> String {
    let mut out = String::from(
        "<section id=\"filter\"><form method=\"get\" action=\"/index.html\">\
         <label for=\"price-filter\">Max price:</label>\
         <select id=\"price-filter\" name=\"price\">",
    );
    for ceiling in PRICE_FILTER_OPTIONS {
        let option = PriceFilter::AtMost(ceiling);
        out.push_str(&option_tag(option, &format!("${ceiling}"), selected));
    }
    out.push_str(&option_tag(PriceFilter::All, "All", selected));
    out.push_str(
        "</select><noscript><button type=\"submit\">Filter</button></noscript></form></section>",
    );
    out
}

fn option_tag(option: PriceFilter, label: &str, selected: PriceFilter) -> String {
    let marker = if option == selected { " selected" } else { "" };
    format!(r#"<option value="{option}"{marker}>{label}</option>"#)
}

/// Render one place card.
pub fn render_place_card(place: &Place, visible: bool) -> String {
    let mut out = format!(
        r#"<article class="place-card" data-price="{}"{}>"#,
        place.price.amount(),
        if visible { "" } else { " hidden" }
    );
    out.push_str("<h3>");
    push_escaped(&mut out, &place.title);
    out.push_str("</h3>");
    if !place.description.trim().is_empty() {
        out.push_str(r#"<p class="place-description">"#);
        push_escaped(&mut out, &place.description);
        out.push_str("</p>");
    }
    let location = place.location();
    if !location.is_empty() {
        out.push_str(r#"<p class="place-location">"#);
        push_escaped(&mut out, &location);
        out.push_str("</p>");
    }
    out.push_str(r#"<p class="price">"#);
    push_escaped(&mut out, &place.price.to_string());
    out.push_str("</p>");
    out.push_str(&format!(
        r#"<a href="{}" class="details-button">View Details</a>"#,
        place_href(place.id.as_ref())
    ));
    out.push_str("</article>");
    out
}

/// Render the place list with `filter` applied.
///
/// # Examples
/// ```
/// use frontend::domain::PriceFilter;
/// use frontend::inbound::http::view::render_place_list;
///
/// let html = render_place_list(&[], PriceFilter::All);
/// assert!(html.contains("No places found matching your criteria."));
/// ```
pub fn render_place_list(places: &[Place], filter: PriceFilter) -> String {
    let mut out = render_price_filter(filter);
    out.push_str("<section id=\"places-list\">");
    let shown = filter.apply(places).len();
    for place in places {
        out.push_str(&render_place_card(place, filter.admits(place.price.amount())));
    }
    out.push_str(&format!(
        r#"<div id="no-places" class="loading"{}>{EMPTY_LIST_MESSAGE}</div>"#,
        if shown == 0 { "" } else { " hidden" }
    ));
    out.push_str("</section>\n");
    out.push_str(FILTER_SCRIPT);
    out
}

#[cfg(test)]
mod tests {
    //! Regression coverage for list rendering.

    use super::*;
    use crate::domain::{PlaceId, Price};
    use rstest::{fixture, rstest};

    fn place(id: &str, price: u32) -> Place {
        Place {
            id: PlaceId::new(id).expect("valid id"),
            title: format!("Place {id}"),
            description: String::new(),
            price: Price::per_night(price),
            city: "Paris".to_owned(),
            country: "France".to_owned(),
            owner: None,
            amenities: Vec::new(),
            reviews: Vec::new(),
        }
    }

    #[fixture]
    fn places() -> Vec<Place> {
        [75, 85, 95, 110, 120, 200]
            .into_iter()
            .enumerate()
            .map(|(idx, price)| place(&(idx + 1).to_string(), price))
            .collect()
    }

    fn visible_prices(html: &str) -> Vec<u32> {
        html.split("<article ")
            .skip(1)
            .filter(|card| !card.split('>').next().unwrap_or_default().contains("hidden"))
            .filter_map(|card| {
                card.split("data-price=\"")
                    .nth(1)
                    .and_then(|rest| rest.split('"').next())
                    .and_then(|raw| raw.parse().ok())
            })
            .collect()
    }

    #[rstest]
    fn ceiling_hides_pricier_cards_but_keeps_them_in_the_page(places: Vec<Place>) {
        let html = render_place_list(&places, PriceFilter::AtMost(100));
        assert_eq!(visible_prices(&html), vec![75, 85, 95]);
        assert_eq!(html.matches("class=\"place-card\"").count(), 6);
    }

    #[rstest]
    fn all_restores_every_card(places: Vec<Place>) {
        let html = render_place_list(&places, PriceFilter::All);
        assert_eq!(visible_prices(&html), vec![75, 85, 95, 110, 120, 200]);
        assert!(html.contains(r#"<div id="no-places" class="loading" hidden>"#));
    }

    #[rstest]
    fn empty_selection_shows_the_empty_message(places: Vec<Place>) {
        let html = render_place_list(&places, PriceFilter::AtMost(10));
        assert!(visible_prices(&html).is_empty());
        assert!(html.contains(&format!(r#"<div id="no-places" class="loading">{EMPTY_LIST_MESSAGE}"#)));
    }

    #[rstest]
    #[case(PriceFilter::AtMost(50), r#"<option value="50" selected>$50</option>"#)]
    #[case(PriceFilter::All, r#"<option value="all" selected>All</option>"#)]
    fn select_marks_the_active_option(#[case] filter: PriceFilter, #[case] expected: &str) {
        assert!(render_price_filter(filter).contains(expected));
    }

    #[rstest]
    fn card_text_is_escaped() {
        let mut hostile = place("x", 10);
        hostile.title = "<script>steal()</script>".to_owned();
        let html = render_place_card(&hostile, true);
        assert!(html.contains("&lt;script&gt;steal()&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
