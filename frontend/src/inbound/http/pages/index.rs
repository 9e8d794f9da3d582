//! Place list page.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::PlaceSourceError;
use crate::domain::{DataOrigin, Error, PriceFilter};
use crate::inbound::http::error::{status_for, visible_message};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{Notice, Page, render_place_list};

use super::{html_page, reauthenticate};

pub(crate) const FALLBACK_NOTICE: &str =
    "Showing sample listings while the HBnB service is unavailable.";
const SIGN_IN_NOTICE: &str = "Please log in to browse places.";

/// Query parameters accepted by the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Initial price ceiling (`10`, `50`, `100`, `200` or `all`).
    #[serde(default)]
    price: Option<String>,
}

impl IndexQuery {
    fn filter(&self) -> PriceFilter {
        let raw = self.price.as_deref().unwrap_or_default();
        raw.parse().unwrap_or_else(|error| {
            debug!(%error, "ignoring price filter");
            PriceFilter::All
        })
    }
}

/// `GET /` and `GET /index.html`.
pub async fn index(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<IndexQuery>,
) -> HttpResponse {
    let filter = query.filter();
    let token = session.token();

    let error = match state.catalogue.list_places(token.as_ref()).await {
        Ok(listed) => {
            debug!(origin = %listed.origin, count = listed.value.len(), "places listed");
            let fallback = (listed.origin == DataOrigin::FixtureFallback)
                .then(|| Notice::info(FALLBACK_NOTICE));
            let page = Page::new("Places", session.nav(), render_place_list(&listed.value, filter))
                .with_optional_notice(fallback);
            return html_page(StatusCode::OK, &page);
        }
        Err(PlaceSourceError::AuthExpired) if token.is_some() => {
            return reauthenticate(&session, &req);
        }
        Err(PlaceSourceError::AuthExpired) => Error::unauthorized(SIGN_IN_NOTICE),
        Err(error) => Error::from(error),
    };

    let page = Page::new("Places", session.nav(), render_place_list(&[], filter))
        .with_notice(Notice::error(visible_message(&error)));
    html_page(status_for(error.code()), &page)
}
