//! Place details page.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::domain::ports::PlaceSourceError;
use crate::domain::{ApiResult, DataOrigin, Error, Place, PlaceId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{Notice, Page, render_place_details};

use super::index::FALLBACK_NOTICE;
use super::{html_page, reauthenticate};

pub(crate) const REVIEW_SUBMITTED_NOTICE: &str = "Review submitted successfully!";

/// Query parameters naming a place; `id` wins over `place_id`.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    reviewed: Option<String>,
}

impl PlaceQuery {
    pub(crate) fn place_id(&self) -> ApiResult<PlaceId> {
        let raw = [self.id.as_deref(), self.place_id.as_deref()]
            .into_iter()
            .flatten()
            .find(|raw| !raw.trim().is_empty())
            .unwrap_or_default();
        PlaceId::new(raw).map_err(|error| Error::invalid_request(error.to_string()))
    }
}

/// `GET /place.html?id=`.
pub async fn place_details(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PlaceQuery>,
) -> ApiResult<HttpResponse> {
    let id = query.place_id()?;
    let token = session.token();

    let mut place = match state.catalogue.place_details(&id, token.as_ref()).await {
        Ok(place) => place,
        Err(PlaceSourceError::AuthExpired) if token.is_some() => {
            return Ok(reauthenticate(&session, &req));
        }
        Err(error) => return Err(error.into()),
    };

    if query.reviewed.is_some() {
        echo_flashed_review(&session, &id, &mut place.value);
    }

    let body = render_place_details(&place.value, token.is_some());
    let page = Page::new(place.value.title.clone(), session.nav(), body)
        .with_optional_notice(
            (place.origin == DataOrigin::FixtureFallback).then(|| Notice::info(FALLBACK_NOTICE)),
        )
        .with_optional_notice(
            query
                .reviewed
                .is_some()
                .then(|| Notice::success(REVIEW_SUBMITTED_NOTICE)),
        );
    Ok(html_page(StatusCode::OK, &page))
}

/// Append the review just submitted unless the source already lists it.
fn echo_flashed_review(session: &SessionContext, id: &PlaceId, place: &mut Place) {
    let Some(flashed) = session.take_flash_review(id) else {
        return;
    };
    let listed = place
        .reviews
        .iter()
        .any(|review| review.rating == flashed.rating && review.comment == flashed.comment);
    if !listed {
        place.reviews.push(flashed);
    }
}
