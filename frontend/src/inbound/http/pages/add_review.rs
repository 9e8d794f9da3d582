//! Review form, its authentication guard and submission.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::ports::{PlaceSourceError, ReviewGatewayError};
use crate::domain::{AccessToken, ApiResult, Error, PlaceId, ReviewDraft};
use crate::inbound::http::error::{status_for, visible_message};
use crate::inbound::http::redirect::login_url;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{
    Notice, Page, ReviewFormView, query_value, render_auth_required, render_review_form,
};

use super::place::PlaceQuery;
use super::{html_page, origin_of, reauthenticate, see_other};

/// Seconds the guard page waits before sending visitors to log in.
const GUARD_DELAY_SECS: u32 = 2;

/// Submitted review form.
#[derive(Default, Deserialize)]
pub struct ReviewForm {
    #[serde(default)]
    comment: String,
    #[serde(default)]
    rating: String,
}

/// Page shown to anonymous visitors; refreshes to the login page.
fn auth_guard(session: &SessionContext, req: &HttpRequest) -> HttpResponse {
    let login = login_url(&origin_of(req));
    let page = Page::new("Add a review", session.nav(), render_auth_required(&login))
        .with_refresh(GUARD_DELAY_SECS, login);
    html_page(StatusCode::UNAUTHORIZED, &page)
}

async fn place_title(
    state: &HttpState,
    id: &PlaceId,
    token: &AccessToken,
) -> Result<Option<String>, PlaceSourceError> {
    match state.catalogue.place(id, Some(token)).await {
        Ok(place) => Ok(Some(place.value.title)),
        Err(error @ (PlaceSourceError::AuthExpired | PlaceSourceError::NotFound { .. })) => {
            Err(error)
        }
        Err(error) => {
            warn!(%error, place_id = %id, "place title unavailable for review form");
            Ok(None)
        }
    }
}

/// `GET /add_review.html?id=`.
pub async fn add_review_page(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PlaceQuery>,
) -> ApiResult<HttpResponse> {
    let id = query.place_id()?;
    let Some(token) = session.token() else {
        return Ok(auth_guard(&session, &req));
    };

    let title = match place_title(&state, &id, &token).await {
        Ok(title) => title,
        Err(PlaceSourceError::AuthExpired) => return Ok(reauthenticate(&session, &req)),
        Err(error) => return Err(error.into()),
    };

    let body = render_review_form(&ReviewFormView {
        place_id: id.as_ref(),
        place_title: title.as_deref(),
        comment: "",
        rating: None,
    });
    Ok(html_page(
        StatusCode::OK,
        &Page::new("Add a review", session.nav(), body),
    ))
}

/// `POST /add_review.html?id=`.
///
/// Input is validated before any API call; a short comment or missing rating
/// re-renders the form without contacting the API.
pub async fn add_review_submit(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PlaceQuery>,
    form: web::Form<ReviewForm>,
) -> ApiResult<HttpResponse> {
    let id = query.place_id()?;
    let Some(token) = session.token() else {
        return Ok(auth_guard(&session, &req));
    };
    let form = form.into_inner();
    let failure = |error: Error| {
        let body = render_review_form(&ReviewFormView {
            place_id: id.as_ref(),
            place_title: None,
            comment: &form.comment,
            rating: form.rating.trim().parse().ok(),
        });
        let page = Page::new("Add a review", session.nav(), body)
            .with_notice(Notice::error(visible_message(&error)));
        html_page(status_for(error.code()), &page)
    };

    let draft = match ReviewDraft::try_new(&form.comment, &form.rating) {
        Ok(draft) => draft,
        Err(error) => return Ok(failure(Error::invalid_request(error.to_string()))),
    };

    match state.reviews.submit_review(&id, &token, &draft).await {
        Ok(()) => {
            info!(
                place_id = %id,
                user_id = session.user_id().as_deref().unwrap_or("unknown"),
                rating = draft.rating().get(),
                "review submitted"
            );
            if let Err(error) = session.flash_review(&id, &draft) {
                warn!(%error, place_id = %id, "submitted review will not be echoed");
            }
            Ok(see_other(&format!(
                "/place.html?id={}&reviewed=1",
                query_value(id.as_ref())
            )))
        }
        Err(ReviewGatewayError::AuthExpired) => Ok(reauthenticate(&session, &req)),
        Err(error) => {
            warn!(%error, place_id = %id, "review submission failed");
            Ok(failure(error.into()))
        }
    }
}
