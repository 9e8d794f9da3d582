//! Logout endpoint.

use actix_web::HttpResponse;
use tracing::info;

use crate::inbound::http::redirect::DEFAULT_LANDING;
use crate::inbound::http::session::SessionContext;

use super::see_other;

/// `GET /logout`: forget the session and return to the place list.
pub async fn logout(session: SessionContext) -> HttpResponse {
    if session.is_authenticated() {
        info!("user logged out");
    }
    session.clear();
    see_other(DEFAULT_LANDING)
}
