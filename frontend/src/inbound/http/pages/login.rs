//! Login page and form submission.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Error, LoginCredentials};
use crate::inbound::http::error::{status_for, visible_message};
use crate::inbound::http::redirect::{DEFAULT_LANDING, safe_local_redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{LoginFormView, Notice, Page, render_login_form};

use super::{html_page, see_other};

pub(crate) const REGISTERED_NOTICE: &str = "Registration successful! Please log in.";

/// Query parameters accepted by the login page.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    registered: Option<String>,
}

/// Submitted login form. Missing fields arrive empty and fail validation.
#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    redirect: Option<String>,
}

fn login_form_page(
    session: &SessionContext,
    email: &str,
    redirect: Option<&str>,
    notice: Option<Notice>,
) -> Page {
    let body = render_login_form(&LoginFormView { email, redirect });
    Page::new("Login", session.nav(), body).with_optional_notice(notice)
}

/// `GET /login.html`.
pub async fn login_page(session: SessionContext, query: web::Query<LoginQuery>) -> HttpResponse {
    let redirect = query.redirect.as_deref().and_then(safe_local_redirect);
    let notice = query
        .registered
        .is_some()
        .then(|| Notice::success(REGISTERED_NOTICE));
    html_page(
        StatusCode::OK,
        &login_form_page(&session, "", redirect, notice),
    )
}

/// `POST /login.html`.
pub async fn login_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let redirect = form.redirect.as_deref().and_then(safe_local_redirect);
    let failure = |error: Error| {
        let page = login_form_page(
            &session,
            form.email.trim(),
            redirect,
            Some(Notice::error(visible_message(&error))),
        );
        html_page(status_for(error.code()), &page)
    };

    let credentials = match LoginCredentials::try_from_parts(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(error) => return failure(Error::invalid_request(error.to_string())),
    };

    let grant = match state.auth.login(&credentials).await {
        Ok(grant) => grant,
        Err(error) => {
            warn!(%error, "login failed");
            return failure(error.into());
        }
    };

    match session.set_session(&grant, state.session_ttl) {
        Ok(()) => {
            info!(user_id = ?grant.user_id, "login succeeded");
            see_other(redirect.unwrap_or(DEFAULT_LANDING))
        }
        Err(error) => failure(error),
    }
}
