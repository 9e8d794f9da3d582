//! Registration page and form submission.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Error, LoginGrant, RegistrationProfile};
use crate::inbound::http::error::{status_for, visible_message};
use crate::inbound::http::redirect::DEFAULT_LANDING;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::view::{Notice, Page, RegisterFormView, render_register_form};

use super::{html_page, see_other};

/// Where visitors go when the account exists but no session could be opened.
const LOGIN_AFTER_REGISTRATION: &str = "/login.html?registered=1";

/// Submitted registration form.
#[derive(Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl RegisterForm {
    fn view(&self) -> RegisterFormView<'_> {
        RegisterFormView {
            first_name: self.first_name.trim(),
            last_name: self.last_name.trim(),
            email: self.email.trim(),
        }
    }
}

/// `GET /register.html`.
pub async fn register_page(session: SessionContext) -> HttpResponse {
    let body = render_register_form(&RegisterFormView::default());
    html_page(StatusCode::OK, &Page::new("Register", session.nav(), body))
}

/// `POST /register.html`.
///
/// A token in the registration response opens the session directly;
/// otherwise one follow-up login is attempted with the same credentials.
pub async fn register_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegisterForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let failure = |error: Error| {
        let body = render_register_form(&form.view());
        let page = Page::new("Register", session.nav(), body)
            .with_notice(Notice::error(visible_message(&error)));
        html_page(status_for(error.code()), &page)
    };

    let profile = match RegistrationProfile::try_new(
        &form.first_name,
        &form.last_name,
        &form.email,
        &form.password,
    ) {
        Ok(profile) => profile,
        Err(error) => return failure(Error::invalid_request(error.to_string())),
    };

    let grant = match state.auth.register(&profile).await {
        Ok(Some(grant)) => grant,
        Ok(None) => match state.auth.login(&profile.credentials()).await {
            Ok(grant) => grant,
            Err(error) => {
                warn!(%error, "account created but follow-up login failed");
                return see_other(LOGIN_AFTER_REGISTRATION);
            }
        },
        Err(error) => {
            warn!(%error, "registration failed");
            return failure(error.into());
        }
    };

    open_session(&state, &session, &grant)
}

fn open_session(state: &HttpState, session: &SessionContext, grant: &LoginGrant) -> HttpResponse {
    match session.set_session(grant, state.session_ttl) {
        Ok(()) => {
            info!(user_id = ?grant.user_id, "registration succeeded");
            see_other(DEFAULT_LANDING)
        }
        Err(error) => {
            warn!(%error, "could not persist session after registration");
            see_other(LOGIN_AFTER_REGISTRATION)
        }
    }
}
