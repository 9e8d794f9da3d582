//! Page controllers.
//!
//! Dispatch is by URL path. Each handler reads the session, calls the domain
//! services, and renders a complete page; network and validation failures
//! become inline notices or an error page, never a broken response.

mod add_review;
mod index;
mod login;
mod logout;
mod place;
mod register;

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use crate::inbound::http::redirect::login_url;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::view::Page;

pub use add_review::{add_review_page, add_review_submit};
pub use index::index;
pub use login::{login_page, login_submit};
pub use logout::logout;
pub use place::place_details;
pub use register::{register_page, register_submit};

/// Register every page route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use frontend::inbound::http::pages;
///
/// let _app = App::new().configure(pages::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/index.html", web::get().to(index))
        .route("/place.html", web::get().to(place_details))
        .route("/login.html", web::get().to(login_page))
        .route("/login.html", web::post().to(login_submit))
        .route("/register.html", web::get().to(register_page))
        .route("/register.html", web::post().to(register_submit))
        .route("/add_review.html", web::get().to(add_review_page))
        .route("/add_review.html", web::post().to(add_review_submit))
        .route("/logout", web::get().to(logout));
}

/// Full HTML response for `page`.
pub(crate) fn html_page(status: StatusCode, page: &Page) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(page.render())
}

/// `303 See Other` to a local path.
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_owned()))
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Path and query of the current request, used as a post-login target.
pub(crate) fn origin_of(req: &HttpRequest) -> String {
    match req.uri().path_and_query() {
        Some(path_and_query) => path_and_query.as_str().to_owned(),
        None => req.path().to_owned(),
    }
}

/// The API rejected our token: forget it and send the visitor to log in.
///
/// The login page makes no authenticated calls, so this redirect cannot
/// repeat.
pub(crate) fn reauthenticate(session: &SessionContext, req: &HttpRequest) -> HttpResponse {
    let origin = origin_of(req);
    info!(%origin, "API rejected session token; clearing session");
    session.clear();
    see_other(&login_url(&origin))
}
