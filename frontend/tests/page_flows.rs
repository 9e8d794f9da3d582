//! End-to-end page flows: pages backed by the real API client talking to an
//! in-process stub API.

#[allow(dead_code)]
#[path = "support/stub_api.rs"]
mod stub_api;

use std::sync::Arc;
use std::time::Duration;

use actix_http::Request;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use frontend::domain::ports::FixturePlaceSource;
use frontend::domain::{DataOrigin, PlaceCatalogueService};
use frontend::inbound::http::SESSION_COOKIE_NAME;
use frontend::inbound::http::pages;
use frontend::inbound::http::state::HttpState;
use frontend::inbound::http::test_utils::test_session_middleware;
use frontend::outbound::hbnb_api::HbnbApiClient;
use rstest::rstest;
use stub_api::{STUB_EMAIL, STUB_PASSWORD, STUB_TOKEN, StubApi};
use url::Url;

fn remote_state(base_url: Url, fallback: bool) -> HttpState {
    let client = Arc::new(
        HbnbApiClient::new(base_url, Duration::from_secs(2)).expect("client builds"),
    );
    let mut catalogue = PlaceCatalogueService::new(client.clone(), DataOrigin::Remote);
    if fallback {
        catalogue = catalogue.with_fallback(Arc::new(
            FixturePlaceSource::builtin().expect("built-in catalogue"),
        ));
    }
    HttpState::new(catalogue, client.clone(), client)
}

async fn pages_for(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .configure(pages::configure),
    )
    .await
}

fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.into_owned())
}

async fn body_text(res: ServiceResponse) -> String {
    String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8 body")
}

fn unused_base_url() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}/api/v1")).expect("url")
}

#[rstest]
#[actix_web::test]
async fn signed_in_review_reaches_the_api_with_the_bearer_token() {
    let stub = StubApi::start();
    let app = pages_for(remote_state(stub.base_url(), false)).await;

    let login = test::TestRequest::post()
        .uri("/login.html")
        .set_form([("email", STUB_EMAIL), ("password", STUB_PASSWORD)])
        .to_request();
    let res = test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&res).expect("session cookie");

    let review = test::TestRequest::post()
        .uri("/add_review.html?id=1")
        .cookie(cookie)
        .set_form([("comment", "Bright and quiet flat"), ("rating", "5")])
        .to_request();
    let res = test::call_service(&app, review).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/place.html?id=1&reviewed=1")
    );

    let posted = stub.requests_to("/api/v1/places/1/reviews");
    assert_eq!(posted.len(), 1);
    assert_eq!(
        posted[0].authorization.as_deref(),
        Some(format!("Bearer {STUB_TOKEN}").as_str())
    );
    assert_eq!(posted[0].body["rating"], 5);
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn short_review_makes_no_api_call() {
    let stub = StubApi::start();
    let app = pages_for(remote_state(stub.base_url(), false)).await;

    let login = test::TestRequest::post()
        .uri("/login.html")
        .set_form([("email", STUB_EMAIL), ("password", STUB_PASSWORD)])
        .to_request();
    let cookie = session_cookie(&test::call_service(&app, login).await).expect("session cookie");

    let review = test::TestRequest::post()
        .uri("/add_review.html?id=1")
        .cookie(cookie)
        .set_form([("comment", "Too short"), ("rating", "5")])
        .to_request();
    let res = test::call_service(&app, review).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(stub.requests_to("/reviews").is_empty());
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn wrong_password_shows_the_api_message() {
    let stub = StubApi::start();
    let app = pages_for(remote_state(stub.base_url(), false)).await;

    let login = test::TestRequest::post()
        .uri("/login.html")
        .set_form([("email", STUB_EMAIL), ("password", "wrong")])
        .to_request();
    let res = test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&res).is_none());
    assert!(body_text(res).await.contains("Invalid credentials"));
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn place_page_merges_separately_listed_reviews() {
    let stub = StubApi::start();
    let app = pages_for(remote_state(stub.base_url(), false)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/place.html?id=1").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Stub place 1"));
    assert!(body.contains("Comfortable and bright."));
    assert!(body.contains("Grace Hopper"));
    assert!(body.contains(r#"id="login-prompt""#));
    stub.stop().await;
}

#[rstest]
#[actix_web::test]
async fn network_failure_renders_the_fixture_catalogue() {
    let app = pages_for(remote_state(unused_base_url(), true)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/index.html").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Showing sample listings while the HBnB service is unavailable."));
    assert_eq!(body.matches(r#"<article class="place-card""#).count(), 6);
}

#[rstest]
#[actix_web::test]
async fn network_failure_without_fallback_reports_it() {
    let app = pages_for(remote_state(unused_base_url(), false)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/index.html").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(body_text(res).await.contains("Failed to load places. Please try again."));
}
