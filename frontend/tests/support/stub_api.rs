//! In-process stand-in for the HBnB REST API.
//!
//! Binds an ephemeral port, answers a fixed set of routes under `/api/v1`,
//! and records every request so tests can assert on headers and bodies.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use url::Url;

/// Token the stub issues and accepts.
pub const STUB_TOKEN: &str = "stub-token-1";
/// Credentials the stub accepts.
pub const STUB_EMAIL: &str = "ada@hbnb.io";
pub const STUB_PASSWORD: &str = "secret";

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct RequestLog(Mutex<Vec<RecordedRequest>>);

/// Running stub server.
pub struct StubApi {
    base_url: Url,
    handle: ServerHandle,
    log: web::Data<RequestLog>,
}

impl StubApi {
    /// Start the stub on `127.0.0.1:0`.
    pub fn start() -> Self {
        let log = web::Data::new(RequestLog::default());
        let app_log = log.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_log.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind stub API");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        let base_url = Url::parse(&format!("http://{addr}/api/v1")).expect("stub URL");
        Self {
            base_url,
            handle,
            log,
        }
    }

    /// Base URL including the `/api/v1` prefix.
    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.0.lock().expect("request log").clone()
    }

    /// Requests whose path ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path.ends_with(suffix))
            .collect()
    }

    /// Stop the listener.
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

fn place(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Stub place {id}"),
        "description": "Quiet flat near the river.",
        "price_per_night": 80,
        "city": "Lyon",
        "country": "France",
        "owner": { "first_name": "Grace", "last_name": "Hopper" },
        "amenities": [{ "name": "Wi-Fi", "icon": "images/icon_wifi.png" }, "Kitchen"]
    })
}

fn authorised(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {STUB_TOKEN}").as_str())
}

async fn respond(
    req: HttpRequest,
    body: web::Bytes,
    log: web::Data<RequestLog>,
) -> HttpResponse {
    let path = req.path().to_owned();
    let method = req.method().as_str().to_owned();
    let parsed: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    log.0.lock().expect("request log").push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization: req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned),
        body: parsed.clone(),
    });

    let route = path.strip_prefix("/api/v1/").unwrap_or_default();
    let segments: Vec<&str> = route.split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", ["places"]) => HttpResponse::Ok().json(json!([
            place("1"),
            { "id": 2, "name": "Numeric id loft", "price": 149.6 }
        ])),
        ("GET", ["places", "missing"]) => {
            HttpResponse::NotFound().json(json!({ "message": "Place not found" }))
        }
        ("GET", ["places", "broken"]) => HttpResponse::InternalServerError()
            .content_type("text/plain")
            .body("database exploded"),
        ("GET", ["places", "garbled"]) => HttpResponse::Ok()
            .content_type("application/json")
            .body("{not json"),
        ("GET", ["places", "private"]) => {
            HttpResponse::Unauthorized().json(json!({ "error": "Token expired" }))
        }
        ("GET", ["places", "slow"]) => {
            actix_web::rt::time::sleep(Duration::from_secs(2)).await;
            HttpResponse::Ok().json(place("slow"))
        }
        ("GET", ["places", id]) => HttpResponse::Ok().json(place(id)),
        ("GET", ["reviews", "place", _]) => HttpResponse::Ok().json(json!([
            { "id": "r1", "user_name": "Linus", "rating": 4, "text": "Comfortable and bright." },
            { "id": "r2", "user_id": "u-9", "rating": 9, "comment": "Would stay again!" }
        ])),
        ("POST", ["auth", "login"]) => {
            if parsed["email"] == STUB_EMAIL && parsed["password"] == STUB_PASSWORD {
                HttpResponse::Ok().json(json!({
                    "access_token": STUB_TOKEN,
                    "user": { "id": 7, "email": STUB_EMAIL }
                }))
            } else {
                HttpResponse::Unauthorized().json(json!({ "error": "Invalid credentials" }))
            }
        }
        ("POST", ["auth", "register"]) => {
            if parsed["email"] == "taken@hbnb.io" {
                HttpResponse::Conflict().json(json!({ "error": "Email already registered" }))
            } else {
                HttpResponse::Created().json(json!({ "id": "u-2", "message": "created" }))
            }
        }
        ("POST", ["places", _, "reviews"]) | ("POST", ["reviews", "place", _, "new"]) => {
            if authorised(&req) {
                HttpResponse::Created().json(json!({ "id": "r-new" }))
            } else {
                HttpResponse::Unauthorized().json(json!({ "error": "Token expired" }))
            }
        }
        _ => HttpResponse::build(StatusCode::NOT_FOUND).json(json!({ "error": "no route" })),
    }
}
