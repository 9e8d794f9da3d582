//! HTTP adapter mapping for domain and port errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting page
//! handlers return `Result<_, Error>` and still produce a complete HTML page
//! with a consistent status code.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::ports::{AuthGatewayError, PlaceSourceError, ReviewGatewayError};
use crate::domain::{Error, ErrorCode};
use crate::inbound::http::view::{NavState, Page, escape};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

const PLACES_UNAVAILABLE_MESSAGE: &str = "Failed to load places. Please try again.";
const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again.";

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Upstream => StatusCode::BAD_GATEWAY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message safe to show a visitor; internal details are never rendered.
pub(crate) fn visible_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        INTERNAL_MESSAGE
    } else {
        error.message()
    }
}

fn error_page(error: &Error, trace_id: Option<&str>) -> String {
    let status = status_for(error.code());
    let heading = status.canonical_reason().unwrap_or("Error");
    let mut body = format!(
        r#"<section class="error-page"><h1>{}</h1><p class="error-message">{}</p>"#,
        escape(heading),
        escape(visible_message(error))
    );
    if let Some(id) = trace_id {
        body.push_str(&format!(
            r#"<p class="trace-id">Reference: <code>{}</code></p>"#,
            escape(id)
        ));
    }
    body.push_str(r#"<p><a href="/index.html">Back to places</a></p></section>"#);
    Page::new(heading, NavState::Neutral, body).render()
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self
            .trace_id()
            .map(str::to_owned)
            .or_else(|| TraceId::current().map(|id| id.to_string()));
        if matches!(self.code(), ErrorCode::InternalError) {
            error!(message = %self.message(), trace_id = ?trace_id, "internal error rendered");
        }
        let mut builder = HttpResponse::build(self.status_code());
        builder.content_type(ContentType::html());
        if let Some(id) = &trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.body(error_page(self, trace_id.as_deref()))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

impl From<PlaceSourceError> for Error {
    fn from(err: PlaceSourceError) -> Self {
        match err {
            PlaceSourceError::AuthExpired => Error::unauthorized("Your session has expired."),
            PlaceSourceError::NotFound { .. } => Error::not_found("Place not found"),
            PlaceSourceError::Rejected { status, message } => from_rejection(status, message),
            PlaceSourceError::Transport { .. } | PlaceSourceError::Timeout { .. } => {
                Error::service_unavailable(PLACES_UNAVAILABLE_MESSAGE)
            }
            PlaceSourceError::Decode { message } => {
                error!(%message, "undecodable place payload");
                Error::upstream(PLACES_UNAVAILABLE_MESSAGE)
            }
        }
    }
}

impl From<AuthGatewayError> for Error {
    fn from(err: AuthGatewayError) -> Self {
        let message = err.user_message();
        match err {
            AuthGatewayError::Rejected { status, .. } => from_rejection(status, message),
            AuthGatewayError::Transport { .. } | AuthGatewayError::Timeout { .. } => {
                Error::service_unavailable(message)
            }
            AuthGatewayError::Decode { .. } => Error::upstream(message),
        }
    }
}

impl From<ReviewGatewayError> for Error {
    fn from(err: ReviewGatewayError) -> Self {
        match err {
            ReviewGatewayError::AuthExpired => Error::unauthorized("Your session has expired."),
            ReviewGatewayError::Rejected { status, message } => from_rejection(status, message),
            ReviewGatewayError::Transport { .. } | ReviewGatewayError::Timeout { .. } => {
                Error::service_unavailable(crate::domain::ports::NETWORK_ERROR_MESSAGE)
            }
        }
    }
}

/// Map an upstream rejection to the closest page status.
fn from_rejection(status: u16, message: String) -> Error {
    match status {
        400 | 409 | 422 => Error::invalid_request(message),
        401 => Error::unauthorized(message),
        403 => Error::forbidden(message),
        404 => Error::not_found(message),
        _ => Error::upstream(message),
    }
}
