// Route exports
pub mod outfits;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use serde::Serialize;

pub use outfits::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(outfits::configure),
    );
}

/// JSON error response for payload errors
#[derive(Debug, Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
///
/// Oversized bodies get 413 `payload_too_large`; anything else is 400 `invalid_json`.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    let (kind, message, status) = match &err {
        error::JsonPayloadError::Overflow { .. } | error::JsonPayloadError::OverflowKnownLength { .. } => (
            "payload_too_large",
            format!("Request body too large: {}", err),
            StatusCode::PAYLOAD_TOO_LARGE,
        ),
        _ => ("invalid_json", format!("Invalid JSON: {}", err), StatusCode::BAD_REQUEST),
    };

    JsonError {
        error: kind.to_string(),
        message,
        status_code: status.as_u16(),
    }
    .into()
}

/// JSON extractor config accepting bodies up to `limit` bytes and rendering
/// payload errors as `JsonError`
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}
