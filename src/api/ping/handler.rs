// Ping endpoint used by clients to check that the API is reachable

use axum::{
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Exact bytes sent for a successful ping. Note the space after the colon.
pub const PING_BODY: &str = r#"{"message": "pong"}"#;

pub const PING_CONTENT_TYPE: &str = "application/json";

/// Typed view of [`PING_BODY`] for clients that deserialize it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Answers `GET /api/ping`.
///
/// The request target must match verbatim. A query string or an
/// absolute-form target (`http://host/api/ping`) turns the request into a
/// 404 just like any other unknown path.
#[instrument(skip_all, fields(uri = %uri))]
pub async fn ping_handler(uri: Uri) -> Response {
    if !is_exact_origin_form(&uri) {
        debug!("Ping target is not exactly the origin-form path, treating as unknown");
        return StatusCode::NOT_FOUND.into_response();
    }

    (StatusCode::OK, [(CONTENT_TYPE, PING_CONTENT_TYPE)], PING_BODY).into_response()
}

/// True when the target is a bare path: no scheme, no authority, no query
fn is_exact_origin_form(uri: &Uri) -> bool {
    uri.scheme().is_none() && uri.authority().is_none() && uri.query().is_none()
}
