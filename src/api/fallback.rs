// Start of file: src/api/fallback.rs

use axum::http::{StatusCode, Uri};
use tracing::debug;

/// Every unmatched path gets a bare 404: no body and no content type.
pub async fn fallback_handler(uri: Uri) -> StatusCode {
    debug!("No route for {uri}");
    StatusCode::NOT_FOUND
}

// End of file: src/api/fallback.rs
