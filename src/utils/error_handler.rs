// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

/// Maps layer errors to bare status codes, keeping error bodies empty
/// like the 404 fallback.
pub async fn handle_global_error(err: BoxError) -> StatusCode {
    let status: StatusCode = status_for_error(&*err);
    warn!("Layer error mapped to {}: {}", status.as_u16(), err);
    status
}

/// 408 for timeouts, 500 otherwise
pub fn status_for_error(err: &(dyn Error + 'static)) -> StatusCode {
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
