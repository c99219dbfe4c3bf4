// Start of file: /src/middlewares/method_guard.rs

use std::convert::Infallible;
use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use tracing::debug;

/// Only GET (and HEAD, which rides on GET routes) reach the router.
pub fn is_supported_method(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

/// Any other method is answered with an empty `501 Not Implemented`,
/// whatever the path.
pub async fn method_guard(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    if !is_supported_method(req.method()) {
        debug!("Unsupported method {} for {}", req.method(), req.uri());
        return Ok(StatusCode::NOT_IMPLEMENTED.into_response());
    }

    Ok(next.run(req).await)
}


// End of file: /src/middlewares/method_guard.rs
