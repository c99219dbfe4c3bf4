// Start of file: /src/middlewares/request_logger.rs

use std::{
    convert::Infallible,
    time::{Duration, Instant},
};
use axum::{
    body::Body,
    http::{Method, Request, Response, Uri},
    middleware::Next,
};
use tracing::{info, warn};

/// Stores the arrival time in the request extensions. Must be the outermost layer.
pub async fn start_time_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();

    req.extensions_mut().insert(start);

    Ok(next.run(req).await)
}

/// Logs method, target, status and elapsed time once the response is ready.
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    // Missing when start_time_middleware isn't installed; time from here instead
    let start_time: Instant = req
        .extensions()
        .get::<Instant>()
        .copied()
        .unwrap_or_else(Instant::now);

    let method: Method = req.method().clone();
    let uri: Uri = req.uri().clone();

    let response: Response<Body> = next.run(req).await;

    let elapsed: Duration = start_time.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(%method, %uri, status = status.as_u16(), ?elapsed, "request failed");
    } else {
        info!(%method, %uri, status = status.as_u16(), ?elapsed, "request served");
    }

    Ok(response)
}

// End of file: /src/middlewares/request_logger.rs
