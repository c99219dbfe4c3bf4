// Ping route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub const PING_PATH: &str = "/api/ping";

/// Registers `GET /api/ping` (HEAD is answered by the same route)
pub fn ping_routes() -> Router<AppState> {
    Router::new()
        .route(PING_PATH, get(handler::ping_handler))
}
