// Library root for the ping test server

pub mod api;
pub mod config;
pub mod core;
pub mod middlewares;
pub mod utils;

pub use crate::api::ping::{PingResponse, PING_BODY, PING_PATH};
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
