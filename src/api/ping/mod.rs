pub mod handler;
pub mod routes;

pub use handler::{PingResponse, PING_BODY};
pub use routes::{ping_routes, PING_PATH};
