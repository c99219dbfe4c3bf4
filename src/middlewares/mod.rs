// Start of file: /src/middlewares/mod.rs

/*
    * Middleware module entry file:
    * - request_logger: stamps the start time and logs each finished request
    * - method_guard: answers 501 for methods the server does not implement
*/

pub mod method_guard;
pub mod request_logger;

// End of file: /src/middlewares/mod.rs
