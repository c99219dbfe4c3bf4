// Start of file: /src/utils/mod.rs

/*
    * Shared helpers: mapping tower layer errors to HTTP status codes.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
