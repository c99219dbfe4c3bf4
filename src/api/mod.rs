// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the server: the ping route and the 404 fallback.
*/

pub mod fallback;
pub mod ping;

// End of file: /src/api/mod.rs
