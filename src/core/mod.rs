// Start of file: /src/core/mod.rs

/*
    * Process plumbing: logging setup, listener acquisition, router assembly.
*/

pub mod logging;
pub mod server;

// End of file: /src/core/mod.rs
