// Start of file: src/main.rs

use ping_test_server::config::state::AppState;
use ping_test_server::core::{logging::init_tracing, server};

// One thread: connections are multiplexed, never handled in parallel
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let state: AppState = AppState::from_env()?;

    server::run(state).await
}

// End of file: src/main.rs
