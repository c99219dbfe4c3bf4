//! tests/global_errors/408.rs
//! Ensures that a request outliving the configured timeout gets an empty 408.

use crate::common;

use std::time::Duration;

use axum::{routing::get, Router};
use ping_test_server::core::server::with_middleware;
use ping_test_server::{AppState, EnvironmentVariables};
use reqwest::StatusCode;
use tokio::time::timeout;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "too late"
}

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let env: EnvironmentVariables = EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    };

    // The server's layers around a route slower than the timeout.
    let routes: Router<AppState> = Router::new().route("/slow", get(slow_handler));
    let app: Router = with_middleware(routes, &env).with_state(AppState::new(env.clone()));

    let base_url: String = common::spawn_router(app);

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/slow", base_url))
                .send()
                .await
        }
    )
    .await;

    // Ensure the client did not timeout waiting for a response.
    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(resp.bytes().await.unwrap().is_empty());
}
