//! tests/global_errors/501.rs
//! Ensures that methods other than GET/HEAD get a 501 and leave the server running.

use crate::common;

use reqwest::{Method, StatusCode};

#[tokio::test]
async fn post_to_ping_returns_501_and_server_keeps_serving() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let resp: reqwest::Response = client
        .post(format!("{}/api/ping", base_url))
        .body(r#"{"message": "ping"}"#)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    assert!(resp.bytes().await.unwrap().is_empty());

    // The listener must still answer afterwards.
    let follow_up: reqwest::Response = client
        .get(format!("{}/api/ping", base_url))
        .send()
        .await
        .expect("Server stopped answering after POST.");

    assert_eq!(follow_up.status(), StatusCode::OK);
}

#[tokio::test]
async fn other_methods_return_501_on_any_path() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    for method in [Method::PUT, Method::DELETE, Method::PATCH, Method::OPTIONS] {
        for target in ["/api/ping", "/does-not-exist"] {
            let resp: reqwest::Response = client
                .request(method.clone(), format!("{}{}", base_url, target))
                .send()
                .await
                .expect("Failed to execute request.");

            assert_eq!(
                resp.status(),
                StatusCode::NOT_IMPLEMENTED,
                "{method} {target}"
            );
        }
    }
}
