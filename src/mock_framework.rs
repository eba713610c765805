//! # Mock Framework
//!
//! Utilities for testing transactions without a live API.
//!
//! Start a [`MockServer`], mount the responses the test needs, then drive
//! transactions with a [`single_user`] pointed at it. [`received`] lists what
//! reached the server, in order, as `"METHOD /path"`.

use goose::config::GooseConfiguration;
use goose::prelude::*;
use gumdrop::Options;
use serde_json::json;
use url::Url;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A standalone user whose requests go to `server`. No metrics channel, no throttle.
pub fn single_user(server: &MockServer) -> GooseUser {
    let base_url = Url::parse(&server.uri()).expect("Mock server URI should parse");
    let configuration =
        GooseConfiguration::parse_args_default(&["--co-mitigation", "disabled"])
            .expect("Default configuration should parse");
    GooseUser::single(base_url, &configuration).expect("Single user should build")
}

/// Configuration for a whole attack against `server`: one user, `iterations` runs
/// of its scenario, no controllers and no metrics reset.
pub fn attack_configuration(server: &MockServer, iterations: usize) -> GooseConfiguration {
    let host = server.uri();
    let iterations = iterations.to_string();
    let args = [
        "--host",
        host.as_str(),
        "--users",
        "1",
        "--hatch-rate",
        "1",
        "--iterations",
        iterations.as_str(),
        "--no-telnet",
        "--no-websocket",
    ];
    GooseConfiguration::parse_args_default(&args[..]).expect("Attack configuration should parse")
}

/// Answers every request with `status` and an empty JSON object.
pub async fn respond_to_all(server: &MockServer, status: u16) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
        .mount(server)
        .await;
}

/// Requests the server has seen so far, as `"METHOD /path"`.
pub async fn received(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| format!("{} {}", request.method, request.url.path()))
        .collect()
}

/// JSON bodies the server has seen so far, in order.
pub async fn received_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| !request.body.is_empty())
        .map(|request| serde_json::from_slice(&request.body).expect("Request body should be JSON"))
        .collect()
}
