//! Mock server helpers for htmx endpoints
//!
//! Every endpoint is served from one wiremock server; point the fetcher at it
//! with `HtmxConfig::with_base_url(&server.uri())`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use couscous_core::types::HtmxConfig;
use couscous_htmx::{HttpClient, ReqwestClient};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the core library on the mock CDN
pub fn core_path(version: &str) -> String {
    format!("/htmx.org@{}/dist/htmx.min.js", version)
}

/// Path of an extension on the mock CDN
pub fn extension_path(version: &str, extension: &str) -> String {
    format!("/htmx.org@{}/dist/ext/{}.js", version, extension)
}

/// Path of the web-types file on the mock contents API
pub const CONTENTS_PATH: &str =
    "/repos/bigskysoftware/htmx/contents/editors/jetbrains/htmx.web-types.json";

/// Config pointing every endpoint at the mock server
pub fn mock_config(server: &MockServer) -> HtmxConfig {
    HtmxConfig::with_base_url(&server.uri())
}

/// Real HTTP client for talking to the mock server
pub fn http_client() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestClient::new(&Default::default()).expect("client"))
}

/// Serve `tag` from the latest-release endpoint
pub async fn mock_latest_release(server: &MockServer, tag: &str) {
    Mock::given(method("GET"))
        .and(path("/repos/bigskysoftware/htmx/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": tag,
            "name": tag,
        })))
        .mount(server)
        .await;
}

/// Serve a CDN file with the given status and body
pub async fn mock_asset(server: &MockServer, asset_path: &str, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(asset_path))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Serve the web-types document for `v{version}` in a contents API envelope
pub async fn mock_web_types(server: &MockServer, version: &str, document: &str) {
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .and(query_param("ref", format!("v{}", version)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "htmx.web-types.json",
            "encoding": "base64",
            "content": STANDARD.encode(document),
        })))
        .mount(server)
        .await;
}

/// Contents API answer for a ref that does not exist
pub async fn mock_web_types_missing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(CONTENTS_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "No commit found for the ref",
            "status": "404",
        })))
        .mount(server)
        .await;
}
