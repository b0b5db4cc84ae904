//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

/// Test helper functions
pub mod helpers {
    use botr::{Params, Settings, api::signature};
    use wiremock::{MockServer, Request};

    pub const API_KEY: &str = "XOqEAfxj";
    pub const API_SECRET: &str = "uA96CFtJa138E2T5GhKfngml";

    /// `host:port` of a mock server
    pub fn address(server: &MockServer) -> String {
        server.uri().trim_start_matches("http://").to_string()
    }

    /// Settings pointing both the API and the upload host at `server`
    pub fn settings_for(server: &MockServer) -> Settings {
        let mut settings = Settings::with_credentials(API_KEY, API_SECRET);
        settings.api.protocol = "http".to_string();
        settings.api.server = address(server);
        settings.upload.protocol = "http".to_string();
        settings.upload.address = address(server);
        settings
    }

    /// Decoded query parameters of a received request
    pub fn query_params(request: &Request) -> Params {
        request
            .url
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Whether the request carries a valid signature for the test secret
    pub fn has_valid_signature(request: &Request) -> bool {
        let params = query_params(request);
        match params.get("api_signature") {
            Some(digest) => digest == signature(&params, API_SECRET),
            None => false,
        }
    }

    /// Body of an upload link pointing at `server`
    pub fn upload_link_json(server: &MockServer, call_class: &str) -> serde_json::Value {
        serde_json::json!({
            "protocol": "http",
            "address": address(server),
            "path": format!("/v1/{call_class}/upload"),
            "query": {"key": "yYul4DRz", "token": "bbfc1c3c4b"}
        })
    }
}
