//! ATTOM Data API client.
//!
//! Wraps one blocking HTTP session pre-configured with the API key header.
//! Each lookup issues a single GET request against a fixed path; 2xx JSON
//! bodies are returned verbatim and HTTP-level failures are translated into
//! [`ApiError`]. No retries, no backoff - one attempt per call.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::core::config::CredentialsConfig;
use crate::core::error::{Error, Result};

use super::error::ApiError;

/// Timeout applied to every upstream request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the ATTOM Data property API.
///
/// Owns one reusable HTTP session with the API key attached as a default
/// header. Constructed once at server startup and shared read-only across
/// tool invocations; the underlying connection pool is released when the
/// process exits.
pub struct AttomClient {
    http: Client,
    base_url: String,
}

impl AttomClient {
    /// Create a new ATTOM client from validated credentials.
    ///
    /// Fails before any network call when the API key is missing.
    pub fn new(credentials: &CredentialsConfig) -> Result<Self> {
        credentials.validate()?;

        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(&credentials.attom_api_key)
            .map_err(|_| Error::config("ATTOM_API_KEY contains invalid header characters"))?;
        headers.insert("apikey", api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: credentials.attom_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch property information for a given address.
    ///
    /// Returns the upstream JSON document unchanged.
    pub fn property_by_address(&self, address: &str) -> std::result::Result<Value, ApiError> {
        self.get("/property/address", &[("address", address)])
    }

    /// Fetch comparable sales for a given address.
    pub fn comparables(&self, address: &str, count: u32) -> std::result::Result<Value, ApiError> {
        let count = count.to_string();
        self.get("/property/comps", &[("address", address), ("count", &count)])
    }

    /// Issue a single GET request and normalize the outcome.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> std::result::Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .map_err(ApiError::request)?;

        let status = response.status();
        if status.is_success() {
            return response.json().map_err(ApiError::request);
        }

        let status_code = status.as_u16();
        let body = response.text().unwrap_or_default();
        let message =
            extract_error_message(&body).unwrap_or_else(|| format!("ATTOM API error: {status}"));
        Err(ApiError::upstream(message, status_code))
    }
}

/// Pull the most specific failure description out of an error body.
///
/// Prefers the `error.message` field of a JSON body, then the raw body text
/// when it is non-empty.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_owned))
        .or_else(|| (!body.trim().is_empty()).then(|| body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials(api_key: &str, base_url: &str) -> CredentialsConfig {
        CredentialsConfig {
            attom_api_key: api_key.to_string(),
            attom_base_url: base_url.to_string(),
        }
    }

    /// The client is blocking; run it off the test runtime's worker threads.
    async fn in_blocking<T, F>(f: F) -> T
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(f)
            .await
            .expect("blocking task panicked")
    }

    #[test]
    fn test_rejects_missing_api_key_before_any_request() {
        let result = AttomClient::new(&credentials("", "http://localhost:9"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_success_body_passes_through_verbatim() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"property": {"id": "1"}});
        Mock::given(method("GET"))
            .and(path("/property/address"))
            .and(query_param("address", "123 Main St, Springfield, IL 62704"))
            .and(header("apikey", "test-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.property_by_address("123 Main St, Springfield, IL 62704")
        })
        .await;

        assert_eq!(result.unwrap(), body);
    }

    #[tokio::test]
    async fn test_error_body_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/property/address"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"message": "Property not found"}
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let error = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.property_by_address("nowhere")
        })
        .await
        .unwrap_err();

        assert_eq!(error.message, "Property not found");
        assert_eq!(error.status_code, Some(404));
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_used_as_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/property/address"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let error = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.property_by_address("anywhere")
        })
        .await
        .unwrap_err();

        assert_eq!(error.message, "upstream exploded");
        assert_eq!(error.status_code, Some(500));
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/property/address"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let uri = server.uri();
        let error = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.property_by_address("anywhere")
        })
        .await
        .unwrap_err();

        assert!(error.message.starts_with("ATTOM API error:"));
        assert_eq!(error.status_code, Some(403));
    }

    #[tokio::test]
    async fn test_comparables_sends_requested_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/property/comps"))
            .and(query_param("address", "123 Main St"))
            .and(query_param("count", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.comparables("123 Main St", 3)
        })
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_has_no_status_code() {
        // Grab a port that was just released so the connection is refused.
        let server = MockServer::start().await;
        let uri = server.uri();
        drop(server);

        let error = in_blocking(move || {
            let client = AttomClient::new(&credentials("test-key", &uri)).unwrap();
            client.property_by_address("123 Main St")
        })
        .await
        .unwrap_err();

        assert!(error.message.starts_with("Request failed:"));
        assert_eq!(error.status_code, None);
    }

    #[test]
    fn test_extract_error_message_precedence() {
        assert_eq!(
            extract_error_message(r#"{"error": {"message": "nope"}}"#),
            Some("nope".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"status": "bad"}"#),
            Some(r#"{"status": "bad"}"#.to_string())
        );
        assert_eq!(extract_error_message("plain text"), Some("plain text".to_string()));
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("  "), None);
    }
}
