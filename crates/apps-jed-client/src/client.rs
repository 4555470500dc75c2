// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Directory API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::error::JedError;
use crate::query::{CategoryQuery, DEFAULT_BASE_URL};
use crate::types::{CategoryPayload, ExtensionItem};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer a category search URL with a list of extensions.
#[async_trait]
pub trait ExtensionSource: Send + Sync {
	/// Base URL search URLs for this source are built against.
	fn base_url(&self) -> &str;

	async fn fetch_category_extensions(&self, url: &Url) -> Result<Vec<ExtensionItem>, JedError>;
}

/// Client for the directory's JSON search endpoint.
#[derive(Debug, Clone)]
pub struct JedClient {
	http_client: Client,
	base_url: String,
}

impl JedClient {
	/// Creates a client with the default timeout against the public directory.
	pub fn new() -> Result<Self, JedError> {
		Self::with_timeout(REQUEST_TIMEOUT)
	}

	pub fn with_timeout(timeout: Duration) -> Result<Self, JedError> {
		let http_client = apps_common_http::client_with_timeout(timeout)?;

		Ok(Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Builds the search URL for `query` against this client's base URL.
	pub fn category_url(&self, query: &CategoryQuery) -> Result<Url, JedError> {
		query.to_url(&self.base_url)
	}

	/// Performs one GET and decodes the `data` list. No retries.
	#[instrument(skip(self, url), fields(url = %url))]
	pub async fn fetch(&self, url: &Url) -> Result<Vec<ExtensionItem>, JedError> {
		debug!("Sending category request to the directory");

		let response = self
			.http_client
			.get(url.clone())
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return JedError::Timeout;
				}
				error!(error = %e, "Network error during directory request");
				JedError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from the directory");

		if status != StatusCode::OK {
			error!(status = status.as_u16(), "Unexpected response from the directory");
			return Err(JedError::UpstreamStatus {
				status: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			JedError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let payload: CategoryPayload = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to decode directory response");
			JedError::Decode(e.to_string())
		})?;

		debug!(item_count = payload.data.len(), "Category fetch completed");

		Ok(payload.data)
	}
}

#[async_trait]
impl ExtensionSource for JedClient {
	fn base_url(&self) -> &str {
		&self.base_url
	}

	async fn fetch_category_extensions(&self, url: &Url) -> Result<Vec<ExtensionItem>, JedError> {
		self.fetch(url).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	async fn client_for(server: &MockServer) -> (JedClient, Url) {
		let client = JedClient::new().unwrap().with_base_url(server.uri());
		let url = client.category_url(&CategoryQuery::new(9)).unwrap();
		(client, url)
	}

	#[test]
	fn test_client_creation() {
		let client = JedClient::new().unwrap();
		assert_eq!(ExtensionSource::base_url(&client), DEFAULT_BASE_URL);
	}

	#[test]
	fn test_with_base_url() {
		let client = JedClient::new().unwrap().with_base_url("http://localhost:1234");
		assert_eq!(ExtensionSource::base_url(&client), "http://localhost:1234");
		let url = client.category_url(&CategoryQuery::new(1)).unwrap();
		assert_eq!(url.host_str(), Some("localhost"));
		assert_eq!(url.port(), Some(1234));
	}

	#[tokio::test]
	async fn test_fetch_returns_data_items() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/index.php"))
			.and(query_param("option", "com_jed"))
			.and(query_param("filter[core_catid]", "9"))
			.and(query_param("dir", "DESC"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"data": [
					{"id": 1, "core_title": {"value": "First"}},
					{"id": 2, "core_title": {"value": "Second"}}
				]
			})))
			.expect(1)
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let items = client.fetch(&url).await.unwrap();

		assert_eq!(items.len(), 2);
		assert_eq!(items[0].title().as_deref(), Some("First"));
		assert_eq!(items[1].title().as_deref(), Some("Second"));
	}

	#[tokio::test]
	async fn test_not_found_is_upstream_error() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let err = client.fetch(&url).await.unwrap_err();

		assert!(matches!(err, JedError::UpstreamStatus { status: 404 }));
		assert_eq!(err.code(), 404);
	}

	#[tokio::test]
	async fn test_non_200_success_is_still_rejected() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(204))
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let err = client.fetch(&url).await.unwrap_err();
		assert!(matches!(err, JedError::UpstreamStatus { status: 204 }));
	}

	#[tokio::test]
	async fn test_html_body_is_decode_error() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(
				ResponseTemplate::new(200).set_body_string("<html><body>Maintenance</body></html>"),
			)
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let err = client.fetch(&url).await.unwrap_err();
		assert!(matches!(err, JedError::Decode(_)));
		assert_eq!(err.code(), 500);
	}

	#[tokio::test]
	async fn test_empty_body_is_decode_error() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_string(""))
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let err = client.fetch(&url).await.unwrap_err();
		assert!(matches!(err, JedError::Decode(_)));
	}

	#[tokio::test]
	async fn test_missing_data_field_is_decode_error() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "nope"})))
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let err = client.fetch(&url).await.unwrap_err();
		match err {
			JedError::Decode(message) => assert!(message.contains("data")),
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn test_timeout_is_reported() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(
				ResponseTemplate::new(200)
					.set_body_json(json!({"data": []}))
					.set_delay(Duration::from_millis(500)),
			)
			.mount(&server)
			.await;

		let client = JedClient::with_timeout(Duration::from_millis(50))
			.unwrap()
			.with_base_url(server.uri());
		let url = client.category_url(&CategoryQuery::new(9)).unwrap();
		let err = client.fetch(&url).await.unwrap_err();
		assert!(matches!(err, JedError::Timeout));
	}

	#[tokio::test]
	async fn test_source_trait_delegates_to_fetch() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 5}]})))
			.mount(&server)
			.await;

		let (client, url) = client_for(&server).await;
		let source: &dyn ExtensionSource = &client;
		let items = source.fetch_category_extensions(&url).await.unwrap();
		assert_eq!(items[0].field_value("id").as_deref(), Some("5"));
	}
}
