// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SerpApi client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};
use serpapi_credentials::{CredentialError, CredentialProvider, SecretString};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, instrument, warn};

use crate::classify;
use crate::error::{AuthorizationError, SerpApiError};
use crate::format;
use crate::types::{search_query, MapsReviewsRequest, MapsSearchRequest, QueryParams, API_KEY_ALIASES};

pub const DEFAULT_BASE_URL: &str = "https://serpapi.com";
const SEARCH_PATH: &str = "/search";

const NO_PROVIDER_MESSAGE: &str =
	"Integration not configured for SerpApi App. Cannot retrieve API key.";
const MISSING_KEY_MESSAGE: &str = "API key for SerpApi is missing. Please ensure it's set in the store (e.g., SERPAPI_API_KEY in credentials).";

/// Client for the SerpApi search endpoints.
///
/// The API key is resolved from the credential provider on first use and
/// cached for the lifetime of the client. A key rejected later is not
/// evicted; build a new client to pick up a rotated key.
#[derive(Debug)]
pub struct SerpApiClient {
	http_client: Client,
	base_url: String,
	provider: Option<Arc<dyn CredentialProvider>>,
	api_key: OnceCell<SecretString>,
}

impl SerpApiClient {
	/// Creates a client using the shared HTTP builder and default timeout.
	pub fn new(provider: Option<Arc<dyn CredentialProvider>>) -> Result<Self, SerpApiError> {
		Self::with_timeout(provider, serpapi_common_http::DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(
		provider: Option<Arc<dyn CredentialProvider>>,
		timeout: Duration,
	) -> Result<Self, SerpApiError> {
		let http_client = serpapi_common_http::client_with_timeout(timeout)?;
		Ok(Self::with_http_client(provider, http_client))
	}

	pub fn with_http_client(
		provider: Option<Arc<dyn CredentialProvider>>,
		http_client: Client,
	) -> Self {
		Self {
			http_client,
			base_url: DEFAULT_BASE_URL.to_string(),
			provider,
			api_key: OnceCell::new(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn endpoint(&self) -> String {
		format!("{}{SEARCH_PATH}", self.base_url.trim_end_matches('/'))
	}

	/// Returns the API key, fetching it from the provider on first call.
	#[instrument(skip(self))]
	pub async fn resolve_key(&self) -> Result<SecretString, AuthorizationError> {
		let key = self.api_key.get_or_try_init(|| self.fetch_key()).await?;
		Ok(key.clone())
	}

	async fn fetch_key(&self) -> Result<SecretString, AuthorizationError> {
		let Some(provider) = &self.provider else {
			error!("SerpApi integration not configured");
			return Err(AuthorizationError::new(NO_PROVIDER_MESSAGE));
		};

		let credentials = match provider.get_credentials().await {
			Ok(credentials) => credentials,
			Err(CredentialError::NotAuthorized(message)) => {
				error!(provider = provider.name(), error = %message, "authorization error when fetching credentials");
				return Err(AuthorizationError::new(message));
			}
			Err(e) => {
				error!(provider = provider.name(), error = %e, "unexpected error when fetching credentials");
				return Err(AuthorizationError::new(format!(
					"Failed to get SerpApi credentials: {e}"
				)));
			}
		};

		if let Some(key) = credentials.first_of(API_KEY_ALIASES) {
			info!(provider = provider.name(), "SerpApi API key retrieved and cached");
			return Ok(key.clone());
		}

		error!(provider = provider.name(), "SerpApi API key not found in credentials");
		let message = match provider.authorize().await {
			Ok(Some(hint)) => hint.to_message(),
			Ok(None) => MISSING_KEY_MESSAGE.to_string(),
			Err(e) => {
				warn!(error = %e, "could not retrieve authorization action for SerpApi");
				MISSING_KEY_MESSAGE.to_string()
			}
		};
		Err(AuthorizationError::new(message))
	}

	/// Performs a general search and renders organic results as text.
	///
	/// `params` are merged over `{engine: "google_light", output: "json"}`.
	/// Only authorization failures are returned as `Err`; rate limits, HTTP
	/// errors, API errors and anything unexpected come back as text.
	#[instrument(skip(self, params))]
	pub async fn search(&self, params: Option<Map<String, Value>>) -> Result<String, AuthorizationError> {
		let api_key = self.resolve_key().await.map_err(|e| {
			error!("SerpApi search failed due to an authorization error");
			e
		})?;
		info!("attempting SerpApi search");

		let query = search_query(api_key.expose(), params.as_ref());
		debug!(engine = query.get("engine").map(String::as_str), "sending search request");

		let response = match self.send(&query).await {
			Ok(response) => response,
			Err(e) => {
				error!(error = %e, "unexpected error during SerpApi search");
				return classify::unexpected(&e.to_string());
			}
		};

		let status = response.status();
		let body = match response.text().await {
			Ok(body) => body,
			Err(e) => {
				let e = e.without_url();
				error!(error = %e, "failed to read SerpApi response body");
				return classify::unexpected(&e.to_string());
			}
		};

		if !status.is_success() {
			warn!(status = status.as_u16(), "SerpApi search returned non-success status");
			return format::search_failure(status.as_u16(), &body);
		}

		match serde_json::from_str::<Value>(&body) {
			Ok(data) => format::search_response(&data),
			Err(e) => {
				error!(error = %e, "failed to parse SerpApi response");
				classify::unexpected(&format!("invalid JSON in SerpApi response: {e}"))
			}
		}
	}

	/// Searches Google Maps. `location` is an `@lat,lng,zoom` viewport.
	#[instrument(skip(self))]
	pub async fn maps_search(
		&self,
		query: &str,
		location: Option<&str>,
	) -> Result<Value, SerpApiError> {
		let api_key = self.resolve_key().await?;
		let request = MapsSearchRequest::new(query, location);
		self.get_json(&request.to_query(api_key.expose())).await
	}

	/// Fetches Google Maps reviews for a place. `language` defaults to `en`.
	#[instrument(skip(self))]
	pub async fn maps_reviews(
		&self,
		place_id: &str,
		language: Option<&str>,
	) -> Result<Value, SerpApiError> {
		let api_key = self.resolve_key().await?;
		let request = MapsReviewsRequest::new(place_id, language);
		self.get_json(&request.to_query(api_key.expose())).await
	}

	// The query carries the API key, so errors are stripped of their URL.
	async fn send(&self, query: &QueryParams) -> Result<reqwest::Response, reqwest::Error> {
		self
			.http_client
			.get(self.endpoint())
			.query(query)
			.send()
			.await
			.map_err(reqwest::Error::without_url)
	}

	async fn get_json(&self, query: &QueryParams) -> Result<Value, SerpApiError> {
		debug!(engine = query.get("engine").map(String::as_str), "sending request to SerpApi");

		let response = self.send(query).await.map_err(|e| {
			error!(error = %e, "network error during SerpApi request");
			SerpApiError::Network(e)
		})?;

		let status = response.status();
		let body = response
			.text()
			.await
			.map_err(|e| SerpApiError::Network(e.without_url()))?;

		if !status.is_success() {
			error!(status = status.as_u16(), "SerpApi returned an error status");
			return Err(SerpApiError::Http {
				status: status.as_u16(),
				body,
			});
		}

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "failed to parse SerpApi response");
			SerpApiError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serpapi_credentials::StaticCredentialProvider;

	fn provider(key: &str) -> Option<Arc<dyn CredentialProvider>> {
		Some(Arc::new(StaticCredentialProvider::api_key(key)))
	}

	#[test]
	fn test_client_creation() {
		let client = SerpApiClient::new(provider("k")).unwrap();
		assert_eq!(client.base_url(), DEFAULT_BASE_URL);
		assert_eq!(client.endpoint(), "https://serpapi.com/search");
	}

	#[test]
	fn test_with_base_url_trims_slash() {
		let client = SerpApiClient::new(None)
			.unwrap()
			.with_base_url("http://127.0.0.1:9999/");
		assert_eq!(client.endpoint(), "http://127.0.0.1:9999/search");
	}

	#[tokio::test]
	async fn test_resolve_key_without_provider() {
		let client = SerpApiClient::new(None).unwrap();
		let err = client.resolve_key().await.unwrap_err();
		assert_eq!(err.message(), NO_PROVIDER_MESSAGE);
		// Failures are not cached.
		assert!(client.resolve_key().await.is_err());
	}

	#[tokio::test]
	async fn test_resolve_key_caches() {
		let client = SerpApiClient::new(provider("cached")).unwrap();
		assert_eq!(client.resolve_key().await.unwrap().expose(), "cached");
		assert!(client.api_key.initialized());
	}
}
