// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SerpApi operations wrapped as tools.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use serpapi_search::SerpApiClient;

use crate::{Tool, ToolError};

#[derive(Debug, Deserialize)]
struct SearchArgs {
	#[serde(default)]
	params: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct MapsSearchArgs {
	query: String,
	#[serde(default, alias = "ll")]
	location: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MapsReviewsArgs {
	#[serde(alias = "data_id")]
	place_id: String,
	#[serde(default, alias = "hl")]
	language: Option<String>,
}

fn parse_args<T: for<'de> Deserialize<'de>>(args: Value) -> Result<T, ToolError> {
	// Hosts send `null` for tools invoked without arguments.
	let args = if args.is_null() {
		Value::Object(Map::new())
	} else {
		args
	};
	serde_json::from_value(args).map_err(|e| ToolError::Serialization(e.to_string()))
}

fn non_empty(field: &str, value: &str) -> Result<String, ToolError> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		return Err(ToolError::InvalidArguments(format!(
			"{field} must not be empty"
		)));
	}
	Ok(trimmed.to_string())
}

pub struct SearchTool {
	client: Arc<SerpApiClient>,
}

impl SearchTool {
	pub fn new(client: Arc<SerpApiClient>) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Tool for SearchTool {
	fn name(&self) -> &str {
		"serpapi_search"
	}

	fn description(&self) -> &str {
		"Search the web through SerpApi and return titles, links and snippets of the organic results as text."
	}

	fn input_schema(&self) -> Value {
		serde_json::json!({
			"type": "object",
			"properties": {
				"params": {
					"type": "object",
					"description": "SerpApi query parameters, e.g. {\"q\": \"Coffee\", \"location\": \"Austin, TX\"}. The engine defaults to google_light.",
					"additionalProperties": true
				}
			}
		})
	}

	async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
		let args: SearchArgs = parse_args(args)?;
		tracing::debug!(
				param_count = args.params.as_ref().map(|p| p.len()).unwrap_or(0),
				"serpapi_search: invoking"
		);
		let text = self.client.search(args.params).await?;
		Ok(Value::String(text))
	}
}

pub struct MapsSearchTool {
	client: Arc<SerpApiClient>,
}

impl MapsSearchTool {
	pub fn new(client: Arc<SerpApiClient>) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Tool for MapsSearchTool {
	fn name(&self) -> &str {
		"serpapi_google_maps_search"
	}

	fn description(&self) -> &str {
		"Search Google Maps through SerpApi and return the raw JSON response (local results, place ids, ratings)."
	}

	fn input_schema(&self) -> Value {
		serde_json::json!({
			"type": "object",
			"properties": {
				"query": {
					"type": "string",
					"description": "What to look for, e.g. \"Coffee\"."
				},
				"location": {
					"type": "string",
					"description": "Viewport as @latitude,longitude,zoom, e.g. \"@40.7455096,-74.0083012,14z\"."
				}
			},
			"required": ["query"]
		})
	}

	async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
		let args: MapsSearchArgs = parse_args(args)?;
		let query = non_empty("query", &args.query)?;
		tracing::debug!(query = %query, "serpapi_google_maps_search: invoking");
		Ok(self
			.client
			.maps_search(&query, args.location.as_deref())
			.await?)
	}
}

pub struct MapsReviewsTool {
	client: Arc<SerpApiClient>,
}

impl MapsReviewsTool {
	pub fn new(client: Arc<SerpApiClient>) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Tool for MapsReviewsTool {
	fn name(&self) -> &str {
		"serpapi_get_google_maps_reviews"
	}

	fn description(&self) -> &str {
		"Fetch Google Maps reviews for a place through SerpApi and return the raw JSON response."
	}

	fn input_schema(&self) -> Value {
		serde_json::json!({
			"type": "object",
			"properties": {
				"place_id": {
					"type": "string",
					"description": "Google Maps data id of the place (from a maps search result)."
				},
				"language": {
					"type": "string",
					"description": "Review language code (default: en)."
				}
			},
			"required": ["place_id"]
		})
	}

	async fn invoke(&self, args: Value) -> Result<Value, ToolError> {
		let args: MapsReviewsArgs = parse_args(args)?;
		let place_id = non_empty("place_id", &args.place_id)?;
		tracing::debug!(place_id = %place_id, "serpapi_get_google_maps_reviews: invoking");
		Ok(self
			.client
			.maps_reviews(&place_id, args.language.as_deref())
			.await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serpapi_credentials::StaticCredentialProvider;
	use serde_json::json;
	use wiremock::matchers::{method, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn client(base_url: &str) -> Arc<SerpApiClient> {
		Arc::new(
			SerpApiClient::new(Some(Arc::new(StaticCredentialProvider::api_key("k"))))
				.unwrap()
				.with_base_url(base_url),
		)
	}

	#[tokio::test]
	async fn search_tool_returns_text() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(query_param("q", "rust"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"organic_results": [{"title": "Rust", "link": "https://rust-lang.org"}]
			})))
			.mount(&server)
			.await;

		let tool = SearchTool::new(client(&server.uri()));
		let out = tool
			.invoke(json!({"params": {"q": "rust"}}))
			.await
			.unwrap();
		assert_eq!(
			out,
			json!("Title: Rust\nLink: https://rust-lang.org\nSnippet: No snippet\n")
		);
	}

	#[tokio::test]
	async fn search_tool_maps_authorization_failure() {
		let tool = SearchTool::new(Arc::new(SerpApiClient::new(None).unwrap()));
		let result = tool.invoke(Value::Null).await;
		assert!(matches!(result, Err(ToolError::NotAuthorized(_))));
	}

	#[tokio::test]
	async fn maps_search_tool_rejects_blank_query() {
		let tool = MapsSearchTool::new(client("http://127.0.0.1:1"));
		let result = tool.invoke(json!({"query": "  \t"})).await;
		assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
	}

	#[tokio::test]
	async fn maps_search_tool_requires_query() {
		let tool = MapsSearchTool::new(client("http://127.0.0.1:1"));
		let result = tool.invoke(json!({"location": "@1,2,3z"})).await;
		assert!(matches!(result, Err(ToolError::Serialization(_))));
	}

	#[tokio::test]
	async fn maps_reviews_tool_accepts_data_id_alias() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(query_param("data_id", "0x89c2"))
			.and(query_param("hl", "en"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({"reviews": [{"rating": 5}]})))
			.expect(1)
			.mount(&server)
			.await;

		let tool = MapsReviewsTool::new(client(&server.uri()));
		let out = tool.invoke(json!({"data_id": "0x89c2"})).await.unwrap();
		assert_eq!(out["reviews"][0]["rating"], 5);
	}

	#[tokio::test]
	async fn maps_reviews_tool_surfaces_http_errors() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(500).set_body_string("boom"))
			.mount(&server)
			.await;

		let tool = MapsReviewsTool::new(client(&server.uri()));
		match tool.invoke(json!({"place_id": "x"})).await {
			Err(ToolError::Upstream(msg)) => assert_eq!(msg, "HTTP Error: 500 - boom"),
			other => panic!("expected upstream error, got {other:?}"),
		}
	}
}
