// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Query construction for the SerpApi endpoints.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Query string sent to SerpApi, ordered for stable logs and tests.
pub type QueryParams = BTreeMap<String, String>;

/// Credential keys accepted for the API key, checked in order.
pub const API_KEY_ALIASES: &[&str] = &["api_key", "API_KEY", "apiKey"];

pub const DEFAULT_SEARCH_ENGINE: &str = "google_light";
pub const MAPS_ENGINE: &str = "google_maps";
pub const MAPS_REVIEWS_ENGINE: &str = "google_maps_reviews";
pub const DEFAULT_REVIEWS_LANGUAGE: &str = "en";

/// Renders a caller-supplied JSON value as a query parameter.
///
/// `null` drops the parameter.
pub fn param_value(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		other => Some(other.to_string()),
	}
}

/// Query for general search. Caller parameters override every default,
/// including `engine` and `api_key`.
pub fn search_query(api_key: &str, params: Option<&Map<String, Value>>) -> QueryParams {
	let mut query = QueryParams::new();
	query.insert("api_key".to_string(), api_key.to_string());
	query.insert("engine".to_string(), DEFAULT_SEARCH_ENGINE.to_string());
	query.insert("output".to_string(), "json".to_string());

	for (key, value) in params.into_iter().flatten() {
		match param_value(value) {
			Some(v) => {
				query.insert(key.clone(), v);
			}
			None => {
				query.remove(key);
			}
		}
	}
	query
}

/// Google Maps search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsSearchRequest {
	pub query: String,
	/// `@lat,lng,zoom` viewport, sent as `ll`.
	pub location: Option<String>,
}

impl MapsSearchRequest {
	pub fn new(query: impl Into<String>, location: Option<&str>) -> Self {
		Self {
			query: query.into(),
			location: location.map(str::to_string),
		}
	}

	pub fn to_query(&self, api_key: &str) -> QueryParams {
		let mut query = QueryParams::new();
		query.insert("engine".to_string(), MAPS_ENGINE.to_string());
		query.insert("q".to_string(), self.query.clone());
		query.insert("type".to_string(), "search".to_string());
		query.insert("api_key".to_string(), api_key.to_string());
		if let Some(ll) = &self.location {
			query.insert("ll".to_string(), ll.clone());
		}
		query
	}
}

/// Google Maps reviews parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsReviewsRequest {
	/// Place identifier, sent as `data_id`.
	pub place_id: String,
	/// Review language, sent as `hl`.
	pub language: String,
}

impl MapsReviewsRequest {
	pub fn new(place_id: impl Into<String>, language: Option<&str>) -> Self {
		Self {
			place_id: place_id.into(),
			language: language.unwrap_or(DEFAULT_REVIEWS_LANGUAGE).to_string(),
		}
	}

	pub fn to_query(&self, api_key: &str) -> QueryParams {
		let mut query = QueryParams::new();
		query.insert("engine".to_string(), MAPS_REVIEWS_ENGINE.to_string());
		query.insert("data_id".to_string(), self.place_id.clone());
		query.insert("hl".to_string(), self.language.clone());
		query.insert("api_key".to_string(), api_key.to_string());
		query
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn obj(value: Value) -> Map<String, Value> {
		value.as_object().cloned().unwrap()
	}

	#[test]
	fn search_query_defaults() {
		let query = search_query("k", None);
		assert_eq!(query["api_key"], "k");
		assert_eq!(query["engine"], "google_light");
		assert_eq!(query["output"], "json");
	}

	#[test]
	fn search_query_caller_overrides_engine() {
		let params = obj(json!({"q": "Coffee", "engine": "google", "location": "Austin, TX", "num": 5}));
		let query = search_query("k", Some(&params));
		assert_eq!(query["engine"], "google");
		assert_eq!(query["q"], "Coffee");
		assert_eq!(query["location"], "Austin, TX");
		assert_eq!(query["num"], "5");
	}

	#[test]
	fn search_query_null_drops_parameter() {
		let params = obj(json!({"output": null, "safe": true}));
		let query = search_query("k", Some(&params));
		assert!(!query.contains_key("output"));
		assert_eq!(query["safe"], "true");
	}

	#[test]
	fn maps_search_query() {
		let query = MapsSearchRequest::new("Coffee", Some("@40.7,-74.0,14z")).to_query("resolved");
		assert_eq!(query["engine"], "google_maps");
		assert_eq!(query["q"], "Coffee");
		assert_eq!(query["ll"], "@40.7,-74.0,14z");
		assert_eq!(query["api_key"], "resolved");
		assert_eq!(query["type"], "search");
	}

	#[test]
	fn maps_search_without_location_omits_ll() {
		let query = MapsSearchRequest::new("Coffee", None).to_query("k");
		assert!(!query.contains_key("ll"));
	}

	#[test]
	fn maps_reviews_defaults_language() {
		let query = MapsReviewsRequest::new("id123", None).to_query("k");
		assert_eq!(query["hl"], "en");
		assert_eq!(query["data_id"], "id123");
		assert_eq!(query["engine"], "google_maps_reviews");
	}

	#[test]
	fn maps_reviews_custom_language() {
		let query = MapsReviewsRequest::new("id123", Some("de")).to_query("k");
		assert_eq!(query["hl"], "de");
	}

	proptest! {
		/// The maps engine can't be overridden by the request contents.
		#[test]
		fn maps_engine_is_fixed(q in "\\PC*", ll in proptest::option::of("[@0-9.,z-]{1,20}")) {
			let query = MapsSearchRequest::new(q.clone(), ll.as_deref()).to_query("k");
			prop_assert_eq!(&query["engine"], MAPS_ENGINE);
			prop_assert_eq!(&query["q"], &q);
		}

		#[test]
		fn string_params_pass_through(key in "[a-z_]{1,10}", value in "\\PC*") {
			let mut params = Map::new();
			params.insert(key.clone(), Value::String(value.clone()));
			let query = search_query("k", Some(&params));
			prop_assert_eq!(&query[&key], &value);
		}
	}
}
