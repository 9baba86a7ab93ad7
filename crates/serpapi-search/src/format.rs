// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Text rendering of general search responses.

use serde_json::Value;
use tracing::{debug, error};

use crate::classify;
use crate::error::AuthorizationError;

pub const NO_ORGANIC_RESULTS: &str = "No organic results found.";

// A `null` field reads as absent.
fn field_or(entry: &Value, field: &str, default: &str) -> String {
	match entry.get(field) {
		None | Some(Value::Null) => default.to_string(),
		Some(Value::String(s)) => s.clone(),
		Some(other) => other.to_string(),
	}
}

/// Formats one organic result as `Title/Link/Snippet` lines.
pub fn organic_entry(entry: &Value) -> String {
	format!(
		"Title: {}\nLink: {}\nSnippet: {}\n",
		field_or(entry, "title", "No title"),
		field_or(entry, "link", "No link"),
		field_or(entry, "snippet", "No snippet"),
	)
}

/// Joins formatted entries with blank lines between them.
pub fn organic_results(results: &[Value]) -> String {
	if results.is_empty() {
		return NO_ORGANIC_RESULTS.to_string();
	}
	results
		.iter()
		.map(organic_entry)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Interprets a decoded search body: `error` field first, then
/// `organic_results`.
pub fn search_response(body: &Value) -> Result<String, AuthorizationError> {
	if let Some(err) = body.get("error") {
		let message = match err {
			Value::String(s) => s.clone(),
			other => other.to_string(),
		};
		error!(error = %message, "SerpApi API returned an error");
		return classify::api_error(&message);
	}

	match body.get("organic_results").and_then(Value::as_array) {
		Some(results) => {
			debug!(result_count = results.len(), "search completed");
			Ok(organic_results(results))
		}
		None => Ok(NO_ORGANIC_RESULTS.to_string()),
	}
}

/// Interprets a non-2xx search response.
///
/// 429 and 401 are decided by status alone. Other statuses whose body
/// carries an `error` field are reported like a 200 with that field.
pub fn search_failure(status: u16, body: &str) -> Result<String, AuthorizationError> {
	if status != 429 && status != 401 {
		if let Ok(parsed) = serde_json::from_str::<Value>(body) {
			if parsed.get("error").is_some() {
				return search_response(&parsed);
			}
		}
	}
	classify::http_status(status, body)
}
