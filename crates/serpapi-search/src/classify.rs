// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Failure classification for general search.
//!
//! SerpApi reports most problems as free text, so authorization failures
//! are recognised by keyword. Matching is case-insensitive substring search.
//! Each function returns `Ok(text)` for a soft error the caller shows as is,
//! or `Err` for an authorization failure.

use crate::error::AuthorizationError;

/// Keywords in an API `error` field that mean the key was rejected.
pub const API_ERROR_AUTH_KEYWORDS: &[&str] = &[
	"invalid api key",
	"authorization failed",
	"api key needed",
	"forbidden",
	"account disabled",
	"private api key is missing",
];

/// Keywords in a transport or decoding failure that mean the key was rejected.
pub const FAILURE_AUTH_KEYWORDS: &[&str] = &[
	"authentication",
	"api key",
	"unauthorized",
	"401",
	"forbidden",
	"invalid key",
];

pub const RATE_LIMITED_MESSAGE: &str =
	"Error: Rate limit exceeded (HTTP 429). Please try again later.";

pub const UNAUTHORIZED_MESSAGE: &str =
	"Error: Invalid API key (HTTP 401). Please check your SERPAPI_API_KEY.";

fn contains_any(message: &str, keywords: &[&str]) -> bool {
	let lower = message.to_lowercase();
	keywords.iter().any(|k| lower.contains(k))
}

pub fn is_auth_api_error(message: &str) -> bool {
	contains_any(message, API_ERROR_AUTH_KEYWORDS)
}

pub fn is_auth_failure(message: &str) -> bool {
	contains_any(message, FAILURE_AUTH_KEYWORDS)
}

/// Outcome for an `error` field in the response body.
pub fn api_error(message: &str) -> Result<String, AuthorizationError> {
	if is_auth_api_error(message) {
		return Err(AuthorizationError::new(format!("SerpApi Error: {message}")));
	}
	Ok(format!("SerpApi API Error: {message}"))
}

/// Outcome for a non-2xx status without an `error` field in the body.
pub fn http_status(status: u16, body: &str) -> Result<String, AuthorizationError> {
	match status {
		429 => Ok(RATE_LIMITED_MESSAGE.to_string()),
		401 => Err(AuthorizationError::new(UNAUTHORIZED_MESSAGE)),
		_ => Ok(format!("HTTP Error: {status} - {body}")),
	}
}

/// Outcome for any other failure (network, undecodable body).
pub fn unexpected(message: &str) -> Result<String, AuthorizationError> {
	if is_auth_failure(message) {
		return Err(AuthorizationError::new(format!(
			"SerpApi authentication/authorization failed: {message}"
		)));
	}
	Ok(format!("An unexpected error occurred during search: {message}"))
}
