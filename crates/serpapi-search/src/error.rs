// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the SerpApi adapter.

use thiserror::Error;

/// The caller must (re)authorize the integration before retrying.
///
/// Always propagated, never turned into a text result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthorizationError {
	message: String,
}

impl AuthorizationError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Errors returned by the Google Maps operations.
#[derive(Debug, Error)]
pub enum SerpApiError {
	#[error(transparent)]
	NotAuthorized(#[from] AuthorizationError),

	/// SerpApi answered with a non-2xx status.
	#[error("HTTP Error: {status} - {body}")]
	Http { status: u16, body: String },

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Body was not valid JSON.
	#[error("Invalid response from SerpApi: {0}")]
	InvalidResponse(String),
}

impl SerpApiError {
	pub fn is_authorization(&self) -> bool {
		matches!(self, SerpApiError::NotAuthorized(_))
	}
}
