// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serpapi_search::{AuthorizationError, SerpApiError};

#[derive(Debug, thiserror::Error)]
pub enum ToolError {
	/// Hosts should start their re-authorization flow on this variant.
	#[error("not authorized: {0}")]
	NotAuthorized(String),

	#[error("invalid arguments: {0}")]
	InvalidArguments(String),

	#[error("serialization error: {0}")]
	Serialization(String),

	#[error("upstream error: {0}")]
	Upstream(String),
}

impl From<AuthorizationError> for ToolError {
	fn from(err: AuthorizationError) -> Self {
		ToolError::NotAuthorized(err.message().to_string())
	}
}

impl From<SerpApiError> for ToolError {
	fn from(err: SerpApiError) -> Self {
		match err {
			SerpApiError::NotAuthorized(auth) => auth.into(),
			other => ToolError::Upstream(other.to_string()),
		}
	}
}
