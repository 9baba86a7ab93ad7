// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential error types.

/// Errors a credential provider can report.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
	/// The provider refused access; the operator has to (re)authorize.
	#[error("{0}")]
	NotAuthorized(String),

	#[error("Backend error: {0}")]
	Backend(String),

	#[error("{0}")]
	Other(String),
}

impl CredentialError {
	pub fn not_authorized(msg: impl Into<String>) -> Self {
		Self::NotAuthorized(msg.into())
	}
}
