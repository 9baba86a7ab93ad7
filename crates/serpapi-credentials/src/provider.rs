// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential provider trait and the built-in providers.

use async_trait::async_trait;
use tracing::debug;

use crate::error::CredentialError;
use crate::value::{AuthorizationHint, Credentials};

/// Source of credentials for an integration.
///
/// Hosts plug their own backend in here (vault, keyring, OAuth broker...).
#[async_trait]
pub trait CredentialProvider: Send + Sync + std::fmt::Debug {
	/// Short name used in logs.
	fn name(&self) -> &str;

	/// Fetch the current credential mapping.
	///
	/// Return [`CredentialError::NotAuthorized`] when the integration has not
	/// been authorized; any other error is treated as a backend failure.
	async fn get_credentials(&self) -> Result<Credentials, CredentialError>;

	/// Optional remediation hint shown when no usable key is found.
	async fn authorize(&self) -> Result<Option<AuthorizationHint>, CredentialError> {
		Ok(None)
	}
}

/// Provider backed by a fixed, in-memory credential map.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialProvider {
	credentials: Credentials,
	hint: Option<AuthorizationHint>,
}

impl StaticCredentialProvider {
	pub fn new(credentials: Credentials) -> Self {
		Self {
			credentials,
			hint: None,
		}
	}

	/// Provider holding a single `api_key` entry.
	pub fn api_key(key: impl Into<String>) -> Self {
		Self::new(Credentials::from_pairs([("api_key", key.into())]))
	}

	pub fn with_hint(mut self, hint: AuthorizationHint) -> Self {
		self.hint = Some(hint);
		self
	}
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
	fn name(&self) -> &str {
		"static"
	}

	async fn get_credentials(&self) -> Result<Credentials, CredentialError> {
		Ok(self.credentials.clone())
	}

	async fn authorize(&self) -> Result<Option<AuthorizationHint>, CredentialError> {
		Ok(self.hint.clone())
	}
}

/// Environment variables checked by [`EnvCredentialProvider::new`], in order.
pub const DEFAULT_ENV_VARS: &[&str] = &["SERPAPI_API_KEY", "SERP_API_KEY"];

/// Provider reading the API key from environment variables.
///
/// The first non-empty variable is returned under `api_key`. Nothing set
/// yields an empty map so the caller can surface [`CredentialProvider::authorize`].
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
	vars: Vec<String>,
}

impl EnvCredentialProvider {
	pub fn new() -> Self {
		Self::with_vars(DEFAULT_ENV_VARS.iter().copied())
	}

	pub fn with_vars<I, S>(vars: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			vars: vars.into_iter().map(Into::into).collect(),
		}
	}
}

impl Default for EnvCredentialProvider {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
	fn name(&self) -> &str {
		"env"
	}

	async fn get_credentials(&self) -> Result<Credentials, CredentialError> {
		let mut creds = Credentials::new();
		for var in &self.vars {
			match std::env::var(var) {
				Ok(value) if !value.trim().is_empty() => {
					debug!(var = %var, "loaded api key from environment");
					creds.insert("api_key", value.trim());
					break;
				}
				_ => continue,
			}
		}
		Ok(creds)
	}

	async fn authorize(&self) -> Result<Option<AuthorizationHint>, CredentialError> {
		let var = self
			.vars
			.first()
			.map(String::as_str)
			.unwrap_or("SERPAPI_API_KEY");
		Ok(Some(AuthorizationHint::Message(format!(
			"SerpApi API key is missing. Set {var} to the private key from https://serpapi.com/manage-api-key"
		))))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn static_provider_returns_its_map() {
		let provider = StaticCredentialProvider::api_key("abc");
		let creds = provider.get_credentials().await.unwrap();
		assert_eq!(creds.get("api_key").unwrap().expose(), "abc");
		assert!(provider.authorize().await.unwrap().is_none());
	}

	#[tokio::test]
	async fn static_provider_hint() {
		let provider = StaticCredentialProvider::default()
			.with_hint(AuthorizationHint::Url("https://example.com/auth".into()));
		assert_eq!(
			provider.authorize().await.unwrap(),
			Some(AuthorizationHint::Url("https://example.com/auth".into()))
		);
	}

	#[tokio::test]
	async fn env_provider_reads_first_set_variable() {
		std::env::set_var("SERPAPI_CRED_TEST_SECOND", "from-second");
		std::env::remove_var("SERPAPI_CRED_TEST_FIRST");
		let provider =
			EnvCredentialProvider::with_vars(["SERPAPI_CRED_TEST_FIRST", "SERPAPI_CRED_TEST_SECOND"]);

		let creds = provider.get_credentials().await.unwrap();
		assert_eq!(creds.get("api_key").unwrap().expose(), "from-second");
		std::env::remove_var("SERPAPI_CRED_TEST_SECOND");
	}

	#[tokio::test]
	async fn env_provider_empty_when_unset() {
		std::env::remove_var("SERPAPI_CRED_TEST_UNSET");
		let provider = EnvCredentialProvider::with_vars(["SERPAPI_CRED_TEST_UNSET"]);

		let creds = provider.get_credentials().await.unwrap();
		assert!(creds.is_empty());

		let hint = provider.authorize().await.unwrap().unwrap();
		assert!(hint.to_message().contains("SERPAPI_CRED_TEST_UNSET"));
	}
}
