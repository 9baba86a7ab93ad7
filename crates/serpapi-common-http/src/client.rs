// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Request timeout applied when callers don't pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates a client builder carrying the standard User-Agent header.
///
/// Use this when you need to customize the client further.
///
/// # Example
/// ```ignore
/// let client = serpapi_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and the given timeout.
pub fn client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	tracing::debug!(timeout_ms = timeout.as_millis() as u64, "building http client");
	builder().timeout(timeout).build()
}

/// Returns the User-Agent string sent with every request.
///
/// Format: `serpapi-tools/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"serpapi-tools/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("serpapi-tools/"));
		assert!(ua.contains(std::env::consts::OS));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn client_builds_with_custom_timeout() {
		let client = client_with_timeout(Duration::from_millis(250));
		assert!(client.is_ok());
	}

	#[test]
	fn default_timeout_is_thirty_seconds() {
		assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
	}
}
