// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pluggable credential providers for the SerpApi tool crates.
//!
//! The search adapter never reads keys directly. It asks a
//! [`CredentialProvider`] for a [`Credentials`] map and, when the key is
//! missing, for an optional [`AuthorizationHint`] telling the operator how
//! to fix it.
//!
//! # Example
//!
//! ```rust
//! use serpapi_credentials::{CredentialProvider, Credentials, StaticCredentialProvider};
//!
//! # tokio_test::block_on(async {
//! let provider = StaticCredentialProvider::new(Credentials::from_pairs([("api_key", "secret")]));
//! let creds = provider.get_credentials().await.unwrap();
//! assert_eq!(creds.get("api_key").unwrap().expose(), "secret");
//! # });
//! ```

mod error;
mod provider;
mod secret;
mod value;

pub use error::CredentialError;
pub use provider::{
	CredentialProvider, EnvCredentialProvider, StaticCredentialProvider, DEFAULT_ENV_VARS,
};
pub use secret::{Secret, SecretString, REDACTED};
pub use value::{AuthorizationHint, Credentials};
