// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Credential value types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::secret::SecretString;

/// Credential mapping returned by a provider.
///
/// Keys are provider specific (`api_key`, `API_KEY`, ...); values are always
/// wrapped so the map can be logged safely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
	values: HashMap<String, SecretString>,
}

impl Credentials {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let values = pairs
			.into_iter()
			.map(|(k, v)| (k.into(), SecretString::new(v.into())))
			.collect();
		Self { values }
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.values.insert(key.into(), SecretString::new(value.into()));
	}

	pub fn get(&self, key: &str) -> Option<&SecretString> {
		self.values.get(key)
	}

	/// Returns the first non-empty value among `keys`, in order.
	pub fn first_of(&self, keys: &[&str]) -> Option<&SecretString> {
		keys
			.iter()
			.filter_map(|k| self.values.get(*k))
			.find(|v| !v.is_empty())
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Remediation hint a provider offers when no usable key is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AuthorizationHint {
	/// Free-form text shown to the operator as is.
	Text(String),
	/// A page where the operator can authorize the integration.
	Url(String),
	/// A structured message from the provider.
	Message(String),
}

impl AuthorizationHint {
	/// Renders the hint as the operator-facing message.
	pub fn to_message(&self) -> String {
		match self {
			AuthorizationHint::Text(text) => text.clone(),
			AuthorizationHint::Url(url) => format!("Please authorize via: {url}"),
			AuthorizationHint::Message(message) => message.clone(),
		}
	}
}
