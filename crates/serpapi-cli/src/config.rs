// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use serpapi_credentials::{CredentialProvider, EnvCredentialProvider, StaticCredentialProvider};
use serpapi_search::DEFAULT_BASE_URL;

/// Query SerpApi web search, Google Maps search and Google Maps reviews
#[derive(Parser, Debug)]
#[command(name = "serpapi", version)]
pub struct Args {
	/// SerpApi private API key (or set SERPAPI_API_KEY)
	#[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
	pub api_key: Option<String>,

	/// API base URL
	#[arg(long, env = "SERPAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub base_url: String,

	/// Request timeout in seconds
	#[arg(long, env = "SERPAPI_TIMEOUT_SECS", default_value_t = 30)]
	pub timeout_secs: u64,

	/// Debug logging (overridden by RUST_LOG)
	#[arg(short, long)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Web search, printed as title/link/snippet text
	Search {
		query: String,

		/// Location to search from, e.g. "Austin, Texas"
		#[arg(long)]
		location: Option<String>,

		/// SerpApi engine (default: google_light)
		#[arg(long)]
		engine: Option<String>,

		/// Extra query parameter as key=value; repeatable
		#[arg(long = "param", value_parser = parse_key_val)]
		params: Vec<(String, String)>,
	},

	/// Google Maps search, printed as JSON
	Maps {
		query: String,

		/// Viewport as @lat,lng,zoom
		#[arg(long)]
		ll: Option<String>,
	},

	/// Google Maps reviews for a place, printed as JSON
	Reviews {
		place_id: String,

		/// Review language
		#[arg(long)]
		hl: Option<String>,
	},

	/// Print the tool definitions exposed to agent hosts
	Tools,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
	let (key, value) = s
		.split_once('=')
		.ok_or_else(|| format!("expected key=value, got `{s}`"))?;
	if key.is_empty() {
		return Err(format!("empty key in `{s}`"));
	}
	Ok((key.to_string(), value.to_string()))
}

impl Args {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// An explicit key wins; otherwise the key is read from the environment.
	pub fn provider(&self) -> Arc<dyn CredentialProvider> {
		match self.api_key.as_deref().map(str::trim) {
			Some(key) if !key.is_empty() => Arc::new(StaticCredentialProvider::api_key(key)),
			_ => Arc::new(EnvCredentialProvider::new()),
		}
	}
}

impl Command {
	/// Tool name and arguments this subcommand maps to.
	pub fn tool_call(&self) -> Option<(&'static str, Value)> {
		match self {
			Command::Search {
				query,
				location,
				engine,
				params,
			} => {
				let mut map = Map::new();
				map.insert("q".to_string(), Value::String(query.clone()));
				if let Some(location) = location {
					map.insert("location".to_string(), Value::String(location.clone()));
				}
				if let Some(engine) = engine {
					map.insert("engine".to_string(), Value::String(engine.clone()));
				}
				for (key, value) in params {
					map.insert(key.clone(), Value::String(value.clone()));
				}
				Some(("serpapi_search", json!({ "params": map })))
			}
			Command::Maps { query, ll } => Some((
				"serpapi_google_maps_search",
				json!({ "query": query, "location": ll }),
			)),
			Command::Reviews { place_id, hl } => Some((
				"serpapi_get_google_maps_reviews",
				json!({ "place_id": place_id, "language": hl }),
			)),
			Command::Tools => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn search_builds_params() {
		let args = Args::try_parse_from([
			"serpapi",
			"--api-key",
			"k",
			"search",
			"Coffee",
			"--location",
			"Austin, TX",
			"--param",
			"num=5",
		])
		.unwrap();

		let (tool, call) = args.command.tool_call().unwrap();
		assert_eq!(tool, "serpapi_search");
		assert_eq!(
			call,
			json!({"params": {"q": "Coffee", "location": "Austin, TX", "num": "5"}})
		);
	}

	#[test]
	fn reviews_without_language_sends_null() {
		let args = Args::try_parse_from(["serpapi", "reviews", "id123"]).unwrap();
		let (tool, call) = args.command.tool_call().unwrap();
		assert_eq!(tool, "serpapi_get_google_maps_reviews");
		assert_eq!(call, json!({"place_id": "id123", "language": null}));
	}

	#[test]
	fn param_requires_equals() {
		assert!(parse_key_val("novalue").is_err());
		assert!(parse_key_val("=x").is_err());
		assert_eq!(
			parse_key_val("hl=en=US").unwrap(),
			("hl".to_string(), "en=US".to_string())
		);
	}

	#[test]
	fn defaults() {
		let args = Args::try_parse_from(["serpapi", "tools"]).unwrap();
		assert_eq!(args.timeout(), Duration::from_secs(30));
		assert!(args.command.tool_call().is_none());
	}
}
