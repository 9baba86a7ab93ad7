// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use serpapi_search::SerpApiClient;
use serpapi_tools::{SerpApiApp, ToolError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Args;

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();

	let default_level = if args.verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(std::io::stderr)
		.init();

	match run(args).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => match e.downcast_ref::<ToolError>() {
			Some(ToolError::NotAuthorized(msg)) => {
				error!("SerpApi authorization failed: {msg}");
				ExitCode::from(2)
			}
			_ => {
				error!("{e:#}");
				ExitCode::from(1)
			}
		},
	}
}

async fn run(args: Args) -> anyhow::Result<()> {
	let http_client = serpapi_common_http::client_with_timeout(args.timeout())
		.context("failed to build HTTP client")?;
	let client = SerpApiClient::with_http_client(Some(args.provider()), http_client)
		.with_base_url(args.base_url.clone());
	let app = SerpApiApp::from_client(client);
	let registry = app.registry();

	let Some((tool, call)) = args.command.tool_call() else {
		let definitions = registry.definitions();
		println!("{}", serde_json::to_string_pretty(&definitions)?);
		return Ok(());
	};

	info!(tool, base_url = %args.base_url, "running SerpApi tool");
	let output = registry.invoke(tool, call).await?;
	match output {
		Value::String(text) => println!("{text}"),
		other => println!("{}", serde_json::to_string_pretty(&other)?),
	}
	Ok(())
}
