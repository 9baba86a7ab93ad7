// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entry point the host framework uses to discover the SerpApi tools.

use std::sync::Arc;

use serpapi_credentials::CredentialProvider;
use serpapi_search::{SerpApiClient, SerpApiError};

use crate::{MapsReviewsTool, MapsSearchTool, SearchTool, Tool, ToolRegistry};

pub const APP_NAME: &str = "serpapi";

/// The SerpApi integration: one shared client behind three tools.
///
/// All tools share the client, so the API key is resolved once per app.
pub struct SerpApiApp {
	client: Arc<SerpApiClient>,
}

impl SerpApiApp {
	pub fn new(provider: Option<Arc<dyn CredentialProvider>>) -> Result<Self, SerpApiError> {
		Ok(Self::from_client(SerpApiClient::new(provider)?))
	}

	pub fn from_client(client: SerpApiClient) -> Self {
		Self {
			client: Arc::new(client),
		}
	}

	pub fn name(&self) -> &str {
		APP_NAME
	}

	pub fn client(&self) -> &Arc<SerpApiClient> {
		&self.client
	}

	pub fn list_tools(&self) -> Vec<Box<dyn Tool>> {
		vec![
			Box::new(SearchTool::new(Arc::clone(&self.client))),
			Box::new(MapsSearchTool::new(Arc::clone(&self.client))),
			Box::new(MapsReviewsTool::new(Arc::clone(&self.client))),
		]
	}

	pub fn registry(&self) -> ToolRegistry {
		self.list_tools().into_iter().collect()
	}
}
