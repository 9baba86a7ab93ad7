// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

pub mod app;
pub mod error;
pub mod registry;
pub mod serpapi;

pub use app::SerpApiApp;
pub use error::ToolError;
pub use registry::*;
pub use serpapi::{MapsReviewsTool, MapsSearchTool, SearchTool};
