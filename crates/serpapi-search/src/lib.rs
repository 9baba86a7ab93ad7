// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! SerpApi search adapter.
//!
//! [`SerpApiClient`] resolves an API key once from a pluggable
//! [`CredentialProvider`](serpapi_credentials::CredentialProvider), then
//! exposes three operations:
//!
//! - [`SerpApiClient::search`]: general web search, rendered as text. Every
//!   failure except an authorization failure comes back as a descriptive
//!   string.
//! - [`SerpApiClient::maps_search`] and [`SerpApiClient::maps_reviews`]:
//!   Google Maps endpoints, returned as the raw JSON body. Non-2xx responses
//!   are errors.

pub mod classify;
pub mod client;
pub mod error;
pub mod format;
pub mod types;

pub use client::{SerpApiClient, DEFAULT_BASE_URL};
pub use error::{AuthorizationError, SerpApiError};
pub use types::{MapsReviewsRequest, MapsSearchRequest, QueryParams, API_KEY_ALIASES};
