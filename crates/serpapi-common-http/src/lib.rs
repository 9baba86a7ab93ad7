// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the SerpApi tool crates.
//!
//! Every outbound request goes through a client built here so the
//! User-Agent and timeout policy stay consistent across crates.

mod client;

pub use client::{builder, client_with_timeout, user_agent, DEFAULT_TIMEOUT};
