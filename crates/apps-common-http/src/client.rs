// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use tracing::debug;

/// Creates a new HTTP client builder with the standard User-Agent header.
///
/// Use this when you need to customize the client further.
///
/// # Example
/// ```ignore
/// let client = apps_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and the given timeout.
pub fn client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	debug!(timeout_secs = timeout.as_secs(), "building HTTP client");
	builder().timeout(timeout).build()
}

/// Returns the standard User-Agent string.
///
/// Format: `apps/{version}`
pub fn user_agent() -> String {
	format!("apps/{}", env!("CARGO_PKG_VERSION"))
}
