// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the directory client.

use thiserror::Error;

/// Errors that can occur when talking to the extensions directory.
#[derive(Debug, Error)]
pub enum JedError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// The directory answered with something other than 200 OK.
	#[error("Unexpected response from the JED: HTTP {status}")]
	UpstreamStatus { status: u16 },

	/// The body was not the JSON document we expected.
	#[error("Unexpected response from the JED, JSON could not be decoded with error: {0}")]
	Decode(String),

	/// The configured base URL could not be turned into a query URL.
	#[error("Invalid directory URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

impl JedError {
	/// Numeric code attached to the error for log correlation.
	///
	/// Upstream failures carry the HTTP status, decode failures report 500.
	pub fn code(&self) -> u16 {
		match self {
			JedError::UpstreamStatus { status } => *status,
			JedError::Decode(_) => 500,
			JedError::Timeout => 504,
			JedError::Network(e) => e.status().map(|s| s.as_u16()).unwrap_or(502),
			JedError::InvalidUrl(_) => 400,
		}
	}
}
