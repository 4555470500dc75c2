// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for category listings.

use apps_jed_client::JedError;
use thiserror::Error;

/// Failures of the cache layer. These are always recovered from.
#[derive(Debug, Error)]
pub enum CacheError {
	#[error("cache I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("cache entry could not be (de)serialized: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("cache unavailable: {0}")]
	Unavailable(String),
}

/// The one error callers of [`crate::CategoryModel`] see.
///
/// The message never includes upstream detail; the underlying error stays
/// reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum CategoryError {
	#[error("Could not retrieve category extension data from the JED.")]
	Unavailable {
		code: u16,
		#[source]
		source: JedError,
	},
}

impl CategoryError {
	pub fn code(&self) -> u16 {
		match self {
			CategoryError::Unavailable { code, .. } => *code,
		}
	}
}

impl From<JedError> for CategoryError {
	fn from(source: JedError) -> Self {
		CategoryError::Unavailable {
			code: source.code(),
			source,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn test_unavailable_hides_upstream_detail() {
		let err = CategoryError::from(JedError::Decode("line 1 column 1 <html>".to_string()));
		let message = err.to_string();
		assert_eq!(message, "Could not retrieve category extension data from the JED.");
		assert!(!message.contains("<html>"));
		assert_eq!(err.code(), 500);

		let source = err.source().expect("source is kept");
		assert!(source.to_string().contains("<html>"));
	}
}
