// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote directory connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use apps_jed_client::DEFAULT_BASE_URL as DEFAULT_JED_BASE_URL;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JedConfigLayer {
	pub base_url: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl JedConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> JedConfig {
		JedConfig {
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_JED_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JedConfig {
	pub base_url: String,
	pub timeout_secs: u64,
}

impl JedConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

impl Default for JedConfig {
	fn default() -> Self {
		JedConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = JedConfig::default();
		assert_eq!(config.base_url, "https://extensions.joomla.org");
		assert_eq!(config.timeout(), Duration::from_secs(30));
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = JedConfigLayer {
			base_url: Some("https://a.example".to_string()),
			timeout_secs: Some(5),
		};
		base.merge(JedConfigLayer {
			base_url: None,
			timeout_secs: Some(10),
		});
		assert_eq!(base.base_url.as_deref(), Some("https://a.example"));
		assert_eq!(base.timeout_secs, Some(10));
	}
}
