// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Category listing defaults.

use serde::{Deserialize, Serialize};

pub use apps_jed_client::DEFAULT_LIMIT;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingConfigLayer {
	pub default_limit: Option<u32>,
}

impl ListingConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_limit.is_some() {
			self.default_limit = other.default_limit;
		}
	}

	pub fn finalize(self) -> ListingConfig {
		ListingConfig {
			default_limit: self.default_limit.unwrap_or(DEFAULT_LIMIT),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
	pub default_limit: u32,
}

impl Default for ListingConfig {
	fn default() -> Self {
		Self {
			default_limit: DEFAULT_LIMIT,
		}
	}
}
