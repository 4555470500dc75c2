// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Image URL resolution settings.

use serde::{Deserialize, Serialize};

use super::jed::DEFAULT_JED_BASE_URL;

const DEFAULT_PLACEHOLDER: &str =
	"https://extensions.joomla.org/components/com_jed/assets/img/jed-logo-placeholder.png";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfigLayer {
	pub cdn_base: Option<String>,
	pub placeholder: Option<String>,
}

impl ImagesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.cdn_base.is_some() {
			self.cdn_base = other.cdn_base;
		}
		if other.placeholder.is_some() {
			self.placeholder = other.placeholder;
		}
	}

	pub fn finalize(self) -> ImagesConfig {
		ImagesConfig {
			cdn_base: self
				.cdn_base
				.unwrap_or_else(|| DEFAULT_JED_BASE_URL.to_string()),
			placeholder: self
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagesConfig {
	pub cdn_base: String,
	pub placeholder: String,
}

impl Default for ImagesConfig {
	fn default() -> Self {
		ImagesConfigLayer::default().finalize()
	}
}
