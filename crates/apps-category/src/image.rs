// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Image URL resolution for listed extensions.

use apps_jed_client::ExtensionItem;
use serde_json::Value;

/// Picks the image shown next to an extension in listings.
pub trait ImageResolver: Send + Sync {
	fn resolve(&self, item: &ExtensionItem) -> String;
}

/// Uses the item's `logo`, else its first `images` entry, else a placeholder.
/// Relative paths are served from `cdn_base`.
#[derive(Debug, Clone)]
pub struct LogoImageResolver {
	cdn_base: String,
	placeholder: String,
}

impl LogoImageResolver {
	pub fn new(cdn_base: impl Into<String>, placeholder: impl Into<String>) -> Self {
		Self {
			cdn_base: cdn_base.into(),
			placeholder: placeholder.into(),
		}
	}

	fn candidate(item: &ExtensionItem) -> Option<String> {
		if let Some(logo) = item.field_value("logo").filter(|s| !s.trim().is_empty()) {
			return Some(logo);
		}

		let first = item.fields.get("images")?.as_array()?.first()?;
		let path = match first {
			Value::String(s) => s.clone(),
			Value::Object(obj) => obj
				.get("value")
				.or_else(|| obj.get("src"))
				.and_then(Value::as_str)?
				.to_string(),
			_ => return None,
		};
		Some(path).filter(|s| !s.trim().is_empty())
	}

	fn absolutize(&self, path: &str) -> String {
		let path = path.trim();
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_string();
		}
		if let Some(rest) = path.strip_prefix("//") {
			return format!("https://{rest}");
		}
		format!(
			"{}/{}",
			self.cdn_base.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}
}

impl ImageResolver for LogoImageResolver {
	fn resolve(&self, item: &ExtensionItem) -> String {
		match Self::candidate(item) {
			Some(path) => self.absolutize(&path),
			None => self.placeholder.clone(),
		}
	}
}
