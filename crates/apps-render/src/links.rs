// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use url::form_urlencoded;

use crate::detail::ExtensionDetail;

const DEFAULT_AJAX_BASE: &str = "index.php";
const DEFAULT_JED_BASE: &str = "https://extensions.joomla.org";

/// URL builders for links on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
	/// Entry point for in-component navigation.
	pub ajax_base: String,
	/// Public directory site.
	pub jed_base: String,
}

impl Default for Links {
	fn default() -> Self {
		Self {
			ajax_base: DEFAULT_AJAX_BASE.to_string(),
			jed_base: DEFAULT_JED_BASE.to_string(),
		}
	}
}

impl Links {
	pub fn new(ajax_base: impl Into<String>, jed_base: impl Into<String>) -> Self {
		Self {
			ajax_base: ajax_base.into(),
			jed_base: jed_base.into(),
		}
	}

	/// In-component URL with `option=com_apps` followed by `params` in order.
	pub fn ajax_url(&self, params: &[(&str, &str)]) -> String {
		let mut query = form_urlencoded::Serializer::new(String::new());
		query.append_pair("option", "com_apps");
		for (name, value) in params {
			query.append_pair(name, value);
		}
		format!("{}?{}", self.ajax_base, query.finish())
	}

	/// The extension's page on the public directory.
	///
	/// Uses the alias when present, otherwise the listing id.
	pub fn jed_url(&self, detail: &ExtensionDetail) -> String {
		let base = self.jed_base.trim_end_matches('/');
		let alias = detail.core_alias.value_str();
		if !alias.is_empty() {
			let alias: String = form_urlencoded::byte_serialize(alias.as_bytes()).collect();
			return format!("{base}/extension/{alias}/");
		}

		let mut query = form_urlencoded::Serializer::new(String::new());
		query.append_pair("option", "com_jed");
		query.append_pair("view", "extension");
		if let Some(id) = detail.link_id() {
			query.append_pair("id", &id);
		}
		format!("{base}/index.php?{}", query.finish())
	}
}
