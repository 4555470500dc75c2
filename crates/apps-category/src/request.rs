// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Inbound request parameters and component defaults.

use apps_jed_client::{CategoryQuery, OrderColumn, DEFAULT_LIMIT};
use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Component-level settings the listing falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentParams {
	pub default_limit: u32,
}

impl Default for ComponentParams {
	fn default() -> Self {
		Self {
			default_limit: DEFAULT_LIMIT,
		}
	}
}

/// The request parameters a category listing reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
	pub id: Option<i64>,
	pub limit: Option<u32>,
	pub limitstart: Option<u32>,
	pub ordering: Option<String>,
	pub filter_search: Option<String>,
}

impl RequestParams {
	/// Reads parameters from decoded query-string pairs. Later pairs win;
	/// integers that do not parse are ignored.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut params = Self::default();
		for (key, value) in pairs {
			let value = value.as_ref();
			match key.as_ref() {
				"id" => params.id = value.trim().parse().ok().or(params.id),
				"limit" => params.limit = value.trim().parse().ok().or(params.limit),
				"limitstart" => params.limitstart = value.trim().parse().ok().or(params.limitstart),
				"ordering" => params.ordering = Some(value.to_string()),
				"filter_search" => params.filter_search = Some(value.to_string()),
				_ => {}
			}
		}
		params
	}

	pub fn category_id(&self) -> i64 {
		self.id.unwrap_or(0)
	}

	pub fn limit(&self, component: &ComponentParams) -> u32 {
		self.limit.unwrap_or(component.default_limit)
	}

	pub fn limitstart(&self) -> u32 {
		self.limitstart.unwrap_or(0)
	}

	pub fn order(&self) -> OrderColumn {
		self.ordering
			.as_deref()
			.map(OrderColumn::from_param)
			.unwrap_or_default()
	}

	pub fn search_term(&self) -> Option<String> {
		self.filter_search.as_deref().and_then(normalize_search)
	}

	/// Builds the directory query for this request.
	pub fn to_query(&self, component: &ComponentParams) -> CategoryQuery {
		CategoryQuery::new(self.category_id())
			.with_limit(self.limit(component))
			.with_offset(self.limitstart())
			.with_order(self.order())
			.with_search(self.search_term())
	}
}

/// Cleans a raw search box value: trimmed, URL-decoded (`+` is a space) and
/// with underscores read as spaces. Empty input means no search.
pub fn normalize_search(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return None;
	}

	let plus_decoded = trimmed.replace('+', " ");
	let decoded = percent_decode_str(&plus_decoded).decode_utf8_lossy();
	let search = decoded.replace('_', " ");

	if search.trim().is_empty() {
		None
	} else {
		Some(search)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_when_absent() {
		let params = RequestParams::default();
		let query = params.to_query(&ComponentParams::default());
		assert_eq!(query.category_id, 0);
		assert_eq!(query.limit, 8);
		assert_eq!(query.offset, 0);
		assert_eq!(query.order, OrderColumn::Rating);
		assert!(query.search.is_none());
	}

	#[test]
	fn test_component_default_limit() {
		let params = RequestParams::default();
		let component = ComponentParams { default_limit: 24 };
		assert_eq!(params.to_query(&component).limit, 24);
	}

	#[test]
	fn test_from_pairs() {
		let params = RequestParams::from_pairs([
			("id", "17"),
			("limit", "12"),
			("limitstart", "24"),
			("ordering", "core_title"),
			("filter_search", "  page_builder  "),
			("unrelated", "x"),
		]);
		assert_eq!(params.id, Some(17));
		assert_eq!(params.limit, Some(12));
		assert_eq!(params.limitstart, Some(24));

		let query = params.to_query(&ComponentParams::default());
		assert_eq!(query.order, OrderColumn::Title);
		assert_eq!(query.search.as_deref(), Some("page builder"));
	}

	#[test]
	fn test_unparsable_integers_fall_back() {
		let params = RequestParams::from_pairs([("limit", "lots"), ("limitstart", "-5"), ("id", "")]);
		assert_eq!(params.limit, None);
		assert_eq!(params.limitstart, None);
		assert_eq!(params.category_id(), 0);
		assert_eq!(params.limit(&ComponentParams::default()), 8);
	}

	#[test]
	fn test_normalize_search() {
		assert_eq!(normalize_search("  seo  ").as_deref(), Some("seo"));
		assert_eq!(normalize_search("site%20map").as_deref(), Some("site map"));
		assert_eq!(normalize_search("site+map").as_deref(), Some("site map"));
		assert_eq!(normalize_search("site_map").as_deref(), Some("site map"));
		assert_eq!(normalize_search("caf%C3%A9").as_deref(), Some("café"));
		assert_eq!(normalize_search("   "), None);
		assert_eq!(normalize_search("___"), None);
		assert_eq!(normalize_search(""), None);
	}
}
