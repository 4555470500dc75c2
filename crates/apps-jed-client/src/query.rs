// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Category search query and its URL form.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::JedError;

pub const DEFAULT_BASE_URL: &str = "https://extensions.joomla.org";
const SEARCH_PATH: &str = "/index.php";
/// Page size used when neither the request nor the component says otherwise.
pub const DEFAULT_LIMIT: u32 = 8;

/// Column the directory sorts results by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderColumn {
	Title,
	#[default]
	Rating,
}

impl OrderColumn {
	/// Name of the column as the directory expects it in `order`.
	pub fn as_str(self) -> &'static str {
		match self {
			OrderColumn::Title => "core_title",
			OrderColumn::Rating => "t2.link_rating",
		}
	}

	/// Parses a request `ordering` value. Anything that is not the title
	/// column sorts by rating.
	pub fn from_param(value: &str) -> Self {
		match value.trim() {
			"core_title" | "title" => OrderColumn::Title,
			_ => OrderColumn::Rating,
		}
	}

	/// Titles sort alphabetically, everything else best-first.
	pub fn direction(self) -> OrderDirection {
		match self {
			OrderColumn::Title => OrderDirection::Asc,
			OrderColumn::Rating => OrderDirection::Desc,
		}
	}
}

impl fmt::Display for OrderColumn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDirection {
	#[serde(rename = "ASC")]
	Asc,
	#[serde(rename = "DESC")]
	Desc,
}

impl OrderDirection {
	pub fn as_str(self) -> &'static str {
		match self {
			OrderDirection::Asc => "ASC",
			OrderDirection::Desc => "DESC",
		}
	}
}

impl fmt::Display for OrderDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single page of a category listing.
///
/// The sort direction is not stored: it always follows from the column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryQuery {
	pub category_id: i64,
	pub limit: u32,
	pub offset: u32,
	pub order: OrderColumn,
	pub search: Option<String>,
}

impl CategoryQuery {
	pub fn new(category_id: i64) -> Self {
		Self {
			category_id,
			limit: DEFAULT_LIMIT,
			offset: 0,
			order: OrderColumn::default(),
			search: None,
		}
	}

	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;
		self
	}

	pub fn with_offset(mut self, offset: u32) -> Self {
		self.offset = offset;
		self
	}

	pub fn with_order(mut self, order: OrderColumn) -> Self {
		self.order = order;
		self
	}

	/// Sets the free-text search. Blank input clears it.
	pub fn with_search(mut self, search: Option<impl Into<String>>) -> Self {
		self.search = search.map(Into::into).filter(|s| !s.trim().is_empty());
		self
	}

	pub fn direction(&self) -> OrderDirection {
		self.order.direction()
	}

	pub fn has_search(&self) -> bool {
		self.search.is_some()
	}

	/// Builds the search endpoint URL for this query against `base_url`.
	///
	/// Parameters are always emitted in the same order, so equal queries
	/// produce byte-identical URLs.
	pub fn to_url(&self, base_url: &str) -> Result<Url, JedError> {
		let mut url = Url::parse(base_url)?;
		url.set_path(SEARCH_PATH);
		url.set_fragment(None);

		{
			let mut pairs = url.query_pairs_mut();
			pairs
				.clear()
				.append_pair("option", "com_jed")
				.append_pair("controller", "filter")
				.append_pair("view", "extension")
				.append_pair("format", "json")
				.append_pair("limit", &self.limit.to_string())
				.append_pair("limitstart", &self.offset.to_string())
				.append_pair("filter[approved]", "1")
				.append_pair("filter[published]", "1")
				.append_pair("filter[core_catid]", &self.category_id.to_string())
				.append_pair("extend", "0")
				.append_pair("order", self.order.as_str())
				.append_pair("dir", self.direction().as_str());

			if let Some(search) = &self.search {
				pairs.append_pair("searchall", search);
			}
		}

		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn param(url: &Url, key: &str) -> Option<String> {
		url.query_pairs()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.into_owned())
	}

	#[test]
	fn test_defaults() {
		let query = CategoryQuery::new(12);
		assert_eq!(query.limit, 8);
		assert_eq!(query.offset, 0);
		assert_eq!(query.order, OrderColumn::Rating);
		assert_eq!(query.direction(), OrderDirection::Desc);
		assert!(!query.has_search());
	}

	#[test]
	fn test_direction_follows_column() {
		assert_eq!(OrderColumn::Title.direction(), OrderDirection::Asc);
		assert_eq!(OrderColumn::Rating.direction(), OrderDirection::Desc);
	}

	#[test]
	fn test_from_param() {
		assert_eq!(OrderColumn::from_param("core_title"), OrderColumn::Title);
		assert_eq!(OrderColumn::from_param("t2.link_rating"), OrderColumn::Rating);
		assert_eq!(OrderColumn::from_param("num_reviews"), OrderColumn::Rating);
		assert_eq!(OrderColumn::from_param(""), OrderColumn::Rating);
	}

	#[test]
	fn test_blank_search_is_cleared() {
		let query = CategoryQuery::new(1).with_search(Some("   "));
		assert!(query.search.is_none());
		let query = CategoryQuery::new(1).with_search(None::<String>);
		assert!(query.search.is_none());
	}

	#[test]
	fn test_url_parameters() {
		let url = CategoryQuery::new(42)
			.with_limit(20)
			.with_offset(40)
			.with_order(OrderColumn::Title)
			.with_search(Some("page builder"))
			.to_url(DEFAULT_BASE_URL)
			.unwrap();

		assert_eq!(url.scheme(), "https");
		assert_eq!(url.host_str(), Some("extensions.joomla.org"));
		assert_eq!(url.path(), "/index.php");
		assert_eq!(param(&url, "option").as_deref(), Some("com_jed"));
		assert_eq!(param(&url, "controller").as_deref(), Some("filter"));
		assert_eq!(param(&url, "view").as_deref(), Some("extension"));
		assert_eq!(param(&url, "format").as_deref(), Some("json"));
		assert_eq!(param(&url, "limit").as_deref(), Some("20"));
		assert_eq!(param(&url, "limitstart").as_deref(), Some("40"));
		assert_eq!(param(&url, "filter[approved]").as_deref(), Some("1"));
		assert_eq!(param(&url, "filter[published]").as_deref(), Some("1"));
		assert_eq!(param(&url, "filter[core_catid]").as_deref(), Some("42"));
		assert_eq!(param(&url, "extend").as_deref(), Some("0"));
		assert_eq!(param(&url, "order").as_deref(), Some("core_title"));
		assert_eq!(param(&url, "dir").as_deref(), Some("ASC"));
		assert_eq!(param(&url, "searchall").as_deref(), Some("page builder"));
	}

	#[test]
	fn test_url_without_search_omits_searchall() {
		let url = CategoryQuery::new(3).to_url(DEFAULT_BASE_URL).unwrap();
		assert!(param(&url, "searchall").is_none());
		assert_eq!(param(&url, "dir").as_deref(), Some("DESC"));
	}

	#[test]
	fn test_url_parameter_order_is_fixed() {
		let url = CategoryQuery::new(3).to_url(DEFAULT_BASE_URL).unwrap();
		let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
		assert_eq!(
			keys,
			vec![
				"option",
				"controller",
				"view",
				"format",
				"limit",
				"limitstart",
				"filter[approved]",
				"filter[published]",
				"filter[core_catid]",
				"extend",
				"order",
				"dir",
			]
		);
	}

	#[test]
	fn test_base_url_path_is_replaced() {
		let url = CategoryQuery::new(3)
			.to_url("http://127.0.0.1:8080/some/prefix?x=1#frag")
			.unwrap();
		assert_eq!(url.path(), "/index.php");
		assert!(param(&url, "x").is_none());
		assert!(url.fragment().is_none());
	}

	#[test]
	fn test_invalid_base_url() {
		let err = CategoryQuery::new(3).to_url("not a url").unwrap_err();
		assert!(matches!(err, JedError::InvalidUrl(_)));
	}

	proptest! {
		#[test]
		fn direction_is_asc_only_for_title(title in any::<bool>(), id in 0i64..100_000) {
			let order = if title { OrderColumn::Title } else { OrderColumn::Rating };
			let url = CategoryQuery::new(id).with_order(order).to_url(DEFAULT_BASE_URL).unwrap();
			let dir = param(&url, "dir").unwrap();
			prop_assert_eq!(dir == "ASC", title);
		}

		#[test]
		fn search_round_trips_through_url(search in "[a-zA-Z0-9 &=%+#]{1,30}") {
			prop_assume!(!search.trim().is_empty());
			let url = CategoryQuery::new(1)
				.with_search(Some(search.clone()))
				.to_url(DEFAULT_BASE_URL)
				.unwrap();
			prop_assert_eq!(param(&url, "searchall"), Some(search));
		}
	}
}
