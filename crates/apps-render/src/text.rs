// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! UI strings for the detail page, loaded from the gettext catalogue.

use gettext::Catalog;
use once_cell::sync::Lazy;
use tracing::trace;

const EN_MO: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/en.mo"));

static CATALOG: Lazy<Option<Catalog>> = Lazy::new(|| match Catalog::parse(EN_MO) {
	Ok(catalog) => Some(catalog),
	Err(e) => {
		tracing::error!(error = %e, "Failed to parse English UI string catalog");
		None
	}
});

/// Looks up a UI string. Unknown keys come back unchanged.
pub fn t(key: &str) -> String {
	if let Some(catalog) = CATALOG.as_ref() {
		let translated = catalog.gettext(key);
		if translated != key {
			return translated.to_string();
		}
	}
	trace!(key, "missing translation");
	key.to_string()
}

/// Looks up a UI string and substitutes `{name}` placeholders.
pub fn t_fmt(key: &str, args: &[(&str, &str)]) -> String {
	let mut text = t(key);
	for (name, value) in args {
		text = text.replace(&format!("{{{name}}}"), value);
	}
	text
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_catalog_parses() {
		assert!(CATALOG.is_some());
	}

	#[test]
	fn test_known_key() {
		assert_eq!(t("COM_APPS_POPULAR_TEXT"), "Popular");
		assert_eq!(t("COM_APPS_INSTALL_PURCHASE_EXTERNAL"), "Purchase & Download");
	}

	#[test]
	fn test_unknown_key_is_returned() {
		assert_eq!(t("COM_APPS_NOPE"), "COM_APPS_NOPE");
	}

	#[test]
	fn test_placeholders() {
		assert_eq!(
			t_fmt("COM_APPS_EXTENSION_AUTHOR", &[("author", "Akeeba Ltd")]),
			"by Akeeba Ltd"
		);
		assert_eq!(
			t_fmt("COM_APPS_EXTENSION_VOTES_REVIEWS_LIST", &[("score", "96"), ("reviews", "410")]),
			"<span>96</span> Score, <span>410</span> Reviews"
		);
	}

	#[test]
	fn test_unknown_placeholder_is_left_alone() {
		assert_eq!(
			t_fmt("COM_APPS_EXTENSION_LAST_UPDATE", &[("other", "x")]),
			"(Last updated {date})"
		);
	}
}
