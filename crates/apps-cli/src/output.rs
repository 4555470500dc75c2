// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use apps_category::Pagination;
use apps_jed_client::ExtensionItem;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListingOutput<'a> {
	pub items: &'a [ExtensionItem],
	pub pagination: Pagination,
}

/// One line per extension, then a paging footer.
pub fn format_listing(items: &[ExtensionItem], pagination: &Pagination) -> String {
	let mut out = String::new();
	for item in items {
		let title = item.title().unwrap_or_else(|| "(untitled)".to_string());
		let marker = if item.found_in_title() { "*" } else { " " };
		let image = item.image.as_deref().unwrap_or("-");
		out.push_str(&format!("{marker} {title}\t{image}\n"));
	}

	out.push_str(&format!(
		"showing {} from offset {} (limit {})",
		items.len(),
		pagination.limitstart,
		pagination.limit
	));
	if let Some(total) = pagination.total {
		out.push_str(&format!(" of {total}"));
	}
	if pagination.has_next() && items.len() as u64 >= u64::from(pagination.limit) {
		out.push_str(&format!("; next page: --limitstart {}", pagination.next));
	}
	out
}

pub fn format_ids(ids: &[i64]) -> String {
	ids.iter()
		.map(|id| id.to_string())
		.collect::<Vec<_>>()
		.join("\n")
}
