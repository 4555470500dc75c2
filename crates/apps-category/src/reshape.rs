// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use apps_jed_client::ExtensionItem;

/// Moves title matches ahead of description-only matches when searching.
///
/// Both groups keep the directory's order. Without a search the list is
/// returned untouched.
pub fn order_by_title_match(items: Vec<ExtensionItem>, searching: bool) -> Vec<ExtensionItem> {
	if !searching {
		return items;
	}

	let (in_title, elsewhere): (Vec<_>, Vec<_>) =
		items.into_iter().partition(ExtensionItem::found_in_title);
	in_title.into_iter().chain(elsewhere).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn item(id: usize, in_title: bool) -> ExtensionItem {
		serde_json::from_value(json!({"id": id, "foundintitle": in_title as u8})).unwrap()
	}

	fn ids(items: &[ExtensionItem]) -> Vec<String> {
		items.iter().filter_map(|i| i.field_value("id")).collect()
	}

	#[test]
	fn test_title_matches_first() {
		let items = vec![item(1, false), item(2, true), item(3, false), item(4, true)];
		let ordered = order_by_title_match(items, true);
		assert_eq!(ids(&ordered), vec!["2", "4", "1", "3"]);
	}

	#[test]
	fn test_no_search_keeps_order() {
		let items = vec![item(1, false), item(2, true), item(3, false)];
		let ordered = order_by_title_match(items.clone(), false);
		assert_eq!(ordered, items);
	}

	#[test]
	fn test_missing_flag_counts_as_elsewhere() {
		let flagless: ExtensionItem = serde_json::from_value(json!({"id": 1})).unwrap();
		let ordered = order_by_title_match(vec![flagless, item(2, true)], true);
		assert_eq!(ids(&ordered), vec!["2", "1"]);
	}

	proptest! {
		#[test]
		fn partition_is_stable(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
			let items: Vec<ExtensionItem> = flags.iter().enumerate().map(|(i, f)| item(i, *f)).collect();
			let ordered = order_by_title_match(items.clone(), true);

			prop_assert_eq!(ordered.len(), items.len());

			let split = ordered.iter().take_while(|i| i.found_in_title()).count();
			prop_assert!(ordered[split..].iter().all(|i| !i.found_in_title()));

			let expected_title: Vec<_> = items.iter().filter(|i| i.found_in_title()).cloned().collect();
			let expected_other: Vec<_> = items.iter().filter(|i| !i.found_in_title()).cloned().collect();
			prop_assert_eq!(&ordered[..split], expected_title.as_slice());
			prop_assert_eq!(&ordered[split..], expected_other.as_slice());
		}

		#[test]
		fn without_search_order_is_identity(flags in proptest::collection::vec(any::<bool>(), 0..40)) {
			let items: Vec<ExtensionItem> = flags.iter().enumerate().map(|(i, f)| item(i, *f)).collect();
			prop_assert_eq!(order_by_title_match(items.clone(), false), items);
		}
	}
}
