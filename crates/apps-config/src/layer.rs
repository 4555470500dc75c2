// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{
	CacheConfigLayer, ImagesConfigLayer, JedConfigLayer, ListingConfigLayer, LoggingConfigLayer,
};

/// One source's view of the configuration. Unset fields defer to lower
/// precedence sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppsConfigLayer {
	#[serde(default)]
	pub jed: Option<JedConfigLayer>,
	#[serde(default)]
	pub listing: Option<ListingConfigLayer>,
	#[serde(default)]
	pub cache: Option<CacheConfigLayer>,
	#[serde(default)]
	pub images: Option<ImagesConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

fn merge_section<T: Default>(slot: &mut Option<T>, other: Option<T>, merge: impl FnOnce(&mut T, T)) {
	if let Some(other) = other {
		merge(slot.get_or_insert_with(Default::default), other);
	}
}

impl AppsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.jed, other.jed, JedConfigLayer::merge);
		merge_section(&mut self.listing, other.listing, ListingConfigLayer::merge);
		merge_section(&mut self.cache, other.cache, CacheConfigLayer::merge);
		merge_section(&mut self.images, other.images, ImagesConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_merge_fills_missing_sections() {
		let mut base = AppsConfigLayer::default();
		base.merge(AppsConfigLayer {
			listing: Some(ListingConfigLayer {
				default_limit: Some(20),
			}),
			..Default::default()
		});
		assert_eq!(base.listing.unwrap().default_limit, Some(20));
		assert!(base.jed.is_none());
	}

	#[test]
	fn test_merge_overrides_field_by_field() {
		let mut base = AppsConfigLayer {
			jed: Some(JedConfigLayer {
				base_url: Some("https://old.example".to_string()),
				timeout_secs: Some(3),
			}),
			..Default::default()
		};
		base.merge(AppsConfigLayer {
			jed: Some(JedConfigLayer {
				base_url: Some("https://new.example".to_string()),
				timeout_secs: None,
			}),
			..Default::default()
		});
		let jed = base.jed.unwrap();
		assert_eq!(jed.base_url.as_deref(), Some("https://new.example"));
		assert_eq!(jed.timeout_secs, Some(3));
	}

	proptest! {
		/// Merging never loses a value: the overlay wins when set, the base otherwise.
		#[test]
		fn merge_prefers_overlay_when_set(base in 1u32..10_000, overlay in proptest::option::of(1u32..10_000)) {
			let mut layer = AppsConfigLayer {
				listing: Some(ListingConfigLayer { default_limit: Some(base) }),
				..Default::default()
			};
			layer.merge(AppsConfigLayer {
				listing: Some(ListingConfigLayer { default_limit: overlay }),
				..Default::default()
			});
			let merged = layer.listing.and_then(|l| l.default_limit);
			prop_assert_eq!(merged, Some(overlay.unwrap_or(base)));
		}
	}
}
