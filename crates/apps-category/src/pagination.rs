// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use serde::Serialize;

use crate::request::{ComponentParams, RequestParams};

/// Paging state for a category listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
	pub limit: u32,
	pub limitstart: u32,
	/// Total number of items, when the caller knows it.
	pub total: Option<u64>,
	/// Offset of the following page.
	pub next: u32,
}

impl Pagination {
	pub fn new(params: &RequestParams, component: &ComponentParams, total: Option<u64>) -> Self {
		let limit = params.limit(component);
		let limitstart = params.limitstart();
		Self {
			limit,
			limitstart,
			total,
			next: limitstart.saturating_add(limit),
		}
	}

	/// Whether a following page can exist. Unknown totals assume it can.
	pub fn has_next(&self) -> bool {
		match self.total {
			Some(total) => u64::from(self.next) < total,
			None => self.limit > 0,
		}
	}
}
