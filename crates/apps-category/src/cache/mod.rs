// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Result cache for directory calls.

mod file;
mod memory;

use std::fmt;

use apps_jed_client::ExtensionItem;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::trace;
use url::Url;

use crate::error::CacheError;

pub use file::FileCache;
pub use memory::MemoryCache;

/// Key of one cached call: a hash of the method identifier and the full
/// request URL, so any query change lands on a different entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
	pub fn for_call(method_id: &str, url: &Url) -> Self {
		let mut hasher = Sha256::new();
		hasher.update(method_id.as_bytes());
		hasher.update([0u8]);
		hasher.update(url.as_str().as_bytes());
		let key = Self(hex::encode(hasher.finalize()));
		trace!(key = %key, url = %url, "computed cache key");
		key
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for CacheKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Store for raw directory results.
///
/// A miss is `Ok(None)`; `Err` means the cache itself is broken.
#[async_trait]
pub trait CallbackCache: Send + Sync {
	async fn get(&self, key: &CacheKey) -> Result<Option<Vec<ExtensionItem>>, CacheError>;
	async fn store(&self, key: &CacheKey, items: &[ExtensionItem]) -> Result<(), CacheError>;
}

/// Cache that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

#[async_trait]
impl CallbackCache for NoCache {
	async fn get(&self, _key: &CacheKey) -> Result<Option<Vec<ExtensionItem>>, CacheError> {
		Ok(None)
	}

	async fn store(&self, _key: &CacheKey, _items: &[ExtensionItem]) -> Result<(), CacheError> {
		Ok(())
	}
}
