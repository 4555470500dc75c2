// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use apps_jed_client::ExtensionItem;
use async_trait::async_trait;
use tracing::trace;

use super::{CacheKey, CallbackCache};
use crate::error::CacheError;

const DEFAULT_TTL: Duration = Duration::from_secs(900);
const DEFAULT_MAX_ENTRIES: usize = 256;

#[derive(Debug, Clone)]
struct Entry {
	items: Vec<ExtensionItem>,
	expires_at: Instant,
	last_used: Instant,
}

/// In-process cache with a fixed TTL and least-recently-used eviction.
#[derive(Debug)]
pub struct MemoryCache {
	entries: Mutex<HashMap<CacheKey, Entry>>,
	ttl: Duration,
	max_entries: usize,
}

impl Default for MemoryCache {
	fn default() -> Self {
		Self::new(DEFAULT_TTL, DEFAULT_MAX_ENTRIES)
	}
}

impl MemoryCache {
	pub fn new(ttl: Duration, max_entries: usize) -> Self {
		MemoryCache {
			entries: Mutex::new(HashMap::new()),
			ttl,
			max_entries: max_entries.max(1),
		}
	}

	pub fn len(&self) -> usize {
		self.entries.lock().map(|e| e.len()).unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<CacheKey, Entry>>, CacheError> {
		self.entries
			.lock()
			.map_err(|_| CacheError::Unavailable("memory cache lock poisoned".to_string()))
	}
}

fn evict_lru(entries: &mut HashMap<CacheKey, Entry>) {
	if let Some(oldest) = entries
		.iter()
		.min_by_key(|(_, entry)| entry.last_used)
		.map(|(k, _)| k.clone())
	{
		trace!(key = %oldest, "evicting least recently used entry");
		entries.remove(&oldest);
	}
}

#[async_trait]
impl CallbackCache for MemoryCache {
	async fn get(&self, key: &CacheKey) -> Result<Option<Vec<ExtensionItem>>, CacheError> {
		let now = Instant::now();
		let mut entries = self.lock()?;

		if let Some(entry) = entries.get_mut(key) {
			if entry.expires_at > now {
				entry.last_used = now;
				return Ok(Some(entry.items.clone()));
			}
			entries.remove(key);
		}

		Ok(None)
	}

	async fn store(&self, key: &CacheKey, items: &[ExtensionItem]) -> Result<(), CacheError> {
		let now = Instant::now();
		let mut entries = self.lock()?;

		entries.retain(|_, entry| entry.expires_at > now);
		if !entries.contains_key(key) && entries.len() >= self.max_entries {
			evict_lru(&mut entries);
		}

		entries.insert(
			key.clone(),
			Entry {
				items: items.to_vec(),
				expires_at: now + self.ttl,
				last_used: now,
			},
		);
		Ok(())
	}
}
