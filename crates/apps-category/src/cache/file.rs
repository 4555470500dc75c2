// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

use apps_jed_client::ExtensionItem;
use async_trait::async_trait;
use tracing::{debug, trace};

use super::{CacheKey, CallbackCache};
use crate::error::CacheError;

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Cache that keeps one JSON file per key in a directory.
///
/// Entry age is taken from the file's modification time.
#[derive(Debug, Clone)]
pub struct FileCache {
	dir: PathBuf,
	ttl: Duration,
}

impl FileCache {
	pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
		Self {
			dir: dir.into(),
			ttl,
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	fn entry_path(&self, key: &CacheKey) -> PathBuf {
		self.dir.join(format!("{key}.json"))
	}

	/// Unique per write so concurrent stores of one key never share a temp file.
	fn temp_path(&self, key: &CacheKey) -> PathBuf {
		let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
		self.dir
			.join(format!("{key}.json.{}.{seq}.tmp", std::process::id()))
	}

	fn is_expired(&self, modified: SystemTime) -> bool {
		match SystemTime::now().duration_since(modified) {
			Ok(age) => age >= self.ttl,
			// Modified in the future: clock skew, treat as fresh.
			Err(_) => false,
		}
	}
}

#[async_trait]
impl CallbackCache for FileCache {
	async fn get(&self, key: &CacheKey) -> Result<Option<Vec<ExtensionItem>>, CacheError> {
		let path = self.entry_path(key);

		let metadata = match tokio::fs::metadata(&path).await {
			Ok(m) => m,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(e.into()),
		};

		if self.is_expired(metadata.modified()?) {
			debug!(path = %path.display(), "cache entry expired");
			match tokio::fs::remove_file(&path).await {
				Ok(()) => {}
				Err(e) if e.kind() == ErrorKind::NotFound => {}
				Err(e) => return Err(e.into()),
			}
			return Ok(None);
		}

		let bytes = match tokio::fs::read(&path).await {
			Ok(bytes) => bytes,
			// Expired and removed by a concurrent reader.
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(e.into()),
		};
		let items: Vec<ExtensionItem> = serde_json::from_slice(&bytes)?;
		trace!(path = %path.display(), count = items.len(), "cache hit");
		Ok(Some(items))
	}

	async fn store(&self, key: &CacheKey, items: &[ExtensionItem]) -> Result<(), CacheError> {
		tokio::fs::create_dir_all(&self.dir).await?;

		let path = self.entry_path(key);
		let tmp = self.temp_path(key);
		let bytes = serde_json::to_vec(items)?;

		tokio::fs::write(&tmp, &bytes).await?;
		if let Err(e) = tokio::fs::rename(&tmp, &path).await {
			if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
				debug!(path = %tmp.display(), error = %cleanup, "failed to remove temp cache file");
			}
			return Err(e.into());
		}
		trace!(path = %path.display(), bytes = bytes.len(), "cache entry written");
		Ok(())
	}
}
