// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Builds the listing model from resolved configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use apps_category::{
	CallbackCache, CategoryModel, ComponentParams, FileCache, LogoImageResolver, MemoryCache,
	NoCache,
};
use apps_config::{AppsConfig, CacheBackend, CacheConfig};
use apps_jed_client::JedClient;
use tracing::debug;

pub fn build_cache(config: &CacheConfig) -> Result<Arc<dyn CallbackCache>> {
	let cache: Arc<dyn CallbackCache> = match config.backend {
		CacheBackend::Memory => Arc::new(MemoryCache::new(config.ttl(), config.max_entries)),
		CacheBackend::File => {
			let dir = config
				.dir
				.clone()
				.context("cache.dir must be set for the file cache backend")?;
			Arc::new(FileCache::new(dir, config.ttl()))
		}
		CacheBackend::None => Arc::new(NoCache),
	};
	debug!(backend = ?config.backend, ttl_secs = config.ttl_secs, "cache ready");
	Ok(cache)
}

pub fn build_model(config: &AppsConfig) -> Result<CategoryModel> {
	let client = JedClient::with_timeout(config.jed.timeout())
		.context("failed to build HTTP client")?
		.with_base_url(config.jed.base_url.clone());
	let images = LogoImageResolver::new(
		config.images.cdn_base.clone(),
		config.images.placeholder.clone(),
	);

	Ok(CategoryModel::new(
		Arc::new(client),
		build_cache(&config.cache)?,
		Arc::new(images),
	)
	.with_component_params(ComponentParams {
		default_limit: config.listing.default_limit,
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use apps_category::RequestParams;

	#[test]
	fn test_file_backend_needs_dir() {
		let config = CacheConfig {
			backend: CacheBackend::File,
			dir: None,
			..CacheConfig::default()
		};
		let err = build_cache(&config).err().unwrap();
		assert!(err.to_string().contains("cache.dir"));
	}

	#[test]
	fn test_file_backend_with_dir() {
		let tmp = tempfile::tempdir().unwrap();
		let config = CacheConfig {
			backend: CacheBackend::File,
			dir: Some(tmp.path().to_path_buf()),
			..CacheConfig::default()
		};
		assert!(build_cache(&config).is_ok());
	}

	#[test]
	fn test_model_uses_configured_limit() {
		let mut config = AppsConfig::default();
		config.listing.default_limit = 20;
		config.cache.backend = CacheBackend::None;

		let model = build_model(&config).unwrap();
		assert_eq!(model.component_params().default_limit, 20);
		assert_eq!(model.query_for(&RequestParams::default()).limit, 20);
	}
}
