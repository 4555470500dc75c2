// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration for the extensions directory browser.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`APPS_*`)
//!
//! # Usage
//!
//! ```ignore
//! use apps_config::load_config;
//!
//! let config = load_config()?;
//! println!("directory at {}", config.jed.base_url);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::AppsConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppsConfig {
	pub jed: JedConfig,
	pub listing: ListingConfig,
	pub cache: CacheConfig,
	pub images: ImagesConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`APPS_*`)
/// 2. Config file (`/etc/apps/apps.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<AppsConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<AppsConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<AppsConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AppsConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: AppsConfigLayer) -> Result<AppsConfig, ConfigError> {
	let config = AppsConfig {
		jed: layer.jed.unwrap_or_default().finalize(),
		listing: layer.listing.unwrap_or_default().finalize(),
		cache: layer.cache.unwrap_or_default().finalize(),
		images: layer.images.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		jed_base_url = %config.jed.base_url,
		default_limit = config.listing.default_limit,
		cache_backend = ?config.cache.backend,
		cache_ttl_secs = config.cache.ttl_secs,
		"configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
fn validate_config(config: &AppsConfig) -> Result<(), ConfigError> {
	if config.listing.default_limit == 0 {
		return Err(ConfigError::validation(
			"listing.default_limit must be greater than zero",
		));
	}

	if config.cache.backend == CacheBackend::File && config.cache.dir.is_none() {
		return Err(ConfigError::validation(
			"cache.backend = \"file\" requires cache.dir (APPS_CACHE_DIR) to be set",
		));
	}

	if !(config.jed.base_url.starts_with("http://") || config.jed.base_url.starts_with("https://"))
	{
		return Err(ConfigError::validation(format!(
			"jed.base_url must be an http(s) URL, got '{}'",
			config.jed.base_url
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FixedSource(Precedence, AppsConfigLayer);

	impl ConfigSource for FixedSource {
		fn name(&self) -> &'static str {
			"fixed"
		}

		fn precedence(&self) -> Precedence {
			self.0
		}

		fn load(&self) -> Result<AppsConfigLayer, ConfigError> {
			Ok(self.1.clone())
		}
	}

	fn listing(limit: u32) -> AppsConfigLayer {
		AppsConfigLayer {
			listing: Some(ListingConfigLayer {
				default_limit: Some(limit),
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_defaults_finalize() {
		let config = finalize(AppsConfigLayer::default()).unwrap();
		assert_eq!(config, AppsConfig::default());
		assert_eq!(config.listing.default_limit, 8);
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(FixedSource(Precedence::Environment, listing(30))),
			Box::new(FixedSource(Precedence::ConfigFile, listing(10))),
			Box::new(DefaultsSource),
		])
		.unwrap();
		assert_eq!(config.listing.default_limit, 30);
	}

	#[test]
	fn test_zero_default_limit_rejected() {
		let err = finalize(listing(0)).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_file_backend_requires_dir() {
		let layer = AppsConfigLayer {
			cache: Some(CacheConfigLayer {
				backend: Some(CacheBackend::File),
				..Default::default()
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_err());
	}

	#[test]
	fn test_non_http_base_url_rejected() {
		let layer = AppsConfigLayer {
			jed: Some(JedConfigLayer {
				base_url: Some("ftp://extensions.joomla.org".to_string()),
				timeout_secs: None,
			}),
			..Default::default()
		};
		assert!(finalize(layer).is_err());
	}
}
