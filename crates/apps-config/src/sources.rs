// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: built-in defaults, TOML files and environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::AppsConfigLayer;
use crate::sections::{
	CacheConfigLayer, ImagesConfigLayer, JedConfigLayer, ListingConfigLayer, LoggingConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<AppsConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<AppsConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(AppsConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/apps/apps.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<AppsConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(AppsConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: AppsConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: APPS_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<AppsConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from_lookup(&|name: &str| std::env::var(name).ok())
	}
}

type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Builds a layer from an arbitrary variable lookup.
pub(crate) fn load_from_lookup(lookup: Lookup<'_>) -> Result<AppsConfigLayer, ConfigError> {
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	Ok(AppsConfigLayer {
		jed: Some(JedConfigLayer {
			base_url: var("APPS_JED_BASE_URL"),
			timeout_secs: parse_var(lookup, "APPS_JED_TIMEOUT_SECS")?,
		}),
		listing: Some(ListingConfigLayer {
			default_limit: parse_var(lookup, "APPS_LISTING_DEFAULT_LIMIT")?,
		}),
		cache: Some(CacheConfigLayer {
			backend: parse_var(lookup, "APPS_CACHE_BACKEND")?,
			ttl_secs: parse_var(lookup, "APPS_CACHE_TTL_SECS")?,
			max_entries: parse_var(lookup, "APPS_CACHE_MAX_ENTRIES")?,
			dir: var("APPS_CACHE_DIR").map(PathBuf::from),
		}),
		images: Some(ImagesConfigLayer {
			cdn_base: var("APPS_IMAGES_CDN_BASE"),
			placeholder: var("APPS_IMAGES_PLACEHOLDER"),
		}),
		logging: Some(LoggingConfigLayer {
			level: var("APPS_LOGGING_LEVEL"),
			format: parse_var(lookup, "APPS_LOGGING_FORMAT")?,
		}),
	})
}

fn parse_var<T>(lookup: Lookup<'_>, name: &str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	match lookup(name).filter(|s| !s.is_empty()) {
		Some(v) => v.parse().map(Some).map_err(|e| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("'{v}': {e}"),
		}),
		None => Ok(None),
	}
}
