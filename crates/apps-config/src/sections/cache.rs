// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Result cache configuration section.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
	#[default]
	Memory,
	File,
	None,
}

impl FromStr for CacheBackend {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"memory" => Ok(Self::Memory),
			"file" => Ok(Self::File),
			"none" | "off" | "disabled" => Ok(Self::None),
			other => Err(format!("unknown cache backend '{other}'")),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CacheConfigLayer {
	pub backend: Option<CacheBackend>,
	pub ttl_secs: Option<u64>,
	pub max_entries: Option<usize>,
	pub dir: Option<PathBuf>,
}

impl CacheConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.backend.is_some() {
			self.backend = other.backend;
		}
		if other.ttl_secs.is_some() {
			self.ttl_secs = other.ttl_secs;
		}
		if other.max_entries.is_some() {
			self.max_entries = other.max_entries;
		}
		if other.dir.is_some() {
			self.dir = other.dir;
		}
	}

	pub fn finalize(self) -> CacheConfig {
		CacheConfig {
			backend: self.backend.unwrap_or_default(),
			ttl_secs: self.ttl_secs.unwrap_or(900), // 15 minutes
			max_entries: self.max_entries.unwrap_or(256),
			dir: self.dir,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
	pub backend: CacheBackend,
	pub ttl_secs: u64,
	pub max_entries: usize,
	pub dir: Option<PathBuf>,
}

impl CacheConfig {
	pub fn ttl(&self) -> Duration {
		Duration::from_secs(self.ttl_secs)
	}
}

impl Default for CacheConfig {
	fn default() -> Self {
		CacheConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_values() {
		let config = CacheConfig::default();
		assert_eq!(config.backend, CacheBackend::Memory);
		assert_eq!(config.ttl(), Duration::from_secs(900));
		assert_eq!(config.max_entries, 256);
		assert!(config.dir.is_none());
	}

	#[test]
	fn test_backend_from_str() {
		assert_eq!("FILE".parse::<CacheBackend>(), Ok(CacheBackend::File));
		assert_eq!("off".parse::<CacheBackend>(), Ok(CacheBackend::None));
		assert!("redis".parse::<CacheBackend>().is_err());
	}

	#[test]
	fn test_deserialize_backend() {
		let layer: CacheConfigLayer = toml::from_str("backend = \"file\"\ndir = \"/tmp/apps\"").unwrap();
		assert_eq!(layer.backend, Some(CacheBackend::File));
		assert_eq!(layer.dir, Some(PathBuf::from("/tmp/apps")));
	}
}
