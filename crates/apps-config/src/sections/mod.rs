// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod cache;
mod images;
mod jed;
mod listing;
mod logging;

pub use cache::{CacheBackend, CacheConfig, CacheConfigLayer};
pub use images::{ImagesConfig, ImagesConfigLayer};
pub use jed::{JedConfig, JedConfigLayer, DEFAULT_JED_BASE_URL};
pub use listing::{ListingConfig, ListingConfigLayer, DEFAULT_LIMIT};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
