// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Joomla Extensions Directory (JED) client.
//!
//! This crate provides a typed Rust client for the directory's JSON search
//! endpoint: query URL construction, the HTTP round trip and response
//! decoding.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{ExtensionSource, JedClient};
pub use error::JedError;
pub use query::{CategoryQuery, OrderColumn, OrderDirection, DEFAULT_BASE_URL, DEFAULT_LIMIT};
pub use types::{CategoryPayload, ExtensionItem};
