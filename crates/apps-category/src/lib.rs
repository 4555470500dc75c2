// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Category listings backed by the extensions directory.
//!
//! [`CategoryModel`] turns request parameters into a directory query, serves
//! the answer from a [`CallbackCache`] when it can, and reshapes the items for
//! display. Cache trouble never fails a request; directory trouble is logged
//! and surfaced as a single [`CategoryError`].

pub mod cache;
pub mod error;
pub mod image;
pub mod model;
pub mod pagination;
pub mod request;
pub mod reshape;
pub mod tree;

pub use cache::{CacheKey, CallbackCache, FileCache, MemoryCache, NoCache};
pub use error::{CacheError, CategoryError};
pub use image::{ImageResolver, LogoImageResolver};
pub use model::{CategoryModel, EXTENSIONS_METHOD_ID};
pub use pagination::Pagination;
pub use request::{normalize_search, ComponentParams, RequestParams};
pub use reshape::order_by_title_match;
pub use tree::{Breadcrumb, Category, CategoryTree};
