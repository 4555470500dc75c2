// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Category listing model.

use std::sync::Arc;

use apps_jed_client::{CategoryQuery, ExtensionItem, ExtensionSource, JedError};
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::cache::{CacheKey, CallbackCache};
use crate::error::CategoryError;
use crate::image::ImageResolver;
use crate::pagination::Pagination;
use crate::request::{ComponentParams, RequestParams};
use crate::reshape::order_by_title_match;

/// Identifies the listing call in cache keys.
pub const EXTENSIONS_METHOD_ID: &str = "CategoryModel::get_extensions";

/// Fetches, caches and reshapes one category's extensions.
///
/// All collaborators are injected; nothing is read from process-wide state.
#[derive(Clone)]
pub struct CategoryModel {
	source: Arc<dyn ExtensionSource>,
	cache: Arc<dyn CallbackCache>,
	images: Arc<dyn ImageResolver>,
	component: ComponentParams,
}

impl CategoryModel {
	pub fn new(
		source: Arc<dyn ExtensionSource>,
		cache: Arc<dyn CallbackCache>,
		images: Arc<dyn ImageResolver>,
	) -> Self {
		Self {
			source,
			cache,
			images,
			component: ComponentParams::default(),
		}
	}

	pub fn with_component_params(mut self, component: ComponentParams) -> Self {
		self.component = component;
		self
	}

	pub fn component_params(&self) -> &ComponentParams {
		&self.component
	}

	pub fn query_for(&self, params: &RequestParams) -> CategoryQuery {
		params.to_query(&self.component)
	}

	pub fn pagination(&self, params: &RequestParams, total: Option<u64>) -> Pagination {
		Pagination::new(params, &self.component, total)
	}

	/// Lists the extensions for the category the request points at.
	pub async fn get_extensions(
		&self,
		params: &RequestParams,
	) -> Result<Vec<ExtensionItem>, CategoryError> {
		let query = self.query_for(params);
		self.get_extensions_for(&query).await
	}

	#[instrument(skip(self, query), fields(category_id = query.category_id, searching = query.has_search()))]
	pub async fn get_extensions_for(
		&self,
		query: &CategoryQuery,
	) -> Result<Vec<ExtensionItem>, CategoryError> {
		let url = query.to_url(self.source.base_url()).map_err(sanitize)?;
		let key = CacheKey::for_call(EXTENSIONS_METHOD_ID, &url);

		let items = match self.cache.get(&key).await {
			Ok(Some(items)) => {
				debug!(key = %key, "category cache hit");
				items
			}
			Ok(None) => {
				debug!(key = %key, "category cache miss");
				let items = self.fetch(&url).await?;
				if let Err(e) = self.cache.store(&key, &items).await {
					warn!(error = %e, "failed to store category data in cache");
				}
				items
			}
			Err(e) => {
				warn!(error = %e, "cache lookup failed, fetching without cache");
				self.fetch(&url).await?
			}
		};

		Ok(self.reshape(items, query.has_search()))
	}

	async fn fetch(&self, url: &Url) -> Result<Vec<ExtensionItem>, CategoryError> {
		self.source
			.fetch_category_extensions(url)
			.await
			.map_err(sanitize)
	}

	fn reshape(&self, items: Vec<ExtensionItem>, searching: bool) -> Vec<ExtensionItem> {
		let items = items
			.into_iter()
			.map(|mut item| {
				item.image = Some(self.images.resolve(&item));
				item
			})
			.collect();
		order_by_title_match(items, searching)
	}
}

fn sanitize(e: JedError) -> CategoryError {
	error!(
		error = %e,
		code = e.code(),
		"Could not retrieve category extension data from the JED"
	);
	CategoryError::from(e)
}
