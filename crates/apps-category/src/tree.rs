// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Directory category hierarchy.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub id: i64,
	#[serde(default)]
	pub parent_id: Option<i64>,
	pub name: String,
}

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
	pub id: i64,
	pub name: String,
}

/// Categories indexed by id, with each parent's children in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
	nodes: HashMap<i64, Category>,
	children: HashMap<i64, Vec<i64>>,
}

impl CategoryTree {
	pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
		let mut tree = Self::default();
		for category in categories {
			tree.insert(category);
		}
		tree
	}

	pub fn insert(&mut self, category: Category) {
		if let Some(parent) = category.parent_id {
			let siblings = self.children.entry(parent).or_default();
			if !siblings.contains(&category.id) {
				siblings.push(category.id);
			}
		}
		self.nodes.insert(category.id, category);
	}

	pub fn get(&self, id: i64) -> Option<&Category> {
		self.nodes.get(&id)
	}

	pub fn children(&self, id: i64) -> &[i64] {
		self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Every category below `id`: its direct children first, then each
	/// child's own descendants in child order.
	pub fn all_descendants(&self, id: i64) -> Vec<i64> {
		let mut visited = HashSet::from([id]);
		self.collect_descendants(id, &mut visited)
	}

	fn collect_descendants(&self, id: i64, visited: &mut HashSet<i64>) -> Vec<i64> {
		let direct: Vec<i64> = self
			.children(id)
			.iter()
			.copied()
			.filter(|child| visited.insert(*child))
			.collect();

		let mut all = direct.clone();
		for child in direct {
			all.extend(self.collect_descendants(child, visited));
		}
		all
	}

	/// Trail from the top-most known ancestor down to `id` itself.
	pub fn breadcrumbs(&self, id: i64) -> Vec<Breadcrumb> {
		let mut trail = Vec::new();
		let mut seen = HashSet::new();
		let mut current = self.nodes.get(&id);

		while let Some(category) = current {
			if !seen.insert(category.id) {
				break;
			}
			trail.push(Breadcrumb {
				id: category.id,
				name: category.name.clone(),
			});
			current = category.parent_id.and_then(|p| self.nodes.get(&p));
		}

		trail.reverse();
		trail
	}
}
