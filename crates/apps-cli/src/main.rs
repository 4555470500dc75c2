// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `apps` - browse the extensions directory from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use apps_category::{Breadcrumb, Category, CategoryTree, RequestParams};
use apps_config::{AppsConfig, LogFormat, LoggingConfig};
use apps_render::{render_extension_detail, ExtensionDetail, Links};

mod output;
mod wiring;

/// Extensions directory browser
#[derive(Parser, Debug)]
#[command(name = "apps", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// List the extensions in a category
	Category {
		/// Category id
		#[arg(long)]
		id: i64,
		/// Page size (defaults to the configured listing limit)
		#[arg(long)]
		limit: Option<u32>,
		/// Offset of the first item
		#[arg(long)]
		limitstart: Option<u32>,
		/// Sort column: `core_title` sorts by title, anything else by rating
		#[arg(long)]
		ordering: Option<String>,
		/// Search term, as it would appear in the query string
		#[arg(long)]
		search: Option<String>,
		/// Output raw JSON
		#[arg(long)]
		json: bool,
	},
	/// Render an extension detail page as HTML
	Render {
		/// Extension record (JSON)
		detail: PathBuf,
		/// Breadcrumb trail (JSON array of `{id, name}`)
		#[arg(long, conflicts_with = "tree")]
		breadcrumbs: Option<PathBuf>,
		/// Category tree (JSON array) to derive the trail from
		#[arg(long, requires = "category")]
		tree: Option<PathBuf>,
		/// Category the extension is listed in
		#[arg(long)]
		category: Option<i64>,
	},
	/// Print every category below the given one
	Descendants {
		/// Category tree (JSON array of `{id, parent_id, name}`)
		tree: PathBuf,
		/// Category id
		id: i64,
	},
}

fn load_config(path: Option<&Path>) -> Result<AppsConfig> {
	let config = match path {
		Some(path) => apps_config::load_config_with_file(path),
		None => apps_config::load_config(),
	};
	config.context("failed to load configuration")
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let raw = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read {}", path.display()))?;
	serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_tree(path: &Path) -> Result<CategoryTree> {
	let categories: Vec<Category> = read_json(path)?;
	Ok(CategoryTree::new(categories))
}

async fn run_category(config: &AppsConfig, params: RequestParams, json: bool) -> Result<()> {
	let model = wiring::build_model(config)?;

	let items = match model.get_extensions(&params).await {
		Ok(items) => items,
		Err(e) => {
			error!(code = e.code(), "category listing failed");
			return Err(e.into());
		}
	};
	let pagination = model.pagination(&params, None);
	info!(count = items.len(), "category listing ready");

	if json {
		let body = serde_json::to_string_pretty(&output::ListingOutput {
			items: &items,
			pagination,
		})?;
		println!("{body}");
	} else {
		println!("{}", output::format_listing(&items, &pagination));
	}
	Ok(())
}

fn run_render(
	config: &AppsConfig,
	detail: &Path,
	breadcrumbs: Option<&Path>,
	tree: Option<&Path>,
	category: Option<i64>,
) -> Result<()> {
	let detail: ExtensionDetail = read_json(detail)?;
	let trail: Vec<Breadcrumb> = match (breadcrumbs, tree, category) {
		(Some(path), _, _) => read_json(path)?,
		(None, Some(tree), Some(id)) => read_tree(tree)?.breadcrumbs(id),
		_ => Vec::new(),
	};

	let links = Links::new("index.php", config.jed.base_url.clone());
	println!("{}", render_extension_detail(&detail, &trail, &links));
	Ok(())
}

fn run_descendants(tree: &Path, id: i64) -> Result<()> {
	let tree = read_tree(tree)?;
	let ids = tree.all_descendants(id);
	info!(id, count = ids.len(), "descendants resolved");
	if !ids.is_empty() {
		println!("{}", output::format_ids(&ids));
	}
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	let config = load_config(args.config.as_deref())?;
	init_tracing(&config.logging);

	match args.command {
		Command::Category {
			id,
			limit,
			limitstart,
			ordering,
			search,
			json,
		} => {
			let params = RequestParams {
				id: Some(id),
				limit,
				limitstart,
				ordering,
				filter_search: search,
			};
			run_category(&config, params, json).await
		}
		Command::Render {
			detail,
			breadcrumbs,
			tree,
			category,
		} => run_render(
			&config,
			&detail,
			breadcrumbs.as_deref(),
			tree.as_deref(),
			category,
		),
		Command::Descendants { tree, id } => run_descendants(&tree, id),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_parse_category() {
		let args = Args::parse_from([
			"apps", "--config", "/tmp/apps.toml", "category", "--id", "12", "--search", "seo+tools",
		]);
		assert_eq!(args.config.as_deref(), Some(Path::new("/tmp/apps.toml")));
		match args.command {
			Command::Category { id, search, json, .. } => {
				assert_eq!(id, 12);
				assert_eq!(search.as_deref(), Some("seo+tools"));
				assert!(!json);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_tree_requires_category() {
		let result = Args::try_parse_from(["apps", "render", "detail.json", "--tree", "tree.json"]);
		assert!(result.is_err());
	}

	#[test]
	fn test_read_tree() {
		let tmp = tempfile::tempdir().unwrap();
		let path = tmp.path().join("tree.json");
		std::fs::write(
			&path,
			r#"[{"id": 1, "name": "Root"}, {"id": 2, "parent_id": 1, "name": "Child"}]"#,
		)
		.unwrap();

		let tree = read_tree(&path).unwrap();
		assert_eq!(tree.all_descendants(1), vec![2]);
	}

	#[test]
	fn test_read_json_reports_path() {
		let err = read_json::<Vec<Category>>(Path::new("/nonexistent/tree.json")).unwrap_err();
		assert!(err.to_string().contains("/nonexistent/tree.json"));
	}
}
