// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use apps_category::Breadcrumb;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, instrument};

use crate::action::DownloadAction;
use crate::detail::ExtensionDetail;
use crate::escape::{html_escape, nl2br, strip_tags};
use crate::links::Links;
use crate::text::{t, t_fmt};

const NULL_DATE: &str = "0000-00-00 00:00:00";
const DATE_FORMAT: &str = "%A, %d %B %Y";

/// Tag → (badge class, label key).
const TAG_BADGES: &[(&str, &str, &str)] = &[
	("com", "success", "COM_APPS_COMPONENT"),
	("lang", "dark", "COM_APPS_LANGUAGE"),
	("mod", "danger", "COM_APPS_MODULE"),
	("plugin", "secondary", "COM_APPS_PLUGIN"),
	("esp", "primary", "COM_APPS_EXTENSION_SPECIFIC_ADDON"),
	("tool", "light", "COM_APPS_TOOL"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
	pub class: &'static str,
	pub title: String,
	pub label: String,
}

impl Badge {
	fn render(&self) -> String {
		format!(
			r#"<span title="{}" class="badge badge-{}">{}</span>"#,
			html_escape(&self.title),
			self.class,
			html_escape(&self.label)
		)
	}
}

/// Badges in display order: commercial first, then one per known tag.
pub fn badges(detail: &ExtensionDetail) -> Vec<Badge> {
	let mut out = Vec::new();
	if detail.is_commercial() {
		out.push(Badge {
			class: "warning",
			title: detail.kind.value_str(),
			label: t("COM_APPS_COMMERCIAL"),
		});
	}

	let tags = detail.tags();
	for &(tag, class, key) in TAG_BADGES {
		if tags.iter().any(|candidate| candidate == tag) {
			let label = t(key);
			out.push(Badge {
				class,
				title: label.clone(),
				label,
			});
		}
	}
	out
}

/// Formats a directory timestamp for display; unparsable input comes back as is.
pub fn format_date(raw: &str) -> String {
	let raw = raw.trim();
	if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
		return dt.format(DATE_FORMAT).to_string();
	}
	if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
		return date.format(DATE_FORMAT).to_string();
	}
	raw.to_string()
}

/// Renders the full detail page for one extension.
#[instrument(skip_all, fields(title = %detail.title()))]
pub fn render_extension_detail(
	detail: &ExtensionDetail,
	breadcrumbs: &[Breadcrumb],
	links: &Links,
) -> String {
	let title = detail.title();
	let jed_url = links.jed_url(detail);
	let mut html = String::new();

	html.push_str(r#"<div class="item-view">"#);
	render_breadcrumbs(&mut html, &title, breadcrumbs, links);

	html.push_str(&format!("<div><h2>{}", html_escape(title.trim())));
	if detail.is_popular() {
		html.push_str(&format!(
			r#" <span class="badge badge-primary">{}</span>"#,
			html_escape(&t("COM_APPS_POPULAR_TEXT"))
		));
	}
	html.push_str("</h2></div>");

	html.push_str(r#"<div class="row"><div class="col-md-4 col-lg-3">"#);
	html.push_str(&format!(
		r#"<img class="img-fluid" src="{}">"#,
		html_escape(detail.image.as_deref().unwrap_or_default())
	));
	html.push_str(r#"</div><div class="col-md-8 col-lg-9">"#);

	let score = detail.score.value_str();
	let num_reviews = detail.num_reviews.value_str();
	let reviews = strip_tags(&t_fmt(
		"COM_APPS_EXTENSION_VOTES_REVIEWS_LIST",
		&[("score", score.as_str()), ("reviews", num_reviews.as_str())],
	));
	html.push_str(&format!(
		r#"<a target="_blank" href="{}#reviews">{}</a>"#,
		html_escape(&jed_url),
		html_escape(&reviews)
	));

	render_metadata(&mut html, detail);

	html.push_str(r#"<div class="item-badge-container">"#);
	for badge in badges(detail) {
		html.push_str(&badge.render());
	}
	html.push_str("</div></div></div>");

	html.push_str(r#"<div class="row"><div class="col">"#);
	if detail.download_type.numeric().is_some_and(|n| n > 1) {
		html.push_str(r#"<input id="joomlaapsinstallatinput" type="hidden" name="installat" value=""/>"#);
		html.push_str(&format!(
			r#"<input id="joomlaapsinstallfrominput" type="hidden" name="installfrom" value="{}"/>"#,
			html_escape(detail.downloadurl.as_deref().unwrap_or_default())
		));
		html.push_str(&format!(
			r#"<input type="hidden" name="installapp" value="{}"/>"#,
			html_escape(&detail.link_id().unwrap_or_default())
		));
	}

	html.push_str(r#"<div class="card bg-light mb-3"><div class="card-body">"#);
	match DownloadAction::resolve(detail) {
		Some(action) => {
			debug!(?action, "resolved download action");
			html.push_str(&action.render());
			html.push_str("&nbsp;&nbsp;&nbsp;");
		}
		None => debug!("no download action"),
	}
	html.push_str(&format!(
		r#"<a target="_blank" class="btn btn-primary" href="{}"><span class="icon-list" aria-hidden="true"></span> {}</a>"#,
		html_escape(&jed_url),
		html_escape(&t("COM_APPS_DIRECTORY_LISTING"))
	));
	if detail.homepage_link.is_set() {
		html.push_str(&format!(
			r#"&nbsp;&nbsp;&nbsp;<a target="_blank" class="btn btn-primary" href="{}"><span class="icon-share-alt" aria-hidden="true"></span> {}</a>"#,
			html_escape(&detail.homepage_link.text_str()),
			html_escape(&t("COM_APPS_DEVELOPER_WEBSITE"))
		));
	}
	html.push_str("</div></div>");

	html.push_str(&format!("<h4>{}", html_escape(&detail.core_title.text_str())));
	if detail.core_created_user_id.is_set() {
		let author_name = detail.core_created_user_id.text_str();
		let author = t_fmt("COM_APPS_EXTENSION_AUTHOR", &[("author", author_name.as_str())]);
		html.push_str(&format!(" <small>{}</small>", html_escape(&author)));
	}
	html.push_str("</h4>");

	html.push_str(&format!(
		"<div>{}</div>",
		nl2br(&html_escape(&detail.core_body.text_str()))
	));
	html.push_str("</div></div></div>");
	html
}

fn render_breadcrumbs(html: &mut String, title: &str, breadcrumbs: &[Breadcrumb], links: &Links) {
	html.push_str(r#"<div class="grid-header"><nav aria-label="breadcrumb"><ol class="breadcrumb">"#);
	html.push_str(&format!(
		r#"<li class="breadcrumb-item"><a class="transcode" href="{}">{}</a></li>"#,
		html_escape(&links.ajax_url(&[("view", "dashboard")])),
		html_escape(&t("COM_APPS_EXTENSIONS"))
	));
	for crumb in breadcrumbs {
		let id = crumb.id.to_string();
		html.push_str(&format!(
			r#"<li class="breadcrumb-item"><a class="transcode" href="{}">{}</a></li>"#,
			html_escape(&links.ajax_url(&[("view", "category"), ("id", id.as_str())])),
			html_escape(&crumb.name)
		));
	}
	html.push_str(&format!(
		r#"<li class="breadcrumb-item active" aria-current="page">{}</li>"#,
		html_escape(title)
	));
	html.push_str("</ol></nav></div>");
}

fn render_metadata(html: &mut String, detail: &ExtensionDetail) {
	html.push_str("<dl>");
	html.push_str(&format!(
		"<dt>{}</dt><dd>{}",
		html_escape(&t("COM_APPS_EXTENSION_VERSION")),
		html_escape(&detail.version.value_str())
	));
	let modified = detail.core_modified_time.value_str();
	if !modified.is_empty() && modified != NULL_DATE {
		let date = format_date(&modified);
		let updated = t_fmt("COM_APPS_EXTENSION_LAST_UPDATE", &[("date", date.as_str())]);
		html.push_str(&format!(" {}", html_escape(&updated)));
	}
	html.push_str("</dd>");

	if detail.license.is_set() {
		html.push_str(&format!(
			"<dt>{}</dt><dd>{}&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;{}</dd>",
			html_escape(&t("COM_APPS_EXTENSION_LICENSE")),
			html_escape(&detail.license.text_str()),
			html_escape(&detail.kind.text_str())
		));
	}

	html.push_str(&format!(
		"<dt>{}</dt><dd>{}</dd>",
		html_escape(&t("COM_APPS_EXTENSION_ADDEDON")),
		html_escape(&format_date(&detail.core_created_time.value_str()))
	));
	html.push_str("</dl>");
}
