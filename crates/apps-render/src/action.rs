// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Picks and renders the primary install/download button.

use crate::detail::ExtensionDetail;
use crate::escape::{html_escape, js_string_escape};
use crate::text::t;

/// The primary call to action on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadAction {
	/// Plain external download link.
	Download { href: String },
	/// In-place install through the installer's web hook.
	InstallFromWeb { url: String, title: String },
	/// Registration required before the installer can fetch the package.
	Register { url: String },
	/// Purchase required before the installer can fetch the package.
	Purchase { url: String },
	/// Registration happens on the vendor's site.
	RegisterExternal { href: String },
	/// Purchase happens on the vendor's site.
	PurchaseExternal { href: String },
}

impl DownloadAction {
	/// Chooses the action for `detail`, or `None` when there is nothing to offer.
	///
	/// A direct `downloadurl` with a numeric type takes precedence. Otherwise
	/// the `download_link` is used with either the numeric or the labelled
	/// type deciding the kind of link.
	pub fn resolve(detail: &ExtensionDetail) -> Option<Self> {
		let kind = &detail.download_type;

		if let (Some(url), Some(n)) = (detail.download_url(), kind.numeric()) {
			let url = url.to_string();
			return match n {
				0 => Some(DownloadAction::Download { href: url }),
				1 => Some(DownloadAction::InstallFromWeb {
					url,
					title: detail.title(),
				}),
				2 => Some(DownloadAction::Register { url }),
				3 => Some(DownloadAction::Purchase { url }),
				_ => None,
			};
		}

		if !detail.download_link.is_set() {
			return None;
		}

		let href = detail.download_link.value_str();
		let label = kind.label();
		let registration = detail.requires_registration.is_set();

		if kind.is(0) || kind.is(1) || (label == "free" && !registration) {
			Some(DownloadAction::Download { href })
		} else if kind.is(2) || (label == "free" && registration) {
			Some(DownloadAction::RegisterExternal { href })
		} else if kind.is(3) || label != "free" {
			Some(DownloadAction::PurchaseExternal { href })
		} else {
			None
		}
	}

	pub fn render(&self) -> String {
		match self {
			DownloadAction::Download { href } => format!(
				r#"<a target="_blank" class="transcode install btn btn-success" href="{}"><span class="icon-download" aria-hidden="true"></span> {}&hellip;</a>"#,
				html_escape(href),
				html_escape(&t("COM_APPS_INSTALL_DOWNLOAD_EXTERNAL")),
			),
			DownloadAction::InstallFromWeb { url, title } => format!(
				r##"<a class="install btn btn-success" href="#" onclick="return Joomla.installfromweb('{}', '{}')"><span class="icon-checkmark" aria-hidden="true"></span> {}&hellip;</a>"##,
				html_escape(&js_string_escape(url)),
				html_escape(&js_string_escape(title)),
				html_escape(&t("COM_APPS_INSTALL")),
			),
			DownloadAction::Register { url } => external_button(url, "icon-pencil", "COM_APPS_INSTALL_REGISTER"),
			DownloadAction::Purchase { url } => external_button(url, "icon-cart", "COM_APPS_INSTALL_PURCHASE"),
			DownloadAction::RegisterExternal { href } => {
				external_link(href, "icon-pencil", "COM_APPS_INSTALL_REGISTER_DOWNLOAD_EXTERNAL")
			}
			DownloadAction::PurchaseExternal { href } => {
				external_link(href, "icon-cart", "COM_APPS_INSTALL_PURCHASE_EXTERNAL")
			}
		}
	}
}

fn external_button(url: &str, icon: &str, label_key: &str) -> String {
	format!(
		r#"<button class="install btn btn-success" id="appssubmitbutton" onclick="return Joomla.installfromwebexternal('{}');" type="submit"><span class="{icon}" aria-hidden="true"></span> {}&hellip;</button>"#,
		html_escape(&js_string_escape(url)),
		html_escape(&t(label_key)),
	)
}

fn external_link(href: &str, icon: &str, label_key: &str) -> String {
	format!(
		r#"<a target="_blank" class="install btn btn-success" href="{}"><span class="{icon}" aria-hidden="true"></span> {}&hellip;</a>"#,
		html_escape(href),
		html_escape(&t(label_key)),
	)
}
