// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML rendering for a single extension's detail page.
//!
//! The page shows the breadcrumb trail, badges, metadata, the install or
//! download action and the description. Every interpolated value is escaped.

mod action;
mod detail;
mod escape;
mod links;
mod text;
mod view;

pub use action::DownloadAction;
pub use detail::{DownloadType, ExtensionDetail, Field};
pub use escape::{html_escape, nl2br, strip_tags};
pub use links::Links;
pub use text::{t, t_fmt};
pub use view::{badges, format_date, render_extension_detail, Badge};
