// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Escapes text for use in HTML content and double- or single-quoted attributes.
pub fn html_escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escapes text for a single-quoted JavaScript string literal.
pub(crate) fn js_string_escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'<' => out.push_str("\\x3C"),
			_ => out.push(c),
		}
	}
	out
}

/// Removes anything that looks like a tag.
pub fn strip_tags(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut in_tag = false;
	for c in s.chars() {
		match c {
			'<' => in_tag = true,
			'>' if in_tag => in_tag = false,
			_ if !in_tag => out.push(c),
			_ => {}
		}
	}
	out
}

/// Inserts `<br />` before each line break, keeping the break itself.
pub fn nl2br(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut chars = s.chars().peekable();
	while let Some(c) = chars.next() {
		match c {
			'\r' => {
				out.push_str("<br />\r");
				if chars.peek() == Some(&'\n') {
					out.push('\n');
					chars.next();
				}
			}
			'\n' => out.push_str("<br />\n"),
			_ => out.push(c),
		}
	}
	out
}
