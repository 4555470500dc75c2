// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Response types for the directory search endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Body of a successful search response.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
	pub data: Vec<ExtensionItem>,
}

/// One extension as returned by the directory.
///
/// The record is otherwise opaque: every field the directory sends is kept in
/// `fields` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionItem {
	/// Set by the directory on searches when the term matched the title.
	#[serde(
		default,
		deserialize_with = "deserialize_flag",
		skip_serializing_if = "Option::is_none"
	)]
	pub foundintitle: Option<bool>,

	/// Resolved image URL, filled in locally. Whatever the directory sends
	/// here is replaced, so non-string values are dropped.
	#[serde(
		default,
		deserialize_with = "deserialize_image",
		skip_serializing_if = "Option::is_none"
	)]
	pub image: Option<String>,

	#[serde(flatten)]
	pub fields: Map<String, Value>,
}

impl ExtensionItem {
	pub fn found_in_title(&self) -> bool {
		self.foundintitle.unwrap_or(false)
	}

	/// Returns a field's display value.
	///
	/// Directory fields come either as plain scalars or as `{value, text}`
	/// objects; for the latter the `value` is used.
	pub fn field_value(&self, name: &str) -> Option<String> {
		let raw = self.fields.get(name)?;
		let value = match raw {
			Value::Object(obj) => obj.get("value")?,
			other => other,
		};
		scalar_to_string(value)
	}

	pub fn title(&self) -> Option<String> {
		self.field_value("core_title")
	}
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// Accepts `true`/`false`, `0`/`1` and their string forms. Anything else
/// reads as `false` rather than failing the whole list.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	let flag = match value {
		Value::Null => None,
		Value::Bool(b) => Some(b),
		Value::Number(n) => Some(n.as_f64().map(|f| f != 0.0).unwrap_or(false)),
		Value::String(s) => match s.trim() {
			"" | "0" | "false" => Some(false),
			"1" | "true" => Some(true),
			other => {
				warn!(value = other, "unrecognised foundintitle flag, treating as false");
				Some(false)
			}
		},
		other => {
			warn!(value = %other, "unrecognised foundintitle flag, treating as false");
			Some(false)
		}
	};
	Ok(flag)
}

fn deserialize_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	match Value::deserialize(deserializer)? {
		Value::String(s) => Ok(Some(s)),
		_ => Ok(None),
	}
}
