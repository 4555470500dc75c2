// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The extension record shown on the detail page.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A directory field: a raw `value` plus an optional display `text`.
///
/// Bare scalars are accepted too and become the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
	pub value: Value,
	pub text: Option<String>,
}

impl<'de> Deserialize<'de> for Field {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = Value::deserialize(deserializer)?;
		Ok(match raw {
			Value::Object(mut obj) if obj.contains_key("value") || obj.contains_key("text") => {
				let value = obj.remove("value").unwrap_or(Value::Null);
				let text = match obj.remove("text") {
					Some(Value::String(s)) => Some(s),
					Some(Value::Null) | None => None,
					Some(other) => Some(scalar_string(&other)),
				};
				Field { value, text }
			}
			other => Field {
				value: other,
				text: None,
			},
		})
	}
}

impl Field {
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			text: None,
		}
	}

	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.text = Some(text.into());
		self
	}

	/// The value as a string; non-scalar values are empty.
	pub fn value_str(&self) -> String {
		scalar_string(&self.value)
	}

	/// The display text, falling back to the value.
	pub fn text_str(&self) -> String {
		self.text.clone().unwrap_or_else(|| self.value_str())
	}

	/// Loose truthiness: null, false, 0, "", "0" and empty lists are unset.
	pub fn is_set(&self) -> bool {
		is_truthy(&self.value)
	}

	/// The value read as a list of strings (for tag lists).
	pub fn value_list(&self) -> Vec<String> {
		match &self.value {
			Value::Array(values) => values.iter().map(scalar_string).collect(),
			Value::String(s) if !s.is_empty() => vec![s.clone()],
			_ => Vec::new(),
		}
	}

	pub fn value_i64(&self) -> Option<i64> {
		match &self.value {
			Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
			Value::String(s) => s.trim().parse().ok(),
			Value::Bool(b) => Some(i64::from(*b)),
			_ => None,
		}
	}
}

fn scalar_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Number(n) => n.to_string(),
		Value::Bool(true) => "1".to_string(),
		_ => String::new(),
	}
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
		Value::String(s) => !(s.is_empty() || s == "0"),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}

/// How the extension is obtained.
///
/// Older records carry a number, newer ones a labelled object such as
/// `{"value": "free"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DownloadType {
	#[default]
	Missing,
	Numeric(i64),
	Labeled(String),
}

impl DownloadType {
	pub fn numeric(&self) -> Option<i64> {
		match self {
			DownloadType::Numeric(n) => Some(*n),
			_ => None,
		}
	}

	/// Lower-cased label; empty for numeric or missing types.
	pub fn label(&self) -> String {
		match self {
			DownloadType::Labeled(label) => label.to_lowercase(),
			_ => String::new(),
		}
	}

	pub fn is(&self, n: i64) -> bool {
		self.numeric() == Some(n)
	}
}

impl<'de> Deserialize<'de> for DownloadType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		Ok(match value {
			Value::Null => DownloadType::Missing,
			Value::Number(n) => n
				.as_i64()
				.map(DownloadType::Numeric)
				.unwrap_or(DownloadType::Missing),
			Value::String(s) => match s.trim().parse::<i64>() {
				Ok(n) => DownloadType::Numeric(n),
				Err(_) => DownloadType::Labeled(s),
			},
			Value::Object(obj) => {
				DownloadType::Labeled(obj.get("value").map(scalar_string).unwrap_or_default())
			}
			Value::Bool(_) | Value::Array(_) => DownloadType::Missing,
		})
	}
}

/// Everything the detail page reads about one extension.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExtensionDetail {
	pub link_id: Option<Value>,
	pub core_title: Field,
	pub core_alias: Field,
	pub core_body: Field,
	pub core_created_time: Field,
	pub core_modified_time: Field,
	pub core_created_user_id: Field,
	pub popular: Field,
	pub image: Option<String>,
	pub score: Field,
	pub num_reviews: Field,
	pub version: Field,
	pub license: Field,
	#[serde(rename = "type")]
	pub kind: Field,
	pub includes: Field,
	pub download_type: DownloadType,
	pub downloadurl: Option<String>,
	pub download_link: Field,
	pub requires_registration: Field,
	pub homepage_link: Field,
}

impl ExtensionDetail {
	pub fn title(&self) -> String {
		self.core_title.value_str()
	}

	/// Anything other than a free listing is commercial.
	pub fn is_commercial(&self) -> bool {
		self.kind.value_str() != "free"
	}

	pub fn is_popular(&self) -> bool {
		self.popular.value_i64() == Some(1)
	}

	pub fn tags(&self) -> Vec<String> {
		self.includes.value_list()
	}

	pub fn link_id(&self) -> Option<String> {
		self.link_id
			.as_ref()
			.map(scalar_string)
			.filter(|s| !s.is_empty())
	}

	pub fn download_url(&self) -> Option<&str> {
		self.downloadurl.as_deref().filter(|s| !s.is_empty())
	}
}
