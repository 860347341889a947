use std::io::Write;

use crate::htmljson::{MarshalErrors, MarshalIssue, Marshaler, Value};

/// Built-in page that styles the default `json-*` classes.
pub const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../../assets/default_page.html");

/// Placeholder replaced by the page title.
pub const TITLE_PLACEHOLDER: &str = "{{.Title}}";
/// Placeholder replaced by marshaled JSON rows.
pub const JSON_PLACEHOLDER: &str = "{{.HTMLJSON}}";
/// Placeholder replaced by marshaled rows in YAML pages.
pub const YAML_PLACEHOLDER: &str = "{{.HTMLYAML}}";

/// Embeds marshaled rows into a full HTML page template.
///
/// Substitution is literal and global: every occurrence of the title
/// placeholder is replaced first, then every occurrence of the body placeholder.
#[derive(Clone)]
pub struct PageMarshaler {
	/// Page template text.
	pub template: String,
	/// Text substituted for [`TITLE_PLACEHOLDER`].
	pub title: String,
	/// Placeholder substituted with the marshaled rows.
	pub placeholder: String,
	/// Structural marshaler producing the rows.
	pub marshaler: Marshaler,
}

impl Default for PageMarshaler {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_TEMPLATE, "", Marshaler::default())
	}
}

impl PageMarshaler {
	/// Create a page marshaler substituting rows for [`JSON_PLACEHOLDER`].
	pub fn new(template: impl Into<String>, title: impl Into<String>, marshaler: Marshaler) -> Self {
		Self {
			template: template.into(),
			title: title.into(),
			placeholder: JSON_PLACEHOLDER.to_owned(),
			marshaler,
		}
	}

	/// Substitute rows for `placeholder` instead.
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	/// Marshal into a fresh buffer, discarding collected issues.
	pub fn marshal(&self, value: &Value) -> Vec<u8> {
		let mut out = Vec::new();
		let _ = self.marshal_to(&mut out, value);
		out
	}

	/// Render `value` and write the substituted page to `sink`.
	///
	/// The page is written even when marshaling collected issues.
	pub fn marshal_to(&self, sink: &mut dyn Write, value: &Value) -> Result<(), MarshalErrors> {
		let mut rows = Vec::new();
		let mut errors = self.marshaler.marshal_to(&mut rows, value).err().unwrap_or_default();

		let page = self.substitute(&String::from_utf8_lossy(&rows));
		if let Err(err) = sink.write_all(page.as_bytes()) {
			errors.push(MarshalIssue::Write(err));
		}
		errors.into_result()
	}

	fn substitute(&self, rows: &str) -> String {
		self.template.replace(TITLE_PLACEHOLDER, &self.title).replace(&self.placeholder, rows)
	}
}

/// Render `value` into the built-in page with default renderers.
pub fn marshal_html(value: &Value) -> Vec<u8> {
	PageMarshaler::default().marshal(value)
}
