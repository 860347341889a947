use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use crate::htmljson::{JSON_PLACEHOLDER, MarshalErrors, Marshaler, PageMarshaler, RendererConfig, Value, YAML_PLACEHOLDER};
use crate::{Result, decode_json, decode_yaml};

/// Delta page for JSON snapshots.
pub const DELTA_JSON_TEMPLATE: &str = include_str!("../../assets/delta_json.html");
/// Delta page for YAML snapshots.
pub const DELTA_YAML_TEMPLATE: &str = include_str!("../../assets/delta_yaml.html");

/// Snapshot encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// JSON document.
	Json,
	/// YAML document.
	Yaml,
}

impl Format {
	fn decode(self, input: &[u8]) -> Result<Value> {
		match self {
			Self::Json => decode_json(input),
			Self::Yaml => decode_yaml(input),
		}
	}

	fn template(self) -> (&'static str, &'static str) {
		match self {
			Self::Json => (DELTA_JSON_TEMPLATE, JSON_PLACEHOLDER),
			Self::Yaml => (DELTA_YAML_TEMPLATE, YAML_PLACEHOLDER),
		}
	}
}

/// Direction of a number relative to the previous value at its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
	/// Greater than before.
	Up,
	/// Less than before.
	Down,
	/// First sighting, equal, or incomparable (NaN).
	Unchanged,
}

impl Trend {
	/// CSS class attached to the number.
	pub fn class(self) -> &'static str {
		match self {
			Self::Up => "number-up",
			Self::Down => "number-down",
			Self::Unchanged => "",
		}
	}
}

/// Last emitted number per JSON-path. Grows with the set of numeric paths seen.
#[derive(Debug, Default)]
pub struct NumberMemory {
	last: HashMap<String, f64>,
}

impl NumberMemory {
	/// Compare `value` with the previous one at `path`, then remember `value`.
	pub fn observe(&mut self, path: &str, value: f64) -> Trend {
		let trend = match self.last.get(path) {
			Some(prev) if value > *prev => Trend::Up,
			Some(prev) if value < *prev => Trend::Down,
			_ => Trend::Unchanged,
		};
		match self.last.get_mut(path) {
			Some(slot) => *slot = value,
			None => {
				self.last.insert(path.to_owned(), value);
			}
		}
		trend
	}

	/// Last number remembered at `path`.
	pub fn get(&self, path: &str) -> Option<f64> {
		self.last.get(path).copied()
	}

	/// Number of remembered paths.
	pub fn len(&self) -> usize {
		self.last.len()
	}

	/// Whether no number has been seen yet.
	pub fn is_empty(&self) -> bool {
		self.last.is_empty()
	}
}

/// Renders snapshots as HTML pages whose numbers carry `number-up` /
/// `number-down` classes relative to the previous render.
///
/// Not idempotent: every render updates the number memory, so the same
/// snapshot must be rendered once and its output reused. Not meant for
/// concurrent use; callers serialize access.
pub struct DeltaRenderer {
	format: Format,
	page: PageMarshaler,
	memory: Arc<Mutex<NumberMemory>>,
}

impl DeltaRenderer {
	/// Create a renderer for `format` snapshots with the given page title.
	pub fn new(format: Format, title: impl Into<String>) -> Self {
		let memory = Arc::new(Mutex::new(NumberMemory::default()));
		let config = RendererConfig::default().with_number(delta_number(Arc::clone(&memory)));
		let (template, placeholder) = format.template();
		let page = PageMarshaler::new(template, title, Marshaler::new(config)).with_placeholder(placeholder);
		Self { format, page, memory }
	}

	/// Renderer for JSON snapshots.
	pub fn json(title: impl Into<String>) -> Self {
		Self::new(Format::Json, title)
	}

	/// Renderer for YAML snapshots.
	pub fn yaml(title: impl Into<String>) -> Self {
		Self::new(Format::Yaml, title)
	}

	/// Snapshot encoding this renderer decodes.
	pub fn format(&self) -> Format {
		self.format
	}

	/// Marshal `value` as rows only, without the page around them.
	pub fn marshal_to(&mut self, sink: &mut dyn Write, value: &Value) -> std::result::Result<(), MarshalErrors> {
		self.page.marshaler.marshal_to(sink, value)
	}

	/// Decode one snapshot and write the full delta page to `sink`.
	///
	/// Decode failures write nothing. Render issues are returned after the
	/// page has been written.
	pub fn render(&mut self, input: &[u8], sink: &mut dyn Write) -> Result<()> {
		let value = self.format.decode(input)?;
		self.page.marshal_to(sink, &value)?;
		Ok(())
	}

	/// Last number rendered at `path`.
	pub fn last_number(&self, path: &str) -> Option<f64> {
		self.memory.lock().unwrap_or_else(PoisonError::into_inner).get(path)
	}
}

fn delta_number(memory: Arc<Mutex<NumberMemory>>) -> impl Fn(&str, f64, &str) -> String + Send + Sync + 'static {
	move |path: &str, value: f64, text: &str| {
		let trend = memory.lock().unwrap_or_else(PoisonError::into_inner).observe(path, value);
		format!(r#"<div class="json-value json-number {}">{text}</div>"#, trend.class())
	}
}
