use std::io::Write;

use crate::htmljson::row::RowWriter;
use crate::htmljson::{FieldValue, MarshalErrors, MarshalIssue, RendererConfig, Value};

/// Converts a decoded document into indented HTML, one wrapped row per line.
///
/// Every element renderer receives the JSON-path of its element, so output can
/// carry stable hooks for CSS styling, CSS animations, and JavaScript events.
/// Object keys are emitted in ascending order and array elements in index order,
/// so output is deterministic for a given document.
///
/// Per-call state lives only for the duration of one [`Marshaler::marshal_to`]
/// call; any state that must survive calls belongs to the configured renderers.
#[derive(Clone, Default)]
pub struct Marshaler {
	config: RendererConfig,
}

impl Marshaler {
	/// Create a marshaler over the given renderers.
	pub fn new(config: RendererConfig) -> Self {
		Self { config }
	}

	/// Renderers used by this marshaler.
	pub fn config(&self) -> &RendererConfig {
		&self.config
	}

	/// Marshal into a fresh buffer, discarding collected issues.
	pub fn marshal(&self, value: &Value) -> Vec<u8> {
		let mut out = Vec::new();
		let _ = self.marshal_to(&mut out, value);
		out
	}

	/// Marshal `value` into `sink`.
	///
	/// The walk never stops early: unsupported nodes are skipped and sink
	/// failures recorded, and everything else is still emitted. All issues are
	/// returned together.
	pub fn marshal_to(&self, sink: &mut dyn Write, value: &Value) -> Result<(), MarshalErrors> {
		let mut walk = Walk {
			config: &self.config,
			rows: RowWriter::new(sink, &*self.config.row),
			path: String::from(ROOT_PATH),
			depth: 0,
			errors: MarshalErrors::default(),
		};
		walk.value(value);
		walk.rows.flush(walk.depth);

		let Walk { rows, mut errors, .. } = walk;
		errors.extend(rows.into_issues());
		errors.into_result()
	}
}

const ROOT_PATH: &str = "$";

struct Walk<'a> {
	config: &'a RendererConfig,
	rows: RowWriter<'a>,
	path: String,
	depth: usize,
	errors: MarshalErrors,
}

impl Walk<'_> {
	fn value(&mut self, value: &Value) {
		let config = self.config;
		match value {
			Value::Null => self.rows.write(&(config.null)(&self.path)),
			Value::Bool(v) => self.rows.write(&(config.bool)(&self.path, *v)),
			Value::String(v) => self.rows.write(&(config.string)(&self.path, v)),
			Value::Number(v) => self.rows.write(&(config.number)(&self.path, *v, &canonical_number(*v))),
			Value::Array(items) => self.array(items),
			Value::Object(fields) => self.object(fields),
			Value::Unsupported(_) => self.errors.push(MarshalIssue::Unsupported { path: self.path.clone() }),
		}
	}

	fn array(&mut self, items: &[Value]) {
		let config = self.config;
		let html = &config.array;
		self.rows.write(&html.open_bracket);
		if items.is_empty() {
			self.rows.write(&html.close_bracket);
			return;
		}

		let (parent_len, depth) = (self.path.len(), self.depth);
		self.rows.flush(depth);
		self.depth = depth + 1;

		for (idx, item) in items.iter().enumerate() {
			if idx > 0 {
				self.rows.write(&html.comma);
				self.rows.flush(self.depth);
			}

			self.path.truncate(parent_len);
			push_index(&mut self.path, idx);

			// empty lead fragment keeps element rows shaped like object entry rows
			self.rows.write("");
			self.value(item);
		}

		self.rows.flush(self.depth);
		self.path.truncate(parent_len);
		self.depth = depth;
		self.rows.write(&html.close_bracket);
	}

	fn object(&mut self, fields: &[FieldValue]) {
		let config = self.config;
		let html = &config.map;
		self.rows.write(&html.open_brace);
		if fields.is_empty() {
			self.rows.write(&html.close_brace);
			return;
		}

		let mut sorted: Vec<&FieldValue> = fields.iter().collect();
		sorted.sort_by(|a, b| a.name.cmp(&b.name));

		let (parent_len, depth) = (self.path.len(), self.depth);
		self.rows.flush(depth);
		self.depth = depth + 1;

		for (idx, field) in sorted.into_iter().enumerate() {
			if idx > 0 {
				self.rows.write(&html.comma);
				self.rows.flush(self.depth);
			}

			self.path.truncate(parent_len);
			push_field(&mut self.path, &field.name);

			self.rows.write(&(html.key)(&self.path, &field.name));
			self.rows.write(&html.colon);
			self.value(&field.value);
		}

		self.rows.flush(self.depth);
		self.path.truncate(parent_len);
		self.depth = depth;
		self.rows.write(&html.close_brace);
	}
}

/// Object fields join with an unconditional `.`, whatever characters the key holds.
fn push_field(path: &mut String, name: &str) {
	path.push('.');
	path.push_str(name);
}

fn push_index(path: &mut String, idx: usize) {
	path.push('[');
	path.push_str(&idx.to_string());
	path.push(']');
}

/// Shortest text that parses back to `value`, never in exponent form.
///
/// Integral values carry no fractional part (`1`, not `1.0`). Non-finite
/// values render as `NaN`, `+Inf`, and `-Inf`.
pub fn canonical_number(value: f64) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
	}
	value.to_string()
}

/// JSON-paths of every node in `value`, in emission order.
///
/// Containers appear once, at the position of their opening bracket.
pub fn node_paths(value: &Value) -> Vec<String> {
	let mut out = Vec::new();
	let mut path = String::from(ROOT_PATH);
	collect_paths(value, &mut path, &mut out);
	out
}

fn collect_paths(value: &Value, path: &mut String, out: &mut Vec<String>) {
	out.push(path.clone());
	let parent_len = path.len();
	match value {
		Value::Array(items) => {
			for (idx, item) in items.iter().enumerate() {
				push_index(path, idx);
				collect_paths(item, path, out);
				path.truncate(parent_len);
			}
		}
		Value::Object(fields) => {
			let mut sorted: Vec<&FieldValue> = fields.iter().collect();
			sorted.sort_by(|a, b| a.name.cmp(&b.name));
			for field in sorted {
				push_field(path, &field.name);
				collect_paths(&field.value, path, out);
				path.truncate(parent_len);
			}
		}
		_ => {}
	}
}

#[cfg(test)]
mod tests;
