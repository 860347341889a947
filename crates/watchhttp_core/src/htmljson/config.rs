use std::sync::Arc;

/// Renders `null` at a path.
pub type NullFn = Arc<dyn Fn(&str) -> String + Send + Sync>;
/// Renders a boolean at a path.
pub type BoolFn = Arc<dyn Fn(&str, bool) -> String + Send + Sync>;
/// Renders a string at a path.
pub type StringFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;
/// Renders a number at a path, given the value and its canonical text.
pub type NumberFn = Arc<dyn Fn(&str, f64, &str) -> String + Send + Sync>;
/// Renders an object key at the path of its entry.
pub type KeyFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;
/// Wraps one row of fragments for the given depth.
pub type RowFn = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// Fixed array fragments.
#[derive(Debug, Clone)]
pub struct ArrayHtml {
	/// Emitted before the first element.
	pub open_bracket: String,
	/// Emitted after the last element.
	pub close_bracket: String,
	/// Emitted at the end of every element row but the last.
	pub comma: String,
}

impl Default for ArrayHtml {
	fn default() -> Self {
		Self {
			open_bracket: r#"<div class="json-lang">[</div>"#.to_owned(),
			close_bracket: r#"<div class="json-lang">]</div>"#.to_owned(),
			comma: r#"<div class="json-lang">,</div>"#.to_owned(),
		}
	}
}

/// Fixed object fragments plus the key renderer.
#[derive(Clone)]
pub struct MapHtml {
	/// Emitted before the first entry.
	pub open_brace: String,
	/// Emitted after the last entry.
	pub close_brace: String,
	/// Emitted at the end of every entry row but the last.
	pub comma: String,
	/// Emitted between key and value.
	pub colon: String,
	/// Key renderer.
	pub key: KeyFn,
}

impl Default for MapHtml {
	fn default() -> Self {
		Self {
			open_brace: r#"<div class="json-lang">{</div>"#.to_owned(),
			close_brace: r#"<div class="json-lang">}</div>"#.to_owned(),
			comma: r#"<div class="json-lang">,</div>"#.to_owned(),
			colon: r#"<div class="json-lang">:</div>"#.to_owned(),
			key: Arc::new(key_html),
		}
	}
}

/// Element-to-HTML functions consumed by [`Marshaler`](crate::htmljson::Marshaler).
///
/// Cheap to clone; every renderer is shared.
#[derive(Clone)]
pub struct RendererConfig {
	/// `null` renderer.
	pub null: NullFn,
	/// Boolean renderer.
	pub bool: BoolFn,
	/// String renderer.
	pub string: StringFn,
	/// Number renderer.
	pub number: NumberFn,
	/// Array fragments.
	pub array: ArrayHtml,
	/// Object fragments.
	pub map: MapHtml,
	/// Row wrapper.
	pub row: RowFn,
}

impl Default for RendererConfig {
	fn default() -> Self {
		let row = PaddedRow::default();
		Self {
			null: Arc::new(null_html),
			bool: Arc::new(bool_html),
			string: Arc::new(string_html),
			number: Arc::new(number_html),
			array: ArrayHtml::default(),
			map: MapHtml::default(),
			row: Arc::new(move |text: &str, depth: usize| row.wrap(text, depth)),
		}
	}
}

impl RendererConfig {
	/// Replace the number renderer.
	pub fn with_number<F>(mut self, number: F) -> Self
	where
		F: Fn(&str, f64, &str) -> String + Send + Sync + 'static,
	{
		self.number = Arc::new(number);
		self
	}

	/// Replace the row wrapper.
	pub fn with_row<F>(mut self, row: F) -> Self
	where
		F: Fn(&str, usize) -> String + Send + Sync + 'static,
	{
		self.row = Arc::new(row);
		self
	}
}

/// Default `null` renderer.
pub fn null_html(_path: &str) -> String {
	r#"<div class="json-lang json-value json-null">null</div>"#.to_owned()
}

/// Default boolean renderer.
pub fn bool_html(_path: &str, value: bool) -> String {
	format!(r#"<div class="json-lang json-value json-bool">{value}</div>"#)
}

/// Default string renderer. The value is emitted verbatim, without HTML escaping.
pub fn string_html(_path: &str, value: &str) -> String {
	format!(r#"<div class="json-value json-string">"{value}"</div>"#)
}

/// Default number renderer.
pub fn number_html(_path: &str, _value: f64, text: &str) -> String {
	format!(r#"<div class="json-value json-number">{text}</div>"#)
}

/// Default key renderer. The key is emitted verbatim, without HTML escaping.
pub fn key_html(_path: &str, key: &str) -> String {
	format!(r#"<div class="json-key json-string">{key}</div>"#)
}

/// Row wrapper indenting each depth level by `padding` non-breaking spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedRow {
	/// Non-breaking spaces per depth level.
	pub padding: usize,
}

impl Default for PaddedRow {
	fn default() -> Self {
		Self { padding: 4 }
	}
}

impl PaddedRow {
	/// Wrap `row` in a container row div with a leading padding div.
	pub fn wrap(&self, row: &str, depth: usize) -> String {
		let pad = "&nbsp;".repeat(self.padding * depth);
		format!(r#"<div class="json-container-row"><div class="json-container-padding">{pad}</div>{row}</div>"#)
	}
}
