mod collector;
mod config;
mod error;
mod marshaler;
mod page;
mod row;
mod value;

/// Renderer config that records every path it is called with.
pub use collector::JsonPathCollector;
/// Pluggable element renderers and their defaults.
pub use config::{
	ArrayHtml, BoolFn, KeyFn, MapHtml, NullFn, NumberFn, PaddedRow, RendererConfig, RowFn, StringFn, bool_html, key_html, null_html, number_html,
	string_html,
};
/// Collected rendering issues.
pub use error::{MarshalErrors, MarshalIssue};
/// Structural marshaler entry points.
pub use marshaler::{Marshaler, canonical_number, node_paths};
/// Full-page wrapping of marshaled fragments.
pub use page::{DEFAULT_PAGE_TEMPLATE, JSON_PLACEHOLDER, PageMarshaler, TITLE_PLACEHOLDER, YAML_PLACEHOLDER, marshal_html};
/// Dynamic document tree.
pub use value::{FieldValue, Value};
