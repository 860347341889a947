use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::htmljson::{MapHtml, RendererConfig};

/// Records which JSON-paths renderers were called with, and with what value.
///
/// Scalars record their text (`null` as `"null"`, numbers as canonical text);
/// object keys record the key at the path of their entry. A scalar entry
/// overwrites its key, so containers are left holding their key.
#[derive(Debug, Clone, Default)]
pub struct JsonPathCollector {
	seen: Arc<Mutex<BTreeMap<String, String>>>,
}

impl JsonPathCollector {
	/// Create an empty collector.
	pub fn new() -> Self {
		Self::default()
	}

	/// Renderers that record into this collector and emit nothing for values.
	pub fn config(&self) -> RendererConfig {
		let base = RendererConfig::default();
		let null = self.clone();
		let boolean = self.clone();
		let string = self.clone();
		let number = self.clone();
		let key = self.clone();
		RendererConfig {
			null: Arc::new(move |path: &str| null.add(path, "null")),
			bool: Arc::new(move |path: &str, value: bool| boolean.add(path, &value.to_string())),
			string: Arc::new(move |path: &str, value: &str| string.add(path, value)),
			number: Arc::new(move |path: &str, _value: f64, text: &str| number.add(path, text)),
			map: MapHtml {
				key: Arc::new(move |path: &str, name: &str| key.add(path, name)),
				..base.map
			},
			..base
		}
	}

	/// Recorded `path -> value` pairs, ordered by path.
	pub fn paths(&self) -> BTreeMap<String, String> {
		self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	fn add(&self, path: &str, value: &str) -> String {
		self.seen.lock().unwrap_or_else(PoisonError::into_inner).insert(path.to_owned(), value.to_owned());
		String::new()
	}
}
