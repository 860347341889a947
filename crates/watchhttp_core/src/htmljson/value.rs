/// Decoded dynamic document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// JSON `null`.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Numeric scalar; every number is a double.
	Number(f64),
	/// String scalar.
	String(Box<str>),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Mapping in source order; emitted sorted by key.
	Object(Vec<FieldValue>),
	/// Node kind the marshaler cannot render, named by its source kind.
	Unsupported(&'static str),
}

/// One object entry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Entry key.
	pub name: Box<str>,
	/// Entry value.
	pub value: Value,
}

impl FieldValue {
	/// Create an object entry.
	pub fn new(name: impl Into<Box<str>>, value: Value) -> Self {
		Self { name: name.into(), value }
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(v) => Value::Bool(v),
			serde_json::Value::Number(v) => v.as_f64().map_or(Value::Unsupported("number"), Value::Number),
			serde_json::Value::String(v) => Value::String(v.into_boxed_str()),
			serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(map) => Value::Object(map.into_iter().map(|(name, value)| FieldValue::new(name, value.into())).collect()),
		}
	}
}

impl From<serde_yaml::Value> for Value {
	fn from(value: serde_yaml::Value) -> Self {
		match value {
			serde_yaml::Value::Null => Value::Null,
			serde_yaml::Value::Bool(v) => Value::Bool(v),
			serde_yaml::Value::Number(v) => v.as_f64().map_or(Value::Unsupported("number"), Value::Number),
			serde_yaml::Value::String(v) => Value::String(v.into_boxed_str()),
			serde_yaml::Value::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
			serde_yaml::Value::Mapping(map) => {
				let mut fields = Vec::with_capacity(map.len());
				for (key, value) in map {
					let Some(name) = yaml_key(key) else {
						return Value::Unsupported("complex-key mapping");
					};
					fields.push(FieldValue::new(name, value.into()));
				}
				Value::Object(fields)
			}
			serde_yaml::Value::Tagged(_) => Value::Unsupported("tagged"),
		}
	}
}

/// Scalar YAML keys are stringified; sequences, mappings, and tagged keys have no path form.
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
	match key {
		serde_yaml::Value::String(v) => Some(v),
		serde_yaml::Value::Bool(v) => Some(v.to_string()),
		serde_yaml::Value::Number(v) => Some(v.to_string()),
		serde_yaml::Value::Null => Some("null".to_owned()),
		_ => None,
	}
}
