use serde::Deserialize;

use crate::Result;
use crate::htmljson::Value;

/// Decode the first JSON document in `input`.
///
/// Empty or whitespace-only input decodes to `null`. Bytes after the first
/// document are ignored.
pub fn decode_json(input: &[u8]) -> Result<Value> {
	let mut documents = serde_json::Deserializer::from_slice(input).into_iter::<serde_json::Value>();
	match documents.next() {
		Some(document) => Ok(document?.into()),
		None => Ok(Value::Null),
	}
}

/// Decode the first YAML document in `input`.
///
/// Empty or whitespace-only input decodes to `null`.
pub fn decode_yaml(input: &[u8]) -> Result<Value> {
	if input.iter().all(u8::is_ascii_whitespace) {
		return Ok(Value::Null);
	}

	match serde_yaml::Deserializer::from_slice(input).next() {
		Some(document) => Ok(serde_yaml::Value::deserialize(document)?.into()),
		None => Ok(Value::Null),
	}
}
