use thiserror::Error;

use crate::htmljson::MarshalErrors;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while decoding snapshots and rendering them as HTML pages.
#[derive(Debug, Error)]
pub enum Error {
	/// Sink or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot is not valid JSON.
	#[error("decode json: {0}")]
	Json(#[from] serde_json::Error),
	/// Snapshot is not valid YAML.
	#[error("decode yaml: {0}")]
	Yaml(#[from] serde_yaml::Error),
	/// Rendering completed with collected issues; output may be partial.
	#[error("render: {0}")]
	Marshal(#[from] MarshalErrors),
}
