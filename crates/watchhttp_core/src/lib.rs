//! Public library API for rendering JSON/YAML snapshots as HTML with numeric deltas.

/// Stateful page renderer that tags numbers changed since the previous snapshot.
pub mod delta;
/// Structural JSON-to-HTML marshaling with pluggable element renderers.
pub mod htmljson;

mod decode;
mod error;

/// Snapshot decoders producing the dynamic value tree.
pub use decode::{decode_json, decode_yaml};
/// Error and result aliases.
pub use error::{Error, Result};
