use std::time::SystemTime;

use crate::error::Result;

/// Anything that can produce the current response body.
pub(crate) trait BodySource: Send + Sync {
	/// Time the underlying snapshot was captured, `None` before the first one.
	fn last_updated_at(&self) -> Option<SystemTime>;

	/// Append the current body to `sink`, returning the capture time of the
	/// snapshot it was produced from.
	fn write_body(&self, sink: &mut Vec<u8>) -> Result<Option<SystemTime>>;
}
