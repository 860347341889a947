use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use tracing::{debug, warn};
use watchhttp::delta::DeltaRenderer;

use crate::body::BodySource;
use crate::error::Result;

struct CacheState {
	renderer: DeltaRenderer,
	raw: Vec<u8>,
	output: Vec<u8>,
	last_seen: Option<SystemTime>,
}

/// Renders each snapshot of `S` once and serves the cached page until the
/// snapshot changes.
pub(crate) struct CachedRenderer<S> {
	source: Arc<S>,
	state: Mutex<CacheState>,
}

impl<S: BodySource> CachedRenderer<S> {
	pub(crate) fn new(source: Arc<S>, renderer: DeltaRenderer) -> Self {
		Self {
			source,
			state: Mutex::new(CacheState {
				renderer,
				raw: Vec::new(),
				output: Vec::new(),
				last_seen: None,
			}),
		}
	}

	fn refresh(&self, state: &mut CacheState) -> Result<()> {
		let current = self.source.last_updated_at();
		if current.is_none() || current == state.last_seen {
			return Ok(());
		}

		state.raw.clear();
		state.last_seen = self.source.write_body(&mut state.raw)?;
		state.output.clear();
		match state.renderer.render(&state.raw, &mut state.output) {
			Ok(()) => debug!(bytes = state.output.len(), "rendered snapshot"),
			Err(err) => warn!(%err, "snapshot rendered with errors"),
		}
		Ok(())
	}
}

impl<S: BodySource> BodySource for CachedRenderer<S> {
	fn last_updated_at(&self) -> Option<SystemTime> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner).last_seen
	}

	fn write_body(&self, sink: &mut Vec<u8>) -> Result<Option<SystemTime>> {
		let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
		self.refresh(&mut state)?;
		sink.extend_from_slice(&state.output);
		Ok(state.last_seen)
	}
}
