use std::future::IntoFuture;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, LAST_MODIFIED};
use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tracing::{error, info};
use watchhttp::delta::DeltaRenderer;

use crate::args::{Config, ServeMode};
use crate::body::BodySource;
use crate::cache::CachedRenderer;
use crate::error::Result;
use crate::runner::CmdRunner;

const REFRESH: HeaderName = HeaderName::from_static("refresh");

#[derive(Clone)]
pub(crate) struct AppState {
	body: Arc<dyn BodySource>,
	content_type: Option<&'static str>,
	refresh: HeaderValue,
}

impl AppState {
	pub(crate) fn new(body: Arc<dyn BodySource>, content_type: Option<&'static str>, interval: Duration) -> Self {
		Self {
			body,
			content_type,
			refresh: refresh_value(interval),
		}
	}
}

/// Run the command loop and the HTTP server until either fails.
pub(crate) async fn serve(config: Config) -> Result<()> {
	let runner = Arc::new(CmdRunner::new(config.command.clone(), config.interval));
	let body: Arc<dyn BodySource> = match config.mode {
		ServeMode::Raw => runner.clone(),
		ServeMode::Delta(format) => Arc::new(CachedRenderer::new(Arc::clone(&runner), DeltaRenderer::new(format, config.title()))),
	};
	let app = router(AppState::new(body, config.content_type, config.interval));

	let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
	info!(
		"serving at port={} with interval={:?} latest STDOUT of command: {}",
		config.port,
		config.interval,
		config.title()
	);

	tokio::select! {
		result = runner.run() => result,
		result = axum::serve(listener, app).into_future() => Ok(result?),
	}
}

/// Every method and path goes to the same handler.
pub(crate) fn router(state: AppState) -> Router {
	Router::new().fallback(handle).with_state(state)
}

async fn handle(State(state): State<AppState>) -> Response {
	let mut body = Vec::new();
	let updated_at = match state.body.write_body(&mut body) {
		Ok(updated_at) => updated_at,
		Err(err) => {
			error!(%err, "write response body");
			state.body.last_updated_at()
		}
	};

	let mut response = Response::new(Body::from(body));
	let headers = response.headers_mut();
	if let Some(content_type) = state.content_type {
		headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
	}
	if let Some(updated_at) = updated_at
		&& let Ok(value) = HeaderValue::from_str(&http_date(updated_at))
	{
		headers.insert(LAST_MODIFIED, value);
	}
	headers.insert(REFRESH, state.refresh.clone());
	response
}

/// Format as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
pub(crate) fn http_date(time: SystemTime) -> String {
	DateTime::<Utc>::from(time).format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Interval in whole seconds, halves rounded to even.
fn refresh_value(interval: Duration) -> HeaderValue {
	HeaderValue::from(interval.as_secs_f64().round_ties_even() as u64)
}
