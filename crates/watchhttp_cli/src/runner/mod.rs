use std::process::Stdio;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, SystemTime};

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::body::BodySource;
use crate::error::{CliError, Result};

#[derive(Debug, Default)]
struct Snapshot {
	stdout: Vec<u8>,
	updated_at: Option<SystemTime>,
}

/// Runs a command on an interval and keeps its latest stdout.
#[derive(Debug)]
pub(crate) struct CmdRunner {
	command: Vec<String>,
	interval: Duration,
	snapshot: RwLock<Snapshot>,
}

impl CmdRunner {
	pub(crate) fn new(command: Vec<String>, interval: Duration) -> Self {
		Self {
			command,
			interval,
			snapshot: RwLock::new(Snapshot::default()),
		}
	}

	/// Execute now, then once per interval. Only returns on failure.
	pub(crate) async fn run(&self) -> Result<()> {
		let mut ticker = time::interval(self.interval);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
		loop {
			ticker.tick().await;
			self.run_once().await?;
		}
	}

	/// Execute the command once and replace the snapshot with its stdout.
	pub(crate) async fn run_once(&self) -> Result<()> {
		let Some((program, args)) = self.command.split_first() else {
			return Err(CliError::MissingCommand);
		};

		let mut child = Command::new(program)
			.args(args)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.kill_on_drop(true)
			.spawn()
			.map_err(|source| CliError::Spawn {
				command: self.label(),
				source,
			})?;
		let Some(mut stdout) = child.stdout.take() else {
			return Err(CliError::NoStdout { command: self.label() });
		};

		let mut captured = Vec::new();
		stdout.read_to_end(&mut captured).await?;
		debug!(bytes = captured.len(), command = %self.label(), "captured snapshot");
		self.store(captured);

		let status = child.wait().await?;
		if !status.success() {
			return Err(CliError::CommandFailed {
				command: self.label(),
				status,
			});
		}
		Ok(())
	}

	fn store(&self, stdout: Vec<u8>) {
		let mut snapshot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
		snapshot.stdout = stdout;
		snapshot.updated_at = Some(SystemTime::now());
	}

	fn label(&self) -> String {
		self.command.join(" ")
	}
}

impl BodySource for CmdRunner {
	fn last_updated_at(&self) -> Option<SystemTime> {
		self.snapshot.read().unwrap_or_else(PoisonError::into_inner).updated_at
	}

	fn write_body(&self, sink: &mut Vec<u8>) -> Result<Option<SystemTime>> {
		let snapshot = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
		sink.extend_from_slice(&snapshot.stdout);
		Ok(snapshot.updated_at)
	}
}
