use std::process::ExitStatus;

use thiserror::Error;

/// Crate-local result type.
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// Configuration, subprocess, and serving failures.
#[derive(Debug, Error)]
pub(crate) enum CliError {
	/// Flag parsing failed or help was requested; clap renders these itself.
	#[error(transparent)]
	Args(#[from] clap::Error),
	/// No command after the flags.
	#[error("missing command")]
	MissingCommand,
	/// Both `-json` and `-yaml` were given.
	#[error("-json and -yaml are mutually exclusive")]
	ConflictingFormats,
	/// `-d` was given without a snapshot format.
	#[error("-d requires -json or -yaml")]
	DeltaWithoutFormat,
	/// `-t` resolved to zero.
	#[error("interval must be greater than zero")]
	ZeroInterval,
	/// Socket or pipe IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// The command could not be started.
	#[error("start {command}: {source}")]
	Spawn {
		/// Command line as typed.
		command: String,
		/// Underlying launch failure.
		source: std::io::Error,
	},
	/// The child's stdout pipe was not available.
	#[error("{command}: stdout not captured")]
	NoStdout {
		/// Command line as typed.
		command: String,
	},
	/// The command exited unsuccessfully.
	#[error("{command}: {status}")]
	CommandFailed {
		/// Command line as typed.
		command: String,
		/// Exit status reported by the OS.
		status: ExitStatus,
	},
}
