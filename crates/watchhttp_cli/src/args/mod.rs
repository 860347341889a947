use std::time::Duration;

use clap::Parser;
use watchhttp::delta::Format;

use crate::error::{CliError, Result};
use crate::interval;

const TERMINATOR: &str = "--";

/// Long flags also accepted with a single dash.
const SINGLE_DASH_LONG: &[&str] = &["json", "yaml", "help"];

const EXAMPLES: &str = "\
Examples:
  $ watchhttp -t 1s -p 9000 -- ls -la
  $ watchhttp vmstat
  $ watchhttp tail /var/log/system.log
  $ watchhttp -json -- cat myfile.json
  $ watchhttp -p 9000 -json -- kubectl get pod mypod -o=json
  $ watchhttp -p 9000 -yaml -- kubectl get pod mypod -o=yaml
  $ watchhttp -p 9000 -json -d -- kubectl get pod mypod -o=json
  $ watchhttp curl ...
  $ watchhttp -json -- /bin/sh -c 'curl ... | jq'";

#[derive(Parser, Debug)]
#[command(
	name = "watchhttp",
	about = "Run command periodically and expose latest STDOUT as HTTP endpoint",
	override_usage = "watchhttp [flags] -- <cmd> [cmd-args...]",
	after_help = EXAMPLES
)]
struct Flags {
	/// port
	#[arg(short = 'p', default_value_t = 9000)]
	port: u16,
	/// interval to execute command (units: ns, us, µs, ms, s, m, h, d, w, y)
	#[arg(short = 't', default_value = "1s", value_parser = interval::parse)]
	interval: Duration,
	/// set Content-Type: application/json
	#[arg(long)]
	json: bool,
	/// set Content-Type: text/yaml
	#[arg(long)]
	yaml: bool,
	/// render numeric changes as animated HTML (requires -json or -yaml)
	#[arg(short = 'd')]
	delta: bool,
}

/// How captured stdout reaches the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ServeMode {
	/// Snapshot bytes as captured.
	Raw,
	/// Snapshot decoded and rendered as a delta-highlighted HTML page.
	Delta(Format),
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
	pub(crate) port: u16,
	pub(crate) interval: Duration,
	pub(crate) command: Vec<String>,
	pub(crate) content_type: Option<&'static str>,
	pub(crate) mode: ServeMode,
}

impl Config {
	/// Build a config from the arguments after the program name.
	pub(crate) fn from_args(args: &[String]) -> Result<Self> {
		let (command, has_flags) = command_from_args(args);
		let flags = if has_flags {
			let argv = std::iter::once("watchhttp".to_owned()).chain(flag_args(args).iter().map(|arg| normalize_flag(arg)));
			Flags::try_parse_from(argv)?
		} else {
			Flags::try_parse_from(["watchhttp"])?
		};

		if flags.json && flags.yaml {
			return Err(CliError::ConflictingFormats);
		}
		let mode = match (flags.delta, flags.json, flags.yaml) {
			(false, _, _) => ServeMode::Raw,
			(true, true, _) => ServeMode::Delta(Format::Json),
			(true, _, true) => ServeMode::Delta(Format::Yaml),
			(true, false, false) => return Err(CliError::DeltaWithoutFormat),
		};
		if flags.interval.is_zero() {
			return Err(CliError::ZeroInterval);
		}
		if command.is_empty() {
			return Err(CliError::MissingCommand);
		}

		let content_type = match mode {
			ServeMode::Delta(_) => Some("text/html; charset=utf-8"),
			ServeMode::Raw if flags.json => Some("application/json"),
			ServeMode::Raw if flags.yaml => Some("text/yaml"),
			ServeMode::Raw => None,
		};

		Ok(Self {
			port: flags.port,
			interval: flags.interval,
			command,
			content_type,
			mode,
		})
	}

	/// Command line joined with spaces; used as page title and in logs.
	pub(crate) fn title(&self) -> String {
		self.command.join(" ")
	}
}

/// Split the user command from tool flags.
///
/// The command is everything after the first `--`. Without a terminator the
/// whole list is the command. A command starting with `-` means there is no
/// command, only flags. Returns the command and whether flags must be parsed.
pub(crate) fn command_from_args(args: &[String]) -> (Vec<String>, bool) {
	let terminator = args.iter().position(|arg| arg == TERMINATOR);
	let has_flags = terminator.is_some_and(|idx| idx > 0);
	let start = terminator.map_or(0, |idx| idx + 1);

	match args.get(start) {
		None => (Vec::new(), has_flags),
		Some(first) if first.starts_with('-') => (Vec::new(), true),
		Some(_) => (args[start..].to_vec(), has_flags),
	}
}

fn flag_args(args: &[String]) -> &[String] {
	match args.iter().position(|arg| arg == TERMINATOR) {
		Some(idx) => &args[..idx],
		None => args,
	}
}

/// Rewrite `-json` style long flags to `--json`.
fn normalize_flag(arg: &str) -> String {
	let Some(body) = arg.strip_prefix('-') else {
		return arg.to_owned();
	};
	let name = body.split_once('=').map_or(body, |(name, _)| name);
	if SINGLE_DASH_LONG.contains(&name) { format!("-{arg}") } else { arg.to_owned() }
}
