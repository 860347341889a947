#![allow(missing_docs)]

mod args;
mod body;
mod cache;
mod error;
mod interval;
mod runner;
mod server;

use tracing_subscriber::EnvFilter;

use crate::args::Config;
use crate::error::{CliError, Result};

fn main() {
	init_tracing();

	let args: Vec<String> = std::env::args_os().skip(1).map(|arg| arg.to_string_lossy().into_owned()).collect();
	match run(&args) {
		Ok(()) => {}
		Err(CliError::Args(err)) => err.exit(),
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	}
}

fn run(args: &[String]) -> Result<()> {
	let config = Config::from_args(args)?;
	let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
	runtime.block_on(server::serve(config))
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
