mod cli;
mod config;
mod history;
mod keys;
mod navigate;
mod paths;
mod render;
mod session;
mod shell;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use config::{CONFIG_ENV, Config, ConfigLocation, HISTORY_ENV};
use hcd_picker::PickerState;
use session::SessionOptions;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose, cli.command.is_none());

	if let Some(Command::Init { shell }) = &cli.command {
		return print_init(*shell);
	}

	let location = ConfigLocation::resolve(cli.config.as_deref(), std::env::var_os(CONFIG_ENV));
	let config = Config::load(location.as_ref())?;

	let history_path = config.history_path(cli.history.as_deref(), std::env::var_os(HISTORY_ENV));
	let candidates = history::load_history(&history_path)?;
	info!(path = %history_path.display(), entries = candidates.len(), "history loaded");

	match cli.command {
		Some(Command::Query {
			text,
			limit,
			distances,
		}) => print_ranked(&candidates, &text, limit, distances),
		Some(Command::Init { .. }) => Ok(()),
		None => pick(&candidates, &config, cli.initial_query.as_deref().unwrap_or_default()),
	}
}

fn pick(candidates: &[String], config: &Config, initial_query: &str) -> anyhow::Result<()> {
	let options = SessionOptions {
		prompt: &config.prompt,
		max_visible: config.max_visible,
		initial_query,
	};

	let state = session::run(candidates, &options).context("terminal session failed")?;

	match state {
		PickerState::Committed(entry) => {
			let dir = navigate::change_directory(&entry)?;
			println!("{}", dir.display());
			Ok(())
		}
		PickerState::Cancelled | PickerState::Editing => {
			info!("no directory selected");
			Ok(())
		}
	}
}

fn print_ranked(
	candidates: &[String],
	query: &str,
	limit: Option<usize>,
	distances: bool,
) -> anyhow::Result<()> {
	let matches = hcd_matcher::match_list(query, candidates);
	let limit = limit.unwrap_or(matches.len());

	let mut out = BufWriter::new(io::stdout().lock());
	for entry in matches.iter().take(limit) {
		let path = &candidates[entry.index as usize];
		let written = if distances {
			writeln!(out, "{}\t{}", entry.distance, path)
		} else {
			writeln!(out, "{path}")
		};
		match written {
			Err(error) if error.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
			other => other?,
		}
	}

	match out.flush() {
		Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
		other => Ok(other?),
	}
}

fn print_init(shell: shell::Shell) -> anyhow::Result<()> {
	let mut out = io::stdout().lock();
	match out
		.write_all(shell::init_script(shell).as_bytes())
		.and_then(|()| out.flush())
	{
		Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
		other => Ok(other?),
	}
}

/// Logs go to `$HCD_LOG_DIR` when set. Otherwise stderr, which the picker draws
/// on, so the interactive session only ever logs warnings there.
fn setup_tracing(verbose: bool, interactive: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	if let Some(log_dir) = std::env::var_os("HCD_LOG_DIR").map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("hcd.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let filter = EnvFilter::try_from_env("HCD_LOG").unwrap_or_else(|_| {
				if verbose {
					EnvFilter::new("hcd=trace,hcd_picker=trace,hcd_matcher=trace,info")
				} else {
					EnvFilter::new("hcd=debug,hcd_picker=debug,info")
				}
			});

			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry()
				.with(filter)
				.with(file_layer)
				.init();

			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_writer(io::stderr)
		.with_max_level(if verbose && !interactive {
			tracing::Level::DEBUG
		} else {
			tracing::Level::WARN
		})
		.init();
}
