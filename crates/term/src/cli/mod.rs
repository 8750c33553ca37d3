//! CLI schema for the hcd binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "hcd")]
#[command(about = "Jump to a previously visited directory")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Text to pre-fill the search line with
	#[arg(value_name = "QUERY")]
	pub initial_query: Option<String>,

	/// History file to read (overrides $HCD_HISTORY and the config)
	#[arg(long, value_name = "PATH", global = true)]
	pub history: Option<PathBuf>,

	/// Config file to use (overrides $HCD_CONFIG)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging (the picker itself only logs to $HCD_LOG_DIR)
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Print history entries ranked against TEXT without opening the picker
	Query {
		/// Query to rank against
		text: String,

		/// Print at most this many entries
		#[arg(long, short = 'n', value_name = "N")]
		limit: Option<usize>,

		/// Prefix each entry with its edit distance
		#[arg(long)]
		distances: bool,
	},
	/// Print a shell function that changes into the selected directory
	Init {
		/// Shell to generate the function for
		#[arg(value_enum)]
		shell: Shell,
	},
}
