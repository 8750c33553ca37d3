//! User configuration for hcd.
//!
//! Configuration is a small TOML file. Every key is optional:
//!
//! ```toml
//! history_file = "~/.cd_history"
//! prompt = "Search: "
//! max_visible = 15
//! ```
//!
//! The file is looked up in this order:
//!
//! 1. `--config PATH`
//! 2. `$HCD_CONFIG`
//! 3. `$XDG_CONFIG_HOME/hcd/config.toml` (platform config dir elsewhere)
//!
//! A missing file at the default location is not an error. A file named
//! explicitly through the flag or the environment must exist.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::paths::expand_home;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "HCD_CONFIG";
/// Environment variable overriding the history file.
pub const HISTORY_ENV: &str = "HCD_HISTORY";

const DEFAULT_HISTORY_FILE: &str = "~/.cd_history";
const DEFAULT_PROMPT: &str = "Search: ";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The config file could not be read.
	#[error("failed to read config {}: {source}", path.display())]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		source: std::io::Error,
	},

	/// The config file is not valid TOML or has unknown keys.
	#[error("invalid config {}: {source}", path.display())]
	Parse {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying parse error.
		source: toml::de::Error,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// History file, one directory per line. A leading `~` is expanded.
	pub history_file: PathBuf,
	/// Label drawn before the query.
	pub prompt: String,
	/// Upper bound on list rows; the terminal height applies otherwise.
	pub max_visible: Option<usize>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
			prompt: DEFAULT_PROMPT.to_string(),
			max_visible: None,
		}
	}
}

/// Where the config file was found and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
	pub path: PathBuf,
	pub required: bool,
}

impl ConfigLocation {
	/// Picks the config file from the CLI flag, the environment, or the default location.
	pub fn resolve(flag: Option<&Path>, env: Option<OsString>) -> Option<Self> {
		if let Some(path) = flag {
			return Some(Self {
				path: expand_home(path),
				required: true,
			});
		}

		if let Some(path) = env.filter(|value| !value.is_empty()) {
			return Some(Self {
				path: expand_home(Path::new(&path)),
				required: true,
			});
		}

		dirs::config_dir().map(|dir| Self {
			path: dir.join("hcd").join("config.toml"),
			required: false,
		})
	}
}

impl Config {
	/// Loads the config at `location`, falling back to defaults when no file applies.
	pub fn load(location: Option<&ConfigLocation>) -> Result<Self> {
		let Some(location) = location else {
			return Ok(Self::default());
		};

		match fs::read_to_string(&location.path) {
			Ok(text) => Self::parse(&location.path, &text),
			Err(error) if !location.required && error.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %location.path.display(), "no config file, using defaults");
				Ok(Self::default())
			}
			Err(source) => Err(ConfigError::Io {
				path: location.path.clone(),
				source,
			}),
		}
	}

	/// Parses config text; `path` is only used for error reporting.
	pub fn parse(path: &Path, text: &str) -> Result<Self> {
		toml::from_str(text).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Resolves the history file: CLI flag, then `$HCD_HISTORY`, then the config value.
	pub fn history_path(&self, flag: Option<&Path>, env: Option<OsString>) -> PathBuf {
		let chosen = flag
			.map(Path::to_path_buf)
			.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
			.unwrap_or_else(|| self.history_file.clone());
		expand_home(&chosen)
	}
}
