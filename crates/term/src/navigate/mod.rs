//! The directory change performed after a selection is committed.
//!
//! A child process cannot move its parent shell, so besides changing its own
//! working directory hcd prints the target for the shell wrapper emitted by
//! `hcd init`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::paths::expand_home;

/// Why a committed history entry could not be entered.
#[derive(Debug, Error)]
pub enum NavigateError {
	#[error("{} no longer exists", path.display())]
	Missing { path: PathBuf },

	#[error("{} is not a directory", path.display())]
	NotADirectory { path: PathBuf },

	#[error("cannot enter {}: {source}", path.display())]
	Access { path: PathBuf, source: io::Error },
}

/// Checks that `entry` still names an accessible directory and returns its path.
pub fn resolve_target(entry: &str) -> Result<PathBuf, NavigateError> {
	let path = expand_home(Path::new(entry));

	let metadata = match path.metadata() {
		Ok(metadata) => metadata,
		Err(error) if error.kind() == io::ErrorKind::NotFound => {
			return Err(NavigateError::Missing { path });
		}
		Err(source) => return Err(NavigateError::Access { path, source }),
	};

	if !metadata.is_dir() {
		return Err(NavigateError::NotADirectory { path });
	}
	Ok(path)
}

/// Moves this process into `entry` and returns the directory entered.
pub fn change_directory(entry: &str) -> Result<PathBuf, NavigateError> {
	let path = resolve_target(entry)?;
	std::env::set_current_dir(&path).map_err(|source| NavigateError::Access {
		path: path.clone(),
		source,
	})?;
	tracing::info!(path = %path.display(), "changed directory");
	Ok(path)
}
