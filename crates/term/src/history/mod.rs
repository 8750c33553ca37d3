//! Loading of the directory history file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use thiserror::Error;

/// Errors raised while reading the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
	#[error("could not read history file {}: {source}", path.display())]
	Read { path: PathBuf, source: std::io::Error },
}

/// Reads the history at `path` and returns its distinct entries in first-seen order.
///
/// Invalid UTF-8 is replaced rather than rejected so one bad line does not hide
/// the rest of the history.
pub fn load_history(path: &Path) -> Result<Vec<String>, HistoryError> {
	let bytes = fs::read(path).map_err(|source| HistoryError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	let entries = parse_history(&String::from_utf8_lossy(&bytes));
	tracing::debug!(path = %path.display(), entries = entries.len(), "loaded history");
	Ok(entries)
}

/// Splits history text into distinct, trimmed, non-empty lines.
///
/// The first occurrence of a path fixes its position, which in turn decides
/// ranking ties.
pub fn parse_history(text: &str) -> Vec<String> {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect::<IndexSet<String>>()
		.into_iter()
		.collect()
}

#[cfg(test)]
mod tests;
