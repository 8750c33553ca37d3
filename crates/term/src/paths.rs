//! Path helpers shared by config, history and navigation.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~` component, and all paths when no home directory
/// is known, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
	let Ok(rest) = path.strip_prefix("~") else {
		return path.to_path_buf();
	};

	match dirs::home_dir() {
		Some(home) if rest.as_os_str().is_empty() => home,
		Some(home) => home.join(rest),
		None => path.to_path_buf(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn leaves_plain_paths_alone() {
		assert_eq!(expand_home(Path::new("/etc/hosts")), PathBuf::from("/etc/hosts"));
		assert_eq!(expand_home(Path::new("relative/dir")), PathBuf::from("relative/dir"));
		assert_eq!(expand_home(Path::new("~user/dir")), PathBuf::from("~user/dir"));
	}

	#[test]
	fn expands_tilde_prefix() {
		let Some(home) = dirs::home_dir() else {
			return;
		};
		assert_eq!(expand_home(Path::new("~")), home);
		assert_eq!(expand_home(Path::new("~/.cd_history")), home.join(".cd_history"));
	}
}
