use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn keeps_first_seen_order_and_drops_duplicates() {
	let text = "/home/user\n/etc\n/home/user\n/var/log\n/etc\n";
	assert_eq!(parse_history(text), vec!["/home/user", "/etc", "/var/log"]);
}

#[test]
fn trims_lines_and_skips_blanks() {
	let text = "  /srv  \n\n\t\n/srv\r\n/opt\n";
	assert_eq!(parse_history(text), vec!["/srv", "/opt"]);
}

#[test]
fn empty_text_is_empty_history() {
	assert!(parse_history("").is_empty());
	assert!(parse_history("\n\n").is_empty());
}

#[test]
fn loads_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	write!(file, "/a\n/b\n/a").unwrap();
	assert_eq!(load_history(file.path()).unwrap(), vec!["/a", "/b"]);
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(b"/ok\n/bad\xff\n").unwrap();
	let history = load_history(file.path()).unwrap();
	assert_eq!(history[0], "/ok");
	assert_eq!(history[1], "/bad\u{fffd}");
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing");
	let err = load_history(&path).unwrap_err();
	assert!(err.to_string().contains(&path.display().to_string()));
}
