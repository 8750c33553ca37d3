//! Translation of terminal key presses into picker events.
//!
//! The query line is edited here and handed to the picker in full on every
//! change, so the picker never sees individual characters.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hcd_picker::PickerEvent;

/// Editable query text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryLine {
	text: String,
}

impl QueryLine {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	fn push(&mut self, ch: char) -> bool {
		self.text.push(ch);
		true
	}

	fn backspace(&mut self) -> bool {
		self.text.pop().is_some()
	}

	fn clear(&mut self) -> bool {
		let changed = !self.text.is_empty();
		self.text.clear();
		changed
	}

	/// Deletes back to the previous path separator or space, ignoring trailing ones.
	fn delete_word(&mut self) -> bool {
		let is_separator = |c: char| c == '/' || c.is_whitespace();
		let trimmed = self.text.trim_end_matches(is_separator).len();
		let keep = self.text[..trimmed]
			.char_indices()
			.rev()
			.find(|&(_, c)| is_separator(c))
			.map_or(0, |(idx, c)| idx + c.len_utf8());

		let changed = keep < self.text.len();
		self.text.truncate(keep);
		changed
	}

	fn changed_event(&self, changed: bool) -> Option<PickerEvent> {
		changed.then(|| PickerEvent::QueryChanged(self.text.clone()))
	}
}

/// Maps one key press to a picker event, editing `line` for text keys.
///
/// Returns `None` for key releases, unbound keys, and edits that leave the text
/// unchanged.
pub fn translate(key: KeyEvent, line: &mut QueryLine) -> Option<PickerEvent> {
	if key.kind == KeyEventKind::Release {
		return None;
	}

	if key.modifiers.contains(KeyModifiers::CONTROL) {
		return match key.code {
			KeyCode::Char('c' | 'd' | 'g') => Some(PickerEvent::Cancel),
			KeyCode::Char('p' | 'k') => Some(PickerEvent::MoveUp),
			KeyCode::Char('n' | 'j') => Some(PickerEvent::MoveDown),
			KeyCode::Char('u') => {
				let changed = line.clear();
				line.changed_event(changed)
			}
			KeyCode::Char('w') | KeyCode::Backspace => {
				let changed = line.delete_word();
				line.changed_event(changed)
			}
			KeyCode::Char('h') => {
				let changed = line.backspace();
				line.changed_event(changed)
			}
			_ => None,
		};
	}

	match key.code {
		KeyCode::Enter => Some(PickerEvent::Confirm),
		KeyCode::Esc => Some(PickerEvent::Cancel),
		KeyCode::Up | KeyCode::BackTab => Some(PickerEvent::MoveUp),
		KeyCode::Down | KeyCode::Tab => Some(PickerEvent::MoveDown),
		KeyCode::Backspace => {
			let changed = line.backspace();
			line.changed_event(changed)
		}
		KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
			let changed = line.push(ch);
			line.changed_event(changed)
		}
		_ => None,
	}
}
