//! Drawing of the picker into the terminal.
//!
//! Layout, top to bottom: the prompt with the query, a dim status line with the
//! cursor position, then the ranked list in a viewport that scrolls to keep the
//! highlighted row visible.

use std::borrow::Cow;
use std::io::{self, Write};
use std::ops::Range;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};
use hcd_picker::Picker;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows taken by the prompt and the status line.
const HEADER_ROWS: u16 = 2;
const ELLIPSIS: char = '…';

/// Terminal geometry and static text for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
	pub width: u16,
	pub height: u16,
	pub prompt: &'a str,
	pub max_visible: Option<usize>,
}

impl Layout<'_> {
	/// Number of list rows that fit.
	pub fn list_rows(&self) -> usize {
		let available = self.height.saturating_sub(HEADER_ROWS) as usize;
		self.max_visible.map_or(available, |max| available.min(max))
	}
}

/// Scroll position of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
	offset: usize,
}

impl Viewport {
	/// First visible entry.
	pub fn offset(&self) -> usize {
		self.offset
	}

	/// Scrolls the minimum amount needed to show `cursor` within `rows` rows.
	pub fn follow(&mut self, cursor: Option<usize>, rows: usize) {
		let Some(cursor) = cursor else {
			self.offset = 0;
			return;
		};
		if rows == 0 {
			return;
		}
		if cursor < self.offset {
			self.offset = cursor;
		}
		if cursor >= self.offset + rows {
			self.offset = cursor + 1 - rows;
		}
	}

	/// Entries to draw for a list of `len` items in `rows` rows.
	pub fn range(&self, len: usize, rows: usize) -> Range<usize> {
		let start = self.offset().min(len);
		start..(start + rows).min(len)
	}
}

/// Shortens `text` to `width` columns, keeping its tail.
///
/// For paths the final components are the useful part, so the head is replaced
/// by an ellipsis.
pub fn truncate_start(text: &str, width: usize) -> Cow<'_, str> {
	if text.width() <= width {
		return Cow::Borrowed(text);
	}
	if width == 0 {
		return Cow::Borrowed("");
	}

	let budget = width - 1;
	let mut used = 0;
	let mut start = text.len();
	for (idx, ch) in text.char_indices().rev() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > budget {
			break;
		}
		used += ch_width;
		start = idx;
	}

	Cow::Owned(format!("{ELLIPSIS}{}", &text[start..]))
}

/// Draws one full frame.
pub fn draw<W: Write>(
	out: &mut W,
	picker: &Picker,
	viewport: &mut Viewport,
	layout: &Layout<'_>,
) -> io::Result<()> {
	let width = layout.width as usize;
	let rows = layout.list_rows();
	viewport.follow(picker.cursor(), rows);

	queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;

	let prompt_line = format!("{}{}", layout.prompt, picker.query());
	queue!(out, Print(truncate_start(&prompt_line, width)))?;

	let shown = picker.cursor().map_or(0, |cursor| cursor + 1);
	let status = format!("  {shown}/{}", picker.len());
	queue!(
		out,
		cursor::MoveTo(0, 1),
		SetForegroundColor(Color::DarkGrey),
		Print(truncate_start(&status, width)),
		ResetColor
	)?;

	let visible = viewport.range(picker.len(), rows);
	for (row, position) in visible.enumerate() {
		let Some(entry) = picker.entry(position) else {
			break;
		};
		let highlighted = picker.cursor() == Some(position);
		let marker = if highlighted { "> " } else { "  " };
		let line = format!("{marker}{}", truncate_start(entry, width.saturating_sub(marker.len())));

		queue!(out, cursor::MoveTo(0, HEADER_ROWS + row as u16))?;
		if highlighted {
			queue!(out, SetAttribute(Attribute::Reverse))?;
		}
		queue!(out, Print(line))?;
		if highlighted {
			queue!(out, SetAttribute(Attribute::Reset))?;
		}
	}

	let input_col = prompt_line.width().min(width.saturating_sub(1)) as u16;
	queue!(out, cursor::MoveTo(input_col, 0), cursor::Show)?;
	Ok(())
}
