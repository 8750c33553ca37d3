//! Interactive picker session on the terminal.
//!
//! The UI is drawn on stderr so stdout stays free for the selected path, which
//! the shell wrapper captures.

use std::io::{self, BufWriter, Stderr, Write};

use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};
use hcd_picker::{Picker, PickerState};
use tracing::debug;

use crate::keys::{self, QueryLine};
use crate::render::{self, Layout, Viewport};

/// Static settings for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions<'a> {
	pub prompt: &'a str,
	pub max_visible: Option<usize>,
	pub initial_query: &'a str,
}

/// Raw mode and alternate screen, restored on drop.
struct TerminalGuard {
	out: BufWriter<Stderr>,
}

impl TerminalGuard {
	fn enter() -> io::Result<Self> {
		terminal::enable_raw_mode()?;
		let mut out = BufWriter::new(io::stderr());
		if let Err(error) = execute!(
			out,
			terminal::EnterAlternateScreen,
			terminal::Clear(terminal::ClearType::All)
		) {
			let _ = terminal::disable_raw_mode();
			return Err(error);
		}
		Ok(Self { out })
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
		let _ = terminal::disable_raw_mode();
	}
}

/// Runs the picker until the user commits or cancels.
///
/// Returns the terminal [`PickerState`]. The terminal is restored before this
/// returns, including on error.
pub fn run(candidates: &[String], options: &SessionOptions<'_>) -> io::Result<PickerState> {
	let mut picker = Picker::with_query(candidates, options.initial_query);
	let mut line = QueryLine::new(options.initial_query);
	let mut viewport = Viewport::default();

	let mut guard = TerminalGuard::enter()?;
	debug!(candidates = candidates.len(), "session started");

	let state = run_loop(&mut picker, &mut line, &mut viewport, options, &mut guard.out)?;
	drop(guard);

	debug!(?state, query = line.text(), "session ended");
	Ok(state)
}

fn run_loop(
	picker: &mut Picker,
	line: &mut QueryLine,
	viewport: &mut Viewport,
	options: &SessionOptions<'_>,
	out: &mut BufWriter<Stderr>,
) -> io::Result<PickerState> {
	let mut dirty = true;
	loop {
		if dirty {
			let (width, height) = terminal::size()?;
			let layout = Layout {
				width,
				height,
				prompt: options.prompt,
				max_visible: options.max_visible,
			};
			render::draw(out, picker, viewport, &layout)?;
			out.flush()?;
		}

		dirty = match event::read()? {
			Event::Key(key) => match keys::translate(key, line) {
				Some(picker_event) => {
					if picker.handle(picker_event).is_terminal() {
						return Ok(picker.state().clone());
					}
					true
				}
				None => false,
			},
			Event::Resize(..) => true,
			_ => false,
		};
	}
}
