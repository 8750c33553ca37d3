use hcd_matcher::{IncrementalMatcher, Match};
use tracing::{debug, trace};

use crate::model::{PickerEvent, PickerState};

/// Query, ranked view and cursor for one picker session.
///
/// Invariant: `cursor` is `Some(i)` with `i < view.len()` whenever the view is
/// non-empty, and `None` otherwise. Every transition preserves it.
#[derive(Debug, Clone)]
pub struct Picker {
	matcher: IncrementalMatcher,
	query: String,
	view: Vec<Match>,
	cursor: Option<usize>,
	state: PickerState,
}

impl Picker {
	/// Starts a session over `candidates` with an empty query.
	///
	/// Candidate order decides ties, so callers pass them in first-seen order.
	pub fn new<S: AsRef<str>>(candidates: &[S]) -> Self {
		Self::with_query(candidates, "")
	}

	/// Starts a session with the query line pre-filled.
	pub fn with_query<S: AsRef<str>>(candidates: &[S], query: impl Into<String>) -> Self {
		let mut picker = Self {
			matcher: IncrementalMatcher::new(candidates),
			query: String::new(),
			view: Vec::new(),
			cursor: None,
			state: PickerState::Editing,
		};
		picker.set_query(query.into());
		picker
	}

	/// Applies one event and returns the resulting state.
	///
	/// Events that cannot apply (moving past either end, confirming an empty
	/// view) leave the picker unchanged. Once a terminal state is reached all
	/// further events are ignored.
	pub fn handle(&mut self, event: PickerEvent) -> &PickerState {
		if self.state.is_terminal() {
			trace!(?event, state = ?self.state, "event after session ended");
			return &self.state;
		}

		match event {
			PickerEvent::QueryChanged(text) => self.set_query(text),
			PickerEvent::MoveUp => {
				if let Some(cursor) = self.cursor
					&& cursor > 0
				{
					self.cursor = Some(cursor - 1);
				}
			}
			PickerEvent::MoveDown => {
				if let Some(cursor) = self.cursor
					&& cursor + 1 < self.view.len()
				{
					self.cursor = Some(cursor + 1);
				}
			}
			PickerEvent::Confirm => {
				if let Some(selected) = self.selected().map(str::to_owned) {
					debug!(path = %selected, "selection committed");
					self.state = PickerState::Committed(selected);
				}
			}
			PickerEvent::Cancel => {
				debug!("selection cancelled");
				self.state = PickerState::Cancelled;
			}
		}

		&self.state
	}

	fn set_query(&mut self, text: String) {
		self.view = self.matcher.match_query(&text);
		self.cursor = if self.view.is_empty() { None } else { Some(0) };
		trace!(query = %text, matches = self.view.len(), "query changed");
		self.query = text;
	}

	fn text_of(&self, entry: &Match) -> &str {
		self.matcher.candidate(entry.index as usize).unwrap_or_default()
	}

	/// Current session state.
	pub fn state(&self) -> &PickerState {
		&self.state
	}

	/// Current query text.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Highlighted position in the ranked view, `None` when the view is empty.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// Ranked entries with their distances, best first.
	pub fn matches(&self) -> &[Match] {
		&self.view
	}

	/// Ranked candidate strings, best first.
	pub fn ranked_view(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.view.iter().map(|entry| self.text_of(entry))
	}

	/// Candidate at `position` in the ranked view.
	pub fn entry(&self, position: usize) -> Option<&str> {
		self.view.get(position).map(|entry| self.text_of(entry))
	}

	/// The highlighted candidate.
	pub fn selected(&self) -> Option<&str> {
		self.cursor.and_then(|cursor| self.entry(cursor))
	}

	/// Number of entries in the ranked view.
	pub fn len(&self) -> usize {
		self.view.len()
	}

	pub fn is_empty(&self) -> bool {
		self.view.is_empty()
	}

	/// Number of candidates loaded for the session.
	pub fn candidate_count(&self) -> usize {
		self.matcher.len()
	}
}
