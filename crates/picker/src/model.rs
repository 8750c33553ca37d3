//! Events accepted by the picker and the states it can be in.

/// Input to the picker, already translated from raw key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
	/// The query line now reads exactly this text.
	QueryChanged(String),
	/// Highlight the previous entry.
	MoveUp,
	/// Highlight the next entry.
	MoveDown,
	/// Accept the highlighted entry.
	Confirm,
	/// Leave without selecting anything.
	Cancel,
}

/// Where the picker session stands after an event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerState {
	/// Waiting for more input.
	#[default]
	Editing,
	/// The user accepted this candidate.
	Committed(String),
	/// The user left without a selection.
	Cancelled,
}

impl PickerState {
	/// Returns true once the session has ended.
	pub fn is_terminal(&self) -> bool {
		!matches!(self, Self::Editing)
	}
}
