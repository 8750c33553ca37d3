//! Interactive selection over ranked history candidates.
//!
//! [`Picker`] is a pure state machine: it owns the query, the ranked view and
//! the cursor, and turns [`PickerEvent`]s into [`PickerState`]s. It never touches
//! the terminal or the filesystem. The front-end renders from its accessors and
//! acts on a terminal state once the loop ends.

mod controller;
mod model;

pub use controller::Picker;
pub use model::{PickerEvent, PickerState};

#[cfg(test)]
mod tests;
