use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

const HISTORY: &[&str] = &["/home/user/projects", "/etc", "/home/user", "/var/log"];

fn view(picker: &Picker) -> Vec<&str> {
	picker.ranked_view().collect()
}

#[test]
fn starts_editing_with_shortest_first_view() {
	let picker = Picker::new(HISTORY);
	assert_eq!(picker.state(), &PickerState::Editing);
	assert_eq!(picker.query(), "");
	assert_eq!(view(&picker), vec!["/etc", "/var/log", "/home/user", "/home/user/projects"]);
	assert_eq!(picker.cursor(), Some(0));
	assert_eq!(picker.selected(), Some("/etc"));
	assert_eq!(picker.candidate_count(), 4);
}

#[test]
fn empty_history_has_no_cursor() {
	let mut picker = Picker::new::<&str>(&[]);
	assert!(picker.is_empty());
	assert_eq!(picker.cursor(), None);
	assert_eq!(picker.handle(PickerEvent::MoveDown), &PickerState::Editing);
	assert_eq!(picker.handle(PickerEvent::MoveUp), &PickerState::Editing);
	assert_eq!(picker.cursor(), None);
}

#[test]
fn query_change_reranks_and_resets_cursor() {
	let mut picker = Picker::new(&["abc", "abd", "xyz"]);
	picker.handle(PickerEvent::MoveDown);
	picker.handle(PickerEvent::MoveDown);
	assert_eq!(picker.cursor(), Some(2));

	assert_eq!(picker.handle(PickerEvent::QueryChanged("abc".into())), &PickerState::Editing);
	assert_eq!(picker.query(), "abc");
	assert_eq!(view(&picker), vec!["abc", "abd", "xyz"]);
	let distances: Vec<u32> = picker.matches().iter().map(|m| m.distance).collect();
	assert_eq!(distances, vec![0, 1, 3]);
	assert_eq!(picker.cursor(), Some(0));
}

#[test]
fn with_query_prefills_ranking() {
	let picker = Picker::with_query(HISTORY, "/var/lg");
	assert_eq!(picker.query(), "/var/lg");
	assert_eq!(picker.selected(), Some("/var/log"));
}

#[test]
fn move_down_clamps_at_last_entry() {
	let mut picker = Picker::new(HISTORY);
	for _ in 0..picker.len() {
		picker.handle(PickerEvent::MoveDown);
	}
	assert_eq!(picker.cursor(), Some(picker.len() - 1));

	picker.handle(PickerEvent::MoveDown);
	assert_eq!(picker.cursor(), Some(picker.len() - 1));
}

#[test]
fn move_up_clamps_at_first_entry() {
	let mut picker = Picker::new(HISTORY);
	picker.handle(PickerEvent::MoveUp);
	assert_eq!(picker.cursor(), Some(0));

	picker.handle(PickerEvent::MoveDown);
	picker.handle(PickerEvent::MoveDown);
	picker.handle(PickerEvent::MoveUp);
	assert_eq!(picker.cursor(), Some(1));
}

#[test]
fn confirm_commits_highlighted_entry() {
	let mut picker = Picker::new(HISTORY);
	picker.handle(PickerEvent::MoveDown);
	let expected = picker.entry(1).map(str::to_owned);

	let state = picker.handle(PickerEvent::Confirm).clone();
	assert_eq!(Some(state), expected.map(PickerState::Committed));
}

#[test]
fn confirm_on_empty_view_is_noop() {
	let mut picker = Picker::new::<&str>(&[]);
	picker.handle(PickerEvent::QueryChanged("anything".into()));
	assert_eq!(picker.handle(PickerEvent::Confirm), &PickerState::Editing);
}

#[test]
fn cancel_is_terminal() {
	let mut picker = Picker::new(HISTORY);
	picker.handle(PickerEvent::QueryChanged("/ho".into()));
	assert_eq!(picker.handle(PickerEvent::Cancel), &PickerState::Cancelled);
	assert!(picker.state().is_terminal());
}

#[test]
fn events_after_terminal_state_are_ignored() {
	let mut picker = Picker::new(HISTORY);
	picker.handle(PickerEvent::Confirm);
	let committed = picker.state().clone();
	assert_eq!(committed, PickerState::Committed("/etc".into()));

	picker.handle(PickerEvent::QueryChanged("/var".into()));
	picker.handle(PickerEvent::Cancel);
	assert_eq!(picker.state(), &committed);
	assert_eq!(picker.query(), "");
}

fn event_strategy() -> impl Strategy<Value = PickerEvent> {
	prop_oneof![
		"[a-z/]{0,6}".prop_map(PickerEvent::QueryChanged),
		Just(PickerEvent::MoveUp),
		Just(PickerEvent::MoveDown),
		Just(PickerEvent::Confirm),
	]
}

proptest! {
	#[test]
	fn cursor_always_valid_and_cancel_always_reachable(
		candidates in proptest::collection::hash_set("[a-z/]{0,8}", 0..10),
		events in proptest::collection::vec(event_strategy(), 0..32),
	) {
		let candidates: Vec<String> = candidates.into_iter().collect();
		let mut picker = Picker::new(&candidates);

		for event in events {
			let was_query_change = matches!(event, PickerEvent::QueryChanged(_));
			if picker.handle(event).is_terminal() {
				break;
			}
			match picker.cursor() {
				Some(cursor) => prop_assert!(cursor < picker.len()),
				None => prop_assert!(picker.is_empty()),
			}
			if was_query_change {
				prop_assert_eq!(picker.cursor(), (!picker.is_empty()).then_some(0));
			}
		}

		if !picker.state().is_terminal() {
			prop_assert_eq!(picker.handle(PickerEvent::Cancel), &PickerState::Cancelled);
		}
	}
}
