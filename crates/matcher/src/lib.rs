//! Ranking of history candidates against a typed query.
//!
//! Every candidate is scored by its Levenshtein distance to the query and the
//! candidates are returned best-first. Ties keep the order in which the
//! candidates were supplied, so callers control tie-breaking by ordering their
//! input (the history loader hands candidates over in first-seen order).
//!
//! Two entry points are provided:
//!
//! * [`match_list`] / [`rank`] score every candidate from scratch.
//! * [`IncrementalMatcher`] keeps the distance table of the previous query and
//!   only recomputes the columns past the common prefix, which is the common
//!   case while a user types.
//!
//! Both produce identical results.

mod distance;
mod incremental;
mod one_shot;

pub use distance::distance;
pub use incremental::IncrementalMatcher;
pub use one_shot::{match_list, rank};

use std::cmp::Ordering;

/// A ranked candidate: the index into the candidate slice and its distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
	/// Position of the candidate in the slice that was ranked.
	pub index: u32,
	/// Levenshtein distance between the candidate and the query.
	pub distance: u32,
}

impl Match {
	#[inline]
	pub fn new(index: u32, distance: u32) -> Self {
		Self { index, distance }
	}
}

/// Orders by ascending distance, then by candidate index.
///
/// Indices are unique within one ranking, so an unstable sort over this ordering
/// yields the same result as a stable sort by distance.
impl Ord for Match {
	fn cmp(&self, other: &Self) -> Ordering {
		self.distance.cmp(&other.distance).then(self.index.cmp(&other.index))
	}
}

impl PartialOrd for Match {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Resolves ranked matches back to the candidate strings they refer to.
pub fn resolve<'a, S: AsRef<str>>(matches: &[Match], candidates: &'a [S]) -> Vec<&'a str> {
	matches.iter().map(|m| candidates[m.index as usize].as_ref()).collect()
}
