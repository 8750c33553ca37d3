//! Ranking that reuses the distance table of the previous query.
//!
//! The table for one candidate is stored column by column, one column per query
//! prefix length. When the next query shares a prefix with the previous one,
//! the columns for that prefix are still valid and only the tail is recomputed.
//! Typing a character costs one column per candidate instead of a full table.

use tracing::trace;

use crate::distance::{first_column, next_column};
use crate::{Match, distance};

/// Cells the matcher may keep across all candidates.
///
/// A long query against a large history would otherwise pin one table per
/// candidate in memory for the whole session. Queries that need more than this
/// are scored directly and the cached columns are dropped.
const MAX_CACHED_CELLS: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone)]
struct CandidateTable {
	text: String,
	chars: Vec<char>,
	/// `columns[j][i]` is the distance between `chars[..i]` and `query[..j]`.
	columns: Vec<Vec<u32>>,
}

impl CandidateTable {
	fn new(text: &str) -> Self {
		let chars: Vec<char> = text.chars().collect();
		let columns = vec![first_column(chars.len())];
		Self {
			text: text.to_owned(),
			chars,
			columns,
		}
	}

	/// Cells in the full table for a query of `query_len` chars.
	fn cells_for(&self, query_len: usize) -> usize {
		(self.chars.len() + 1).saturating_mul(query_len + 1)
	}

	fn distance_to(&mut self, query: &[char], prefix_to_keep: usize) -> u32 {
		self.columns.truncate(prefix_to_keep + 1);
		for j in self.columns.len()..=query.len() {
			let mut column = Vec::new();
			next_column(&self.chars, query[j - 1], j, &self.columns[j - 1], &mut column);
			self.columns.push(column);
		}

		self.columns[query.len()][self.chars.len()]
	}

	fn uncached_distance(&mut self, query: &str) -> u32 {
		self.columns.truncate(1);
		distance(&self.text, query) as u32
	}
}

/// Ranks a fixed candidate set against a sequence of queries.
#[derive(Debug, Clone)]
pub struct IncrementalMatcher {
	query: Vec<char>,
	tables: Vec<CandidateTable>,
}

impl IncrementalMatcher {
	/// Builds a matcher over `candidates`. Candidate order fixes tie-breaking.
	pub fn new<S: AsRef<str>>(candidates: &[S]) -> Self {
		Self {
			query: Vec::new(),
			tables: candidates.iter().map(|c| CandidateTable::new(c.as_ref())).collect(),
		}
	}

	/// Number of candidates being ranked.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Returns the candidate at `index` in input order.
	pub fn candidate(&self, index: usize) -> Option<&str> {
		self.tables.get(index).map(|table| table.text.as_str())
	}

	/// Ranks all candidates against `query`, best first.
	///
	/// Equivalent to [`crate::match_list`] over the same candidates.
	pub fn match_query(&mut self, query: &str) -> Vec<Match> {
		let query_chars: Vec<char> = query.chars().collect();
		let common_prefix_len = query_chars
			.iter()
			.zip(&self.query)
			.take_while(|(a, b)| a == b)
			.count();

		let required = self
			.tables
			.iter()
			.map(|table| table.cells_for(query_chars.len()))
			.fold(0, usize::saturating_add);
		let cached = required <= MAX_CACHED_CELLS;

		let mut matches: Vec<Match> = self
			.tables
			.iter_mut()
			.enumerate()
			.map(|(index, table)| {
				let distance = if cached {
					table.distance_to(&query_chars, common_prefix_len)
				} else {
					table.uncached_distance(query)
				};
				Match::new(index as u32, distance)
			})
			.collect();
		matches.sort_unstable();

		trace!(
			query,
			reused_columns = common_prefix_len,
			cached,
			candidates = self.tables.len(),
			"incremental rank"
		);
		self.query = query_chars;
		matches
	}
}
