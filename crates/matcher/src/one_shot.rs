use tracing::trace;

use crate::{Match, distance};

/// Below this many candidates the rayon pool costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

/// Scores every candidate against `query` and returns the matches best-first.
///
/// Ties on distance keep the candidates' input order. The result always holds
/// one entry per candidate.
pub fn match_list<S1: AsRef<str>, S2: AsRef<str> + Sync>(
	query: S1,
	candidates: &[S2],
) -> Vec<Match> {
	let query = query.as_ref();

	let mut matches = score_all(query, candidates);
	matches.sort_unstable();

	trace!(query, candidates = candidates.len(), "ranked candidates");
	matches
}

/// Ranks `candidates` against `query`, returning the candidate strings best-first.
pub fn rank<'a, S: AsRef<str> + Sync>(candidates: &'a [S], query: &str) -> Vec<&'a str> {
	crate::resolve(&match_list(query, candidates), candidates)
}

#[cfg(feature = "parallel")]
fn score_all<S: AsRef<str> + Sync>(query: &str, candidates: &[S]) -> Vec<Match> {
	use rayon::prelude::*;

	if candidates.len() < PARALLEL_THRESHOLD {
		return score_sequential(query, candidates);
	}

	candidates
		.par_iter()
		.enumerate()
		.map(|(index, candidate)| {
			Match::new(index as u32, distance(candidate.as_ref(), query) as u32)
		})
		.collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<Match> {
	score_sequential(query, candidates)
}

fn score_sequential<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<Match> {
	candidates
		.iter()
		.enumerate()
		.map(|(index, candidate)| {
			Match::new(index as u32, distance(candidate.as_ref(), query) as u32)
		})
		.collect()
}
