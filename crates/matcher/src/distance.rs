/// Computes the Levenshtein distance between `a` and `b`.
///
/// Insertions, deletions and substitutions each cost one. Comparison is over
/// Unicode scalar values and is case-sensitive. Only two rows of the
/// `(len(a) + 1) x (len(b) + 1)` table are kept alive.
pub fn distance(a: &str, b: &str) -> usize {
	let b: Vec<char> = b.chars().collect();
	if b.is_empty() {
		return a.chars().count();
	}

	let mut prev_row: Vec<usize> = (0..=b.len()).collect();
	let mut curr_row = vec![0; b.len() + 1];

	for (i, a_char) in a.chars().enumerate() {
		curr_row[0] = i + 1;
		for (j, &b_char) in b.iter().enumerate() {
			let cost = usize::from(a_char != b_char);
			let deletion = prev_row[j + 1] + 1;
			let insertion = curr_row[j] + 1;
			let substitution = prev_row[j] + cost;
			curr_row[j + 1] = deletion.min(insertion).min(substitution);
		}
		std::mem::swap(&mut prev_row, &mut curr_row);
	}

	prev_row[b.len()]
}

/// Fills `column` with the table column for query prefix length `j`, given the
/// column for `j - 1` in `prev`.
///
/// `candidate` indexes the rows, so `column[i]` is the distance between the
/// first `i` candidate chars and the first `j` query chars.
#[inline]
pub(crate) fn next_column(
	candidate: &[char],
	query_char: char,
	j: usize,
	prev: &[u32],
	column: &mut Vec<u32>,
) {
	column.clear();
	column.reserve(candidate.len() + 1);
	column.push(j as u32);

	for (i, &candidate_char) in candidate.iter().enumerate() {
		let cost = u32::from(candidate_char != query_char);
		let deletion = column[i] + 1;
		let insertion = prev[i + 1] + 1;
		let substitution = prev[i] + cost;
		column.push(deletion.min(insertion).min(substitution));
	}
}

/// The column for the empty query prefix: `dp[i][0] = i`.
#[inline]
pub(crate) fn first_column(candidate_len: usize) -> Vec<u32> {
	(0..=candidate_len as u32).collect()
}
