use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::frequency::FrequencyTable;

/// Left/right context entropies derived from a [`FrequencyTable`] and the
/// original text.
///
/// For each candidate substring, the characters immediately bordering its
/// occurrences are collected into a left and a right multiset, and the
/// Shannon entropy (base 2) of each multiset is stored. A substring
/// bordered by many distinct characters behaves like a free-standing unit;
/// one always bordered by the same character is more likely a fragment of
/// a larger fixed pattern.
///
/// # Responsibilities
/// - Extract neighbor characters with a `(.)<candidate>(.)` scan over the
///   full text (occurrences without both neighbors are excluded)
/// - Skip candidates containing the reserved wildcard marker
/// - Isolate per-candidate pattern failures: log and move on
///
/// # Invariants
/// - Entries exist only for substrings of length >= 2 with at least one
///   strictly positive entropy side
/// - Entropies are always >= 0; an entropy is 0 exactly when at most one
///   distinct neighbor character was observed on that side
/// - Derived once and never mutated afterward
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct EntropyTable {
	scores: HashMap<String, (f64, f64)>,
}

impl EntropyTable {
	/// Scores every eligible substring of length >= 2 in `table`.
	///
	/// # Behavior
	/// - Candidates containing `wildcard` are masked upstream and skipped
	///   without scoring.
	/// - A candidate whose literal text does not compile as a pattern is
	///   logged together with the error and skipped; all remaining
	///   candidates are still scored. Individual failures only reduce
	///   coverage, they never abort the batch.
	/// - A candidate with zero two-neighbor occurrences yields 0.0 on both
	///   sides and is therefore not retained.
	pub fn from_frequencies(table: &FrequencyTable, text: &str, wildcard: char) -> Self {
		let mut scores = HashMap::new();

		for (word, _) in table.entries() {
			if word.chars().count() < 2 {
				continue;
			}
			if word.contains(wildcard) {
				continue;
			}
			match neighbor_entropies(word, text) {
				Ok((left, right)) => {
					if left > 0.0 || right > 0.0 {
						scores.insert(word.to_owned(), (left, right));
					}
				}
				Err(err) => error!("error word {word:?}, {err}"),
			}
		}

		Self { scores }
	}

	/// Returns the `(left, right)` entropies of `word`, or `(0.0, 0.0)` if
	/// it was never retained. Absence is a valid default, not an error.
	pub fn entropy(&self, word: &str) -> (f64, f64) {
		self.scores.get(word).copied().unwrap_or((0.0, 0.0))
	}

	/// Returns `true` if `word` was retained in the table.
	pub fn contains(&self, word: &str) -> bool {
		self.scores.contains_key(word)
	}

	/// Number of retained substrings.
	pub fn len(&self) -> usize {
		self.scores.len()
	}

	/// Returns `true` if no substring was retained.
	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}
}

/// Collects the left and right neighbor characters of every occurrence of
/// `word` in `text` and computes each side's entropy.
///
/// The candidate is interpolated into the pattern as-is: candidates whose
/// literal text carries pattern metacharacters fail compilation here, and
/// the caller recovers per candidate. Matches are non-overlapping, each one
/// consuming its neighbor characters.
fn neighbor_entropies(word: &str, text: &str) -> Result<(f64, f64), regex::Error> {
	let pattern = Regex::new(&format!("(.){word}(.)"))?;

	let mut left_chars = Vec::new();
	let mut right_chars = Vec::new();
	for captures in pattern.captures_iter(text) {
		if let (Some(left), Some(right)) = (captures.get(1), captures.get(2)) {
			left_chars.extend(left.as_str().chars());
			right_chars.extend(right.as_str().chars());
		}
	}

	Ok((shannon_entropy(&left_chars), shannon_entropy(&right_chars)))
}

/// Shannon entropy (base 2) of a multiset of characters.
///
/// An empty multiset has entropy 0.0: a candidate with no two-neighbor
/// occurrence is handled as absent rather than as a failure.
fn shannon_entropy(symbols: &[char]) -> f64 {
	if symbols.is_empty() {
		return 0.0;
	}

	let mut counts: HashMap<char, usize> = HashMap::new();
	for &symbol in symbols {
		*counts.entry(symbol).or_insert(0) += 1;
	}

	let total = symbols.len() as f64;
	-counts
		.values()
		.map(|&count| {
			let p = count as f64 / total;
			p * p.log2()
		})
		.sum::<f64>()
}
