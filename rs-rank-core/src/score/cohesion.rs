use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::errors::{RankError, Result};

/// Internal-cohesion scores derived from a [`FrequencyTable`].
///
/// For each substring of length >= 2, the score is the minimum over all
/// prefix/suffix splits of the product of the parts' frequencies, divided
/// by the frequency of the whole substring. The minimum finds the weakest
/// split: the pairing least jointly frequent relative to chance. Substrings
/// that still score high behave as cohesive units rather than coincidental
/// juxtapositions.
///
/// # Invariants
/// - Entries exist only for substrings of length >= 2 present in the
///   source table; length-1 substrings are never scored
/// - Scores are always >= 0
/// - Derived once from a table and never mutated afterward
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct CohesionTable {
	scores: HashMap<String, f64>,
}

impl CohesionTable {
	/// Scores every substring of length >= 2 in `table`.
	///
	/// # Behavior
	/// - For each split point `i` in `1..len`, multiplies the prefix count
	///   by the suffix count (in u64, so large-corpus products cannot wrap).
	/// - Keeps the minimum product over all splits and divides it by the
	///   count of the whole substring.
	///
	/// # Errors
	/// Returns [`RankError::MissingFrequency`] if a prefix or suffix has no
	/// count. Every part of a counted substring is itself a counted window
	/// of the text, so this only fires on a construction defect; it aborts
	/// the computation rather than scoring from a silent default.
	pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
		let mut scores = HashMap::new();

		for (word, count) in table.entries() {
			let chars: Vec<char> = word.chars().collect();
			if chars.len() < 2 {
				continue;
			}

			let mut weakest = u64::MAX;
			for split in 1..chars.len() {
				let prefix: String = chars[..split].iter().collect();
				let suffix: String = chars[split..].iter().collect();
				let product = u64::from(component_count(table, word, &prefix)?)
					* u64::from(component_count(table, word, &suffix)?);
				weakest = weakest.min(product);
			}

			scores.insert(word.to_owned(), weakest as f64 / f64::from(count));
		}

		Ok(Self { scores })
	}

	/// Returns the cohesion score of `word`, or `0.0` if it was never
	/// scored. Absence is a valid default, not an error.
	pub fn score(&self, word: &str) -> f64 {
		self.scores.get(word).copied().unwrap_or(0.0)
	}

	/// Number of scored substrings.
	pub fn len(&self) -> usize {
		self.scores.len()
	}

	/// Returns `true` if no substring was scored.
	pub fn is_empty(&self) -> bool {
		self.scores.is_empty()
	}
}

/// Checked count lookup for a split component of `word`.
fn component_count(table: &FrequencyTable, word: &str, part: &str) -> Result<u32> {
	table.count(part).ok_or_else(|| RankError::MissingFrequency {
		word: word.to_owned(),
		part: part.to_owned(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn test_minimum_split_ratio() {
		let table = FrequencyTable::build("abcabcabc", 2).unwrap();
		let cohesion = CohesionTable::from_frequencies(&table).unwrap();

		// freq(a) * freq(b) / freq(ab) = 3 * 3 / 3
		assert!((cohesion.score("ab") - 3.0).abs() < EPSILON);
		assert!((cohesion.score("bc") - 3.0).abs() < EPSILON);
		// freq(c) * freq(a) / freq(ca) = 3 * 3 / 2
		assert!((cohesion.score("ca") - 4.5).abs() < EPSILON);
	}

	#[test]
	fn test_weakest_split_wins() {
		let table = FrequencyTable::build("aab", 3).unwrap();
		let cohesion = CohesionTable::from_frequencies(&table).unwrap();

		// "aab" splits as a|ab (2 * 1 = 2) and aa|b (1 * 1 = 1);
		// the weaker split divided by freq(aab) = 1 gives 1.0
		assert!((cohesion.score("aab") - 1.0).abs() < EPSILON);
		assert!((cohesion.score("aa") - 4.0).abs() < EPSILON);
	}

	#[test]
	fn test_single_characters_are_never_scored() {
		let table = FrequencyTable::build("abcabcabc", 2).unwrap();
		let cohesion = CohesionTable::from_frequencies(&table).unwrap();

		assert_eq!(cohesion.score("a"), 0.0);
		// Only the three length-2 substrings have entries
		assert_eq!(cohesion.len(), 3);
	}

	#[test]
	fn test_unscored_word_defaults_to_zero() {
		let table = FrequencyTable::build("abcabcabc", 2).unwrap();
		let cohesion = CohesionTable::from_frequencies(&table).unwrap();

		assert_eq!(cohesion.score("zz"), 0.0);
	}

	#[test]
	fn test_scores_are_non_negative() {
		let table = FrequencyTable::build("the cat sat on the mat", 4).unwrap();
		let cohesion = CohesionTable::from_frequencies(&table).unwrap();

		for (word, _) in table.entries() {
			assert!(cohesion.score(word) >= 0.0, "negative score for {word:?}");
		}
	}
}
