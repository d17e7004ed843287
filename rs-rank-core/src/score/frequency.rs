use std::collections::HashMap;

use crate::errors::{RankError, Result};

/// Frequency table of every contiguous substring of a text.
///
/// The table counts each substring of character length `1..=max_len` over
/// overlapping sliding windows, so for a text of `L` characters there are
/// `L - i + 1` windows of length `i` (and none once `i` exceeds `L`).
///
/// # Responsibilities
/// - Count every realizable window exactly once per occurrence
/// - Serve checked per-substring count lookups to the scorers
///
/// # Invariants
/// - `max_len` is always >= 1
/// - Keys are exactly the windows of length `1..=max_len` over the text;
///   no other key exists and no realizable window is missing
/// - Built once and never mutated afterward
#[derive(Clone, Debug)]
pub struct FrequencyTable {
	/// Highest substring length counted.
	max_len: usize,

	/// Mapping from substring to its occurrence count in the text.
	counts: HashMap<String, u32>,
}

impl FrequencyTable {
	/// Builds the table by sliding windows of size `1..=max_len` over `text`.
	///
	/// This is the asymptotic cost center of the crate: O(L * max_len)
	/// windows are generated, each hashed once for counting.
	///
	/// # Notes
	/// - UTF-8 safe: windows are taken over characters, not bytes.
	///
	/// # Errors
	/// Returns an error if `max_len` is 0.
	pub fn build(text: &str, max_len: usize) -> Result<Self> {
		if max_len == 0 {
			return Err(RankError::invalid_argument("max_len", "must be >= 1"));
		}

		let chars: Vec<char> = text.chars().collect();
		let mut counts: HashMap<String, u32> = HashMap::new();

		for len in 1..=max_len {
			if len > chars.len() {
				// Remaining window sizes exceed the text
				break;
			}
			for window in chars.windows(len) {
				let key: String = window.iter().collect();
				*counts.entry(key).or_insert(0) += 1;
			}
		}

		Ok(Self { max_len, counts })
	}

	/// Returns the occurrence count of `word`, or `None` if it is not a
	/// counted window of the text.
	///
	/// The lookup is deliberately checked: scorers treat a missing count
	/// for a component substring as an invariant violation, not as zero.
	pub fn count(&self, word: &str) -> Option<u32> {
		self.counts.get(word).copied()
	}

	/// Iterates over all counted substrings and their counts.
	pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Number of distinct substrings in the table.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Returns `true` if the table holds no substrings.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Highest substring length this table was built with.
	pub fn max_len(&self) -> usize {
		self.max_len
	}
}
