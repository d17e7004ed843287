use std::path::PathBuf;

use tracing::{debug, info};

use super::cohesion::CohesionTable;
use super::entropy::EntropyTable;
use super::frequency::FrequencyTable;
use crate::errors::{RankError, Result};
use crate::io;

/// Default highest substring length considered for scoring.
pub const DEFAULT_NGRAM: usize = 4;

/// Default reserved marker excluding a candidate from entropy scoring.
///
/// Upstream producers may hand over pre-masked candidates containing this
/// character; the scorer treats it purely as an opaque exclusion rule.
pub const DEFAULT_WILDCARD: char = '*';

/// Construction parameters for a [`Scorer`].
///
/// Contains both **scoring parameters** (n-gram order, wildcard marker)
/// and **persistence locations** (one optional path per score table).
///
/// # Notes
/// - With no path configured, computed scores stay in memory only.
/// - Load mode ([`Scorer::from_store`]) requires both paths.
pub struct ScoreOptions {
	/// Highest substring length considered, >= 1.
	pub ngram: usize,

	/// Reserved marker char excluding a candidate from entropy scoring.
	pub wildcard: char,

	/// Where cohesion scores are persisted, if anywhere.
	pub cohesion_path: Option<PathBuf>,

	/// Where entropy scores are persisted, if anywhere.
	pub entropy_path: Option<PathBuf>,
}

impl Default for ScoreOptions {
	fn default() -> Self {
		Self {
			ngram: DEFAULT_NGRAM,
			wildcard: DEFAULT_WILDCARD,
			cohesion_path: None,
			entropy_path: None,
		}
	}
}

/// High-level facade over the cohesion and entropy score tables.
///
/// # Responsibilities
/// - Compute both score tables from a text, persisting them when paths
///   are configured (compute mode)
/// - Reload previously persisted score tables (load mode)
/// - Serve point lookups with defined defaults for unscored words
///
/// # Invariants
/// - Owns exactly one cohesion table and one entropy table, created
///   together at construction and never mutated afterward
/// - Lookups never fail and never recompute
pub struct Scorer {
	cohesion: CohesionTable,
	entropy: EntropyTable,
}

impl Scorer {
	/// Compute mode: builds the frequency table from `text` and derives
	/// both score tables, persisting each one whose path is configured.
	///
	/// # Parameters
	/// - `text`: the input text; surrounding whitespace is trimmed.
	/// - `options`: n-gram order, wildcard marker and persistence paths.
	///
	/// # Errors
	/// - If the trimmed text is empty or `options.ngram` is 0.
	/// - If a configured persistence path cannot be written.
	/// - If the cohesion computation hits a missing component count
	///   (a construction defect, see [`RankError::MissingFrequency`]).
	pub fn from_text(text: &str, options: &ScoreOptions) -> Result<Self> {
		let text = text.trim();
		if text.is_empty() {
			return Err(RankError::invalid_argument("text", "must not be empty"));
		}

		info!("computing score tables from input text");
		let frequencies = FrequencyTable::build(text, options.ngram)?;
		let cohesion = CohesionTable::from_frequencies(&frequencies)?;
		let entropy = EntropyTable::from_frequencies(&frequencies, text, options.wildcard);

		if let Some(path) = &options.cohesion_path {
			io::save_json(&cohesion, path)?;
			info!("saved cohesion scores to {}", path.display());
		}
		if let Some(path) = &options.entropy_path {
			io::save_json(&entropy, path)?;
			info!("saved entropy scores to {}", path.display());
		}

		Ok(Self { cohesion, entropy })
	}

	/// Load mode: reloads both score tables persisted by an earlier
	/// compute-mode run. No computation is performed.
	///
	/// # Errors
	/// - If either path is not configured in `options`.
	/// - If either file is missing or unreadable: a caller relying on
	///   previously computed scores must know they are unavailable.
	pub fn from_store(options: &ScoreOptions) -> Result<Self> {
		let (Some(cohesion_path), Some(entropy_path)) =
			(&options.cohesion_path, &options.entropy_path)
		else {
			return Err(RankError::invalid_argument(
				"options",
				"load mode requires both cohesion_path and entropy_path",
			));
		};

		let cohesion = io::load_json(cohesion_path)?;
		let entropy = io::load_json(entropy_path)?;
		debug!(
			"loaded score tables from {} and {}",
			cohesion_path.display(),
			entropy_path.display()
		);

		Ok(Self { cohesion, entropy })
	}

	/// Returns the cohesion score of `word`, or `0.0` if unscored.
	pub fn cohesion_score(&self, word: &str) -> f64 {
		self.cohesion.score(word)
	}

	/// Returns the `(left, right)` context entropies of `word`, or
	/// `(0.0, 0.0)` if unscored.
	pub fn context_entropy(&self, word: &str) -> (f64, f64) {
		self.entropy.entropy(word)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPSILON: f64 = 1e-9;

	fn options_with_paths(dir: &std::path::Path) -> ScoreOptions {
		let mut options = ScoreOptions::default();
		options.ngram = 2;
		options.cohesion_path = Some(dir.join("cohesion.json"));
		options.entropy_path = Some(dir.join("entropy.json"));
		options
	}

	#[test]
	fn test_compute_mode_scores_and_defaults() {
		let mut options = ScoreOptions::default();
		options.ngram = 2;
		let scorer = Scorer::from_text("abcabcabc", &options).unwrap();

		assert!((scorer.cohesion_score("ab") - 3.0).abs() < EPSILON);
		assert!((scorer.cohesion_score("ca") - 4.5).abs() < EPSILON);
		// Unscored words resolve to defined defaults, never errors
		assert_eq!(scorer.cohesion_score("zz"), 0.0);
		assert_eq!(scorer.cohesion_score("a"), 0.0);
		assert_eq!(scorer.context_entropy("zz"), (0.0, 0.0));
	}

	#[test]
	fn test_empty_text_is_rejected() {
		let options = ScoreOptions::default();
		assert!(Scorer::from_text("", &options).is_err());
		assert!(Scorer::from_text("  \n\t ", &options).is_err());
	}

	#[test]
	fn test_surrounding_whitespace_is_trimmed() {
		let mut options = ScoreOptions::default();
		options.ngram = 2;
		let scorer = Scorer::from_text("  abcabcabc \n", &options).unwrap();

		// The padding never reaches the frequency table
		assert!((scorer.cohesion_score("ab") - 3.0).abs() < EPSILON);
		assert_eq!(scorer.cohesion_score(" a"), 0.0);
	}

	#[test]
	fn test_save_then_load_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_with_paths(dir.path());
		let text = "1ab2 3ab4";

		let computed = Scorer::from_text(text, &options).unwrap();
		let loaded = Scorer::from_store(&options).unwrap();

		let table = FrequencyTable::build(text, options.ngram).unwrap();
		for (word, _) in table.entries() {
			assert_eq!(
				computed.cohesion_score(word),
				loaded.cohesion_score(word),
				"cohesion mismatch for {word:?}"
			);
			assert_eq!(
				computed.context_entropy(word),
				loaded.context_entropy(word),
				"entropy mismatch for {word:?}"
			);
		}
		// Spot-check a known value survived the trip
		assert!((loaded.context_entropy("ab").0 - 1.0).abs() < EPSILON);
		assert_eq!(loaded.cohesion_score("zz"), 0.0);
	}

	#[test]
	fn test_load_mode_without_saved_scores_fails() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_with_paths(dir.path());

		// Nothing was ever saved at these paths
		let loaded = Scorer::from_store(&options);
		assert!(matches!(loaded, Err(RankError::Io(_))));
	}

	#[test]
	fn test_load_mode_requires_both_paths() {
		let options = ScoreOptions::default();
		assert!(matches!(
			Scorer::from_store(&options),
			Err(RankError::InvalidArgument { .. })
		));
	}
}
