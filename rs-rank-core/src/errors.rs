use thiserror::Error;

/// Crate-wide result type, defaulting to [`RankError`].
pub type Result<T, E = RankError> = std::result::Result<T, E>;

/// Errors produced while building, persisting or loading score tables.
///
/// # Variants
/// - `InvalidArgument`: a construction parameter was rejected up front.
/// - `MissingFrequency`: a split component was absent from the frequency
///   table. The table construction guarantees every component of a counted
///   substring is itself counted, so this indicates a construction defect
///   and aborts the computation instead of being masked by a default.
/// - `Io` / `Json`: persistence failures, including a load from a path
///   where no scores were ever saved.
#[derive(Debug, Error)]
pub enum RankError {
	#[error("invalid argument: {arg}: {msg}")]
	InvalidArgument { arg: &'static str, msg: String },

	#[error("frequency table has no count for '{part}' while splitting '{word}'")]
	MissingFrequency { word: String, part: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl RankError {
	/// Builds an `InvalidArgument` error for the given parameter name.
	pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
	where
		S: Into<String>,
	{
		Self::InvalidArgument { arg, msg: msg.into() }
	}
}
