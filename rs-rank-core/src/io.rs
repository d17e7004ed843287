use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;

/// Serializes a value as JSON and writes it to `path`.
///
/// Score tables serialize as plain string-keyed JSON objects, so the files
/// written here can be read back independently of this crate.
pub(crate) fn save_json<T, P>(value: &T, path: P) -> Result<()>
where
	T: Serialize,
	P: AsRef<Path>,
{
	let payload = serde_json::to_string(value)?;
	fs::write(path, payload)?;
	Ok(())
}

/// Reads a JSON file from `path` and deserializes it.
///
/// # Errors
/// Fails if the file does not exist, cannot be read, or does not parse as
/// the expected shape. A missing file is reported as-is rather than being
/// turned into an empty value: callers relying on previously saved scores
/// must learn that none are available.
pub(crate) fn load_json<T, P>(path: P) -> Result<T>
where
	T: DeserializeOwned,
	P: AsRef<Path>,
{
	let payload = fs::read_to_string(path)?;
	Ok(serde_json::from_str(&payload)?)
}
