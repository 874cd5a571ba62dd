/*!
 * JSON serialization of a finished corpus.
 */

use std::path::Path;

use crate::errors::CorpusError;
use crate::file_utils::FileManager;
use crate::poem::PoemRecord;

/// Encode the corpus as a pretty-printed JSON array.
///
/// Uses 2-space indentation, keeps non-ASCII characters literal and adds no
/// trailing newline, so equal inputs give byte-identical output.
pub fn to_json(records: &[PoemRecord]) -> Result<String, CorpusError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize the corpus and atomically replace `path` with it
pub fn write_corpus<P: AsRef<Path>>(records: &[PoemRecord], path: P) -> Result<(), CorpusError> {
    let json = to_json(records)?;
    FileManager::write_atomically(path, json.as_bytes())
}
