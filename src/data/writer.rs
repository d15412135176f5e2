use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::Question;

pub const DEFAULT_OUTPUT_PATH: &str = "questions.json";

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `questions` to `path` as a pretty-printed JSON array, replacing any
/// existing file. Returns how many questions were written.
pub fn write_questions<P: AsRef<Path>>(questions: &[Question], path: P) -> Result<usize, WriteError> {
    let path = path.as_ref();

    // serde_json leaves non-ASCII text unescaped and indents with two spaces.
    let mut json = serde_json::to_string_pretty(questions)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} questions to {}", questions.len(), path.display());
    Ok(questions.len())
}
