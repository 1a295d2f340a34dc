mod parser;

use super::domain::Entry;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum EntryImportError {
    #[error("failed to read diary export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid diary CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads diary entries from a CSV export.
///
/// Expected headers are `id,user_id,title,rating,tags,location,photo_url,created_at`; any column
/// may be missing or blank. Tags are separated by `;` or `|`.
pub struct EntryImporter;

impl EntryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, EntryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Entry>, EntryImportError> {
        Ok(parser::parse_entries(reader)?)
    }
}
