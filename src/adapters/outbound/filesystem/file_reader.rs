use crate::application::dto::RawScan;
use crate::ports::outbound::FindingsReader;
use crate::shared::error::BomError;
use crate::shared::security::{validate_input_file, MAX_FINDINGS_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading scanner findings from disk
///
/// This adapter implements the FindingsReader port. Symbolic links,
/// non-regular files and files above the size limit are refused.
pub struct FileSystemReader {
    max_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_FINDINGS_FILE_SIZE,
        }
    }

    /// Overrides the size limit in bytes.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FindingsReader for FileSystemReader {
    fn read_findings(&self, path: &Path) -> Result<RawScan> {
        validate_input_file(path, self.max_size)?;

        let bytes = fs::read(path).map_err(|e| BomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(RawScan::Bytes(bytes))
    }
}
