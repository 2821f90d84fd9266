use crate::shared::Result;
use std::path::PathBuf;

/// BomSink port for persisting encoded BOM documents
///
/// A sink owns a destination (usually an output directory) and stores
/// documents in it by filename.
pub trait BomSink {
    /// Writes `content` under `filename`
    ///
    /// # Arguments
    /// * `filename` - Plain filename, without directory components
    /// * `content` - Encoded BOM document
    ///
    /// # Returns
    /// The full path of the written document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The filename contains path separators or `..`
    /// - The target is a symbolic link
    /// - The file cannot be created or written
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf>;
}
