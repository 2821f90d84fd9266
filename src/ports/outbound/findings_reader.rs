use crate::application::dto::RawScan;
use crate::shared::Result;
use std::path::Path;

/// FindingsReader port for loading scanner output
///
/// This port abstracts where scanner findings come from, so the
/// application core never touches the filesystem directly.
pub trait FindingsReader {
    /// Reads a scanner findings document
    ///
    /// # Arguments
    /// * `path` - Location of the findings JSON
    ///
    /// # Returns
    /// The raw, not yet normalized scan
    ///
    /// # Errors
    /// Returns an error if the file is missing, a symbolic link, too large or unreadable
    fn read_findings(&self, path: &Path) -> Result<RawScan>;
}
