use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// Used when a BOM is sent to a stream instead of the output directory.
pub trait OutputPresenter {
    /// Presents the rendered BOM or summary
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
