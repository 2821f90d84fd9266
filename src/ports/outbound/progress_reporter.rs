/// ProgressReporter port for reporting assembly progress
///
/// This port abstracts user-facing progress output (e.g., to stderr),
/// kept apart from `tracing` diagnostics.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the sections of a BOM
    ///
    /// # Arguments
    /// * `current` - Number of sections assembled so far
    /// * `total` - Number of sections in this BOM kind
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// Reporter that discards everything, for library callers without a console.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
