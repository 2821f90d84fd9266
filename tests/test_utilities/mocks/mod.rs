/// Mock implementations for testing
mod mock_bom_sink;
mod mock_findings_reader;
mod mock_progress_reporter;

pub use mock_bom_sink::MockBomSink;
pub use mock_findings_reader::MockFindingsReader;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
