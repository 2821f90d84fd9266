/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod bom_formatter;
pub mod bom_sink;
pub mod findings_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use bom_formatter::BomFormatter;
pub use bom_sink::BomSink;
pub use findings_reader::FindingsReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::{ProgressReporter, SilentProgressReporter};
