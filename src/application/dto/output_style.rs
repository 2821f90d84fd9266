/// JSON layout of a written BOM
///
/// This enum belongs in the application layer as both the CLI (inbound
/// adapter) and the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Two-space indented JSON (default)
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl std::str::FromStr for OutputStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputStyle::Pretty),
            "compact" => Ok(OutputStyle::Compact),
            _ => Err(format!(
                "Invalid output style: {}. Please specify 'pretty' or 'compact'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputStyle::Pretty => write!(f, "pretty"),
            OutputStyle::Compact => write!(f, "compact"),
        }
    }
}
