use crate::application::dto::OutputStyle;
use crate::bom_generation::domain::Bom;
use crate::ports::outbound::BomFormatter;
use crate::shared::Result;

/// CycloneDxJsonFormatter adapter for CycloneDX 1.6 JSON output
///
/// Pretty output uses two-space indentation. Compact output is a single line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CycloneDxJsonFormatter {
    style: OutputStyle,
}

impl CycloneDxJsonFormatter {
    pub fn new(style: OutputStyle) -> Self {
        Self { style }
    }

    pub fn pretty() -> Self {
        Self::new(OutputStyle::Pretty)
    }

    pub fn compact() -> Self {
        Self::new(OutputStyle::Compact)
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }
}

impl BomFormatter for CycloneDxJsonFormatter {
    fn format(&self, bom: &Bom) -> Result<String> {
        let json = match self.style {
            OutputStyle::Pretty => bom.to_json()?,
            OutputStyle::Compact => bom.to_json_compact()?,
        };
        Ok(json)
    }
}
