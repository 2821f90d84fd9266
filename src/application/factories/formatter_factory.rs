use crate::adapters::outbound::formatters::CycloneDxJsonFormatter;
use crate::application::dto::OutputStyle;
use crate::ports::outbound::BomFormatter;

/// Factory for creating BOM formatters
///
/// This factory encapsulates the creation logic for the formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output style
    ///
    /// # Arguments
    /// * `style` - The JSON layout to create a formatter for
    ///
    /// # Returns
    /// A boxed BomFormatter trait object, shareable across threads
    ///
    /// # Examples
    /// ```
    /// use zero_bom::application::dto::OutputStyle;
    /// use zero_bom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputStyle::Compact);
    /// ```
    pub fn create(style: OutputStyle) -> Box<dyn BomFormatter + Send + Sync> {
        match style {
            OutputStyle::Pretty => Box::new(CycloneDxJsonFormatter::pretty()),
            OutputStyle::Compact => Box::new(CycloneDxJsonFormatter::compact()),
        }
    }

    /// Returns the progress message for the specified output style
    ///
    /// # Examples
    /// ```
    /// use zero_bom::application::dto::OutputStyle;
    /// use zero_bom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputStyle::Pretty);
    /// assert_eq!(message, "📝 Encoding CycloneDX 1.6 JSON...");
    /// ```
    pub fn progress_message(style: OutputStyle) -> &'static str {
        match style {
            OutputStyle::Pretty => "📝 Encoding CycloneDX 1.6 JSON...",
            OutputStyle::Compact => "📝 Encoding compact CycloneDX 1.6 JSON...",
        }
    }
}
