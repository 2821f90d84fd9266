use crate::bom_generation::domain::Bom;
use crate::shared::Result;

/// BomFormatter port for serializing BOM documents
///
/// This port abstracts the wire encoding of an assembled BOM
/// (pretty CycloneDX JSON, compact CycloneDX JSON).
pub trait BomFormatter {
    /// Formats a BOM document
    ///
    /// # Arguments
    /// * `bom` - The assembled BOM
    ///
    /// # Returns
    /// The encoded document as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, bom: &Bom) -> Result<String>;
}

impl<T: BomFormatter + ?Sized> BomFormatter for Box<T> {
    fn format(&self, bom: &Bom) -> Result<String> {
        (**self).format(bom)
    }
}
