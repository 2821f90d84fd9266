use crate::application::dto::{BomKind, RawScan};
use crate::bom_generation::domain::Bom;
use crate::shared::Result;
use std::path::PathBuf;

/// BomExportPort - Inbound port for BOM assembly and writing
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to turn scanner output into CycloneDX documents. Assembly and
/// writing are separate steps: an assembled BOM can be inspected,
/// validated or rendered before anything touches the filesystem.
pub trait BomExportPort {
    /// Assembles a Cryptography BOM from crypto scanner output
    ///
    /// # Arguments
    /// * `raw` - Scanner output holding `findings.{ciphers,keys,tls,certificates}`
    ///
    /// # Errors
    /// Returns an error only if `raw` is not a JSON object
    fn export_cbom(&self, raw: RawScan) -> Result<Bom>;

    /// Assembles a Machine-Learning BOM from AI scanner output
    ///
    /// # Arguments
    /// * `raw` - Scanner output holding `findings.{models,frameworks,datasets,security,governance}`
    ///
    /// # Errors
    /// Returns an error only if `raw` is not a JSON object
    fn export_mlbom(&self, raw: RawScan) -> Result<Bom>;

    /// Serializes a BOM and writes it under `filename` in the output directory
    ///
    /// # Returns
    /// The path of the written file
    fn write_cbom(&self, bom: &Bom, filename: &str) -> Result<PathBuf>;

    /// Serializes an ML-BOM and writes it under `filename` in the output directory
    fn write_mlbom(&self, bom: &Bom, filename: &str) -> Result<PathBuf>;

    /// Serializes a BOM without writing it
    fn render(&self, bom: &Bom) -> Result<String>;

    /// Assembles the BOM of the given kind
    fn export(&self, kind: BomKind, raw: RawScan) -> Result<Bom> {
        match kind {
            BomKind::Cbom => self.export_cbom(raw),
            BomKind::Mlbom => self.export_mlbom(raw),
        }
    }

    /// Writes the BOM of the given kind
    fn write(&self, kind: BomKind, bom: &Bom, filename: &str) -> Result<PathBuf> {
        match kind {
            BomKind::Cbom => self.write_cbom(bom, filename),
            BomKind::Mlbom => self.write_mlbom(bom, filename),
        }
    }
}
