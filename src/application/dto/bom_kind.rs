/// Kind of BOM the exporter assembles
///
/// Each kind reads its own branch of the scanner findings and has its
/// own default output filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    /// Cryptography BOM: ciphers, keys, TLS and certificates
    Cbom,
    /// Machine-learning BOM: models, frameworks, datasets and ML findings
    Mlbom,
}

impl BomKind {
    /// Default filename written inside the output directory
    ///
    /// # Examples
    /// ```
    /// use zero_bom::application::dto::BomKind;
    ///
    /// assert_eq!(BomKind::Cbom.default_filename(), "cbom.cdx.json");
    /// ```
    pub fn default_filename(&self) -> &'static str {
        match self {
            BomKind::Cbom => "cbom.cdx.json",
            BomKind::Mlbom => "mlbom.cdx.json",
        }
    }

    /// Label used in progress and log output
    pub fn label(&self) -> &'static str {
        match self {
            BomKind::Cbom => "CBOM",
            BomKind::Mlbom => "ML-BOM",
        }
    }
}

impl std::str::FromStr for BomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cbom" => Ok(BomKind::Cbom),
            "mlbom" | "ml-bom" => Ok(BomKind::Mlbom),
            _ => Err(format!(
                "Invalid BOM kind: {}. Please specify 'cbom' or 'mlbom'",
                s
            )),
        }
    }
}

impl std::fmt::Display for BomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BomKind::Cbom => write!(f, "cbom"),
            BomKind::Mlbom => write!(f, "mlbom"),
        }
    }
}
