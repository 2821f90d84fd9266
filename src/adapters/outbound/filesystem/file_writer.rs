use crate::ports::outbound::{BomSink, OutputPresenter};
use crate::shared::error::BomError;
use crate::shared::security::{validate_not_symlink, validate_output_filename};
use crate::shared::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// DirectoryWriter adapter for writing BOM documents into a directory
///
/// This adapter implements the BomSink port. Documents are written as
/// plain files directly inside the output directory.
#[derive(Debug, Clone)]
pub struct DirectoryWriter {
    output_dir: PathBuf,
}

impl DirectoryWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validates that the output directory exists before writing
    fn validate_output_dir(&self, target: &Path) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(BomError::FileWriteError {
                path: target.to_path_buf(),
                details: format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl BomSink for DirectoryWriter {
    fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        validate_output_filename(filename)?;
        let path = self.output_dir.join(filename);

        // Security validations
        self.validate_output_dir(&path)?;
        validate_not_symlink(&path)?;

        let to_write_error = |e: io::Error| BomError::FileWriteError {
            path: path.clone(),
            details: e.to_string(),
        };
        let file = File::create(&path).map_err(to_write_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .map_err(to_write_error)?;
        writer.flush().map_err(to_write_error)?;

        Ok(path)
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_directory_writer_success() {
        let temp_dir = TempDir::new().unwrap();

        let writer = DirectoryWriter::new(temp_dir.path());
        let path = writer.write("cbom.cdx.json", "{}").unwrap();

        assert_eq!(path, temp_dir.path().join("cbom.cdx.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_directory_writer_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("mlbom.cdx.json"), "old content").unwrap();

        let writer = DirectoryWriter::new(temp_dir.path());
        let path = writer.write("mlbom.cdx.json", "new").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_directory_writer_missing_directory() {
        let writer = DirectoryWriter::new("/nonexistent/directory");
        let result = writer.write("cbom.cdx.json", "{}");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Output directory does not exist"));
        assert!(err_string.contains("/nonexistent/directory/cbom.cdx.json"));
    }

    #[test]
    fn test_directory_writer_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let writer = DirectoryWriter::new(temp_dir.path());

        for filename in ["../escape.json", "nested/cbom.json", "", ".."] {
            let result = writer.write(filename, "{}");
            assert!(result.is_err(), "accepted filename {:?}", filename);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        fs::write(&real, "keep").unwrap();
        std::os::unix::fs::symlink(&real, temp_dir.path().join("cbom.cdx.json")).unwrap();

        let writer = DirectoryWriter::new(temp_dir.path());
        let result = writer.write("cbom.cdx.json", "{}");

        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
        assert_eq!(fs::read_to_string(real).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        let result = presenter.present("{}");
        assert!(result.is_ok());
    }
}
