use crate::shared::error::BomError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Upper bound for a scanner findings file (32 MB).
///
/// Scanner output for a single repository is a few hundred findings;
/// anything far beyond that is not a findings document.
pub const MAX_FINDINGS_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Rejects symbolic links and non-regular files, then checks the size limit.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_input_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| BomError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input path is a symbolic link".to_string(),
            hint: "Pass the scanner output file directly instead of a link to it".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(BomError::FileReadError {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        }
        .into());
    }

    if metadata.len() > max_size {
        return Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                metadata.len(),
                max_size
            ),
            hint: "Split the scan into smaller findings documents".to_string(),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Checks that a BOM filename is a single plain path segment.
///
/// Filenames are joined onto the exporter's output directory, so separators,
/// `..` and absolute paths would let a caller write outside of it.
pub fn validate_output_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(BomError::Validation {
            message: "BOM filename must not be empty".to_string(),
        }
        .into());
    }

    let mut components = Path::new(filename).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || filename.contains('/') || filename.contains('\\') {
        return Err(BomError::Validation {
            message: format!(
                "BOM filename '{}' must be a plain file name without directories",
                filename
            ),
        }
        .into());
    }

    Ok(())
}

/// Rejects an existing output path that is a symbolic link.
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(BomError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output path is a symbolic link".to_string(),
            hint: "Remove the link or choose another filename".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}
