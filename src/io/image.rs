//! PNG export of rendered pictures and the label manifest

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::io::error::{GeneratorError, Result};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Save a picture as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    image
        .save(output_path)
        .map_err(|e| GeneratorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// One manifest row: picture file name and both label forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// Picture file name relative to the manifest
    pub file: String,
    /// Space-separated token form
    pub linearized: String,
    /// Bracketed functional form
    pub functional: String,
}

/// Render manifest rows as tab-separated lines
pub fn format_labels(records: &[LabelRecord]) -> String {
    records.iter().fold(String::new(), |mut out, record| {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            record.file, record.linearized, record.functional
        );
        out
    })
}

/// Write the tab-separated manifest, creating missing parent directories
///
/// # Errors
///
/// Returns [`GeneratorError::FileSystem`] if the directory or file cannot be
/// written
pub fn write_labels(records: &[LabelRecord], output_path: &Path) -> Result<()> {
    ensure_parent(output_path)?;
    fs::write(output_path, format_labels(records)).map_err(|e| GeneratorError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write labels",
        source: e,
    })
}
