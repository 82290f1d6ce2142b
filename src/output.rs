//! Writing `.glif` files

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

/// Errors that can occur when writing GLIF files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Glyph name '{0}' cannot be used as a file name")]
    InvalidName(String),
}

/// File path for a glyph inside `dir`
///
/// Names that could resolve outside `dir` (path separators, `.`, `..`) or
/// to no file name at all are rejected.
pub fn glif_path(dir: &Path, glyph_name: &str) -> Result<PathBuf, OutputError> {
    let escapes = glyph_name.is_empty()
        || glyph_name == "."
        || glyph_name == ".."
        || glyph_name.contains(['/', '\\', '\0']);
    if escapes {
        return Err(OutputError::InvalidName(glyph_name.to_string()));
    }
    Ok(dir.join(format!("{}.glif", glyph_name)))
}

/// Write GLIF text to `<dir>/<glyph_name>.glif`, creating `dir` if needed
pub fn save_glif(glyph_name: &str, glif: &str, dir: &Path) -> Result<PathBuf, OutputError> {
    let path = glif_path(dir, glyph_name)?;
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    fs::write(&path, glif).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;

    info!("Saved {}.glif to {}", glyph_name, path.display());
    Ok(path)
}
