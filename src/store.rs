//! Directory-backed template store
//!
//! Supplies raw component template text to the catalog scan. All I/O happens
//! here, up front; nothing downstream of the catalog touches the filesystem.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while listing template sources
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("template directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("error walking template directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("error reading template file {path}: {message}")]
    FileRead { path: PathBuf, message: String },
}

/// Raw text of one template file, keyed by its logical identifier
#[derive(Debug, Clone)]
pub struct TemplateSource {
    /// `/`-separated path relative to the store root
    pub id: String,
    /// Full file text
    pub text: String,
}

/// List every `.vue` template source under `dir`, sorted by identifier.
///
/// Sorting keeps catalog scan order stable across platforms and runs, which
/// in turn keeps unoptimized resolution output deterministic.
pub fn list_template_sources(dir: &Path) -> Result<Vec<TemplateSource>, StoreError> {
    if !dir.is_dir() {
        return Err(StoreError::MissingDirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("vue") {
            continue;
        }
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        sources.push(TemplateSource {
            id: source_id(dir, path),
            text,
        });
    }
    sources.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(sources)
}

fn source_id(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
