//! Discovery of template bundles on disk.
//!
//! A bundle is a directory named `<Name>.xctemplate` that contains a
//! `TemplateInfo.plist`. Bundles may be grouped into category directories;
//! the logical name is the relative path with the bundle suffix removed
//! (e.g. `Source/Swift File`).

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::metadata::METADATA_FILE_NAME;

/// Directory suffix that marks a template bundle.
pub const BUNDLE_SUFFIX: &str = ".xctemplate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInfo {
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum BundleDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Discover all template bundles under the given root.
///
/// Results are sorted by logical name. Discovery does not descend into a
/// bundle once found, and it does not read the metadata file; a directory
/// with the bundle suffix but no metadata file is not a bundle.
pub fn discover_bundles(root: &Path) -> Result<Vec<BundleInfo>, BundleDiscoveryError> {
    let root = root
        .canonicalize()
        .map_err(|_| BundleDiscoveryError::MissingDir(root.display().to_string()))?;

    let mut out = Vec::new();
    let mut walker = WalkDir::new(&root).into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(|e| {
            BundleDiscoveryError::WalkError(root.display().to_string(), e)
        })?;

        let path = entry.path();
        if !entry.file_type().is_dir() || !is_bundle_dir(path) {
            continue;
        }

        // Bundle contents are not themselves bundles.
        walker.skip_current_dir();

        if !path.join(METADATA_FILE_NAME).is_file() {
            continue;
        }

        let rel = path.strip_prefix(&root).unwrap_or(path);
        out.push(BundleInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(out)
}

fn is_bundle_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.ends_with(BUNDLE_SUFFIX))
}

fn logical_name_from_relative(rel: &Path) -> String {
    let s = rel.to_string_lossy();
    s.strip_suffix(BUNDLE_SUFFIX).unwrap_or(&s).to_string()
}
