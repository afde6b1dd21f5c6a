//! Loading bundles by logical name.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::discovery::{discover_bundles, BundleDiscoveryError, BundleInfo};
use super::metadata::{MetadataError, TemplateMetadata, METADATA_FILE_NAME};

#[derive(Debug, Error)]
pub enum BundleRepoError {
    #[error(transparent)]
    Discovery(#[from] BundleDiscoveryError),

    #[error("template bundle not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("failed to read bundle contents {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A bundle with decoded metadata and an inventory of its content files.
#[derive(Debug, Clone)]
pub struct LoadedBundle {
    pub info: BundleInfo,
    pub metadata: TemplateMetadata,
    /// Content files relative to the bundle directory, sorted. The metadata
    /// file itself is not content.
    pub files: Vec<PathBuf>,
}

pub struct BundleRepository {
    pub root: PathBuf,
    pub bundles: Vec<BundleInfo>,
}

impl BundleRepository {
    pub fn new(root: &Path) -> Result<Self, BundleDiscoveryError> {
        let bundles = discover_bundles(root)?;
        Ok(Self { root: root.to_path_buf(), bundles })
    }

    #[must_use]
    pub fn list_all(&self) -> &[BundleInfo] {
        &self.bundles
    }

    pub fn get_by_name(&self, name: &str) -> Result<LoadedBundle, BundleRepoError> {
        let info = self
            .bundles
            .iter()
            .find(|b| b.logical_name == name)
            .ok_or_else(|| BundleRepoError::NotFound(name.to_string()))?;

        let metadata = TemplateMetadata::load(&info.path)?;
        let files = content_files(&info.path)?;

        Ok(LoadedBundle { info: info.clone(), metadata, files })
    }
}

fn content_files(bundle_dir: &Path) -> Result<Vec<PathBuf>, BundleRepoError> {
    let mut out = Vec::new();

    for entry in WalkDir::new(bundle_dir) {
        let entry = entry.map_err(|e| BundleRepoError::Io {
            path: bundle_dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(bundle_dir).unwrap_or(entry.path());
        if rel == Path::new(METADATA_FILE_NAME) {
            continue;
        }
        out.push(rel.to_path_buf());
    }

    out.sort();
    Ok(out)
}
