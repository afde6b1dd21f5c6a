//! Decoding of bundle metadata from `TemplateInfo.plist`.
//!
//! The metadata file is a property list (XML or binary); `plist`'s serde
//! support maps it onto [`TemplateMetadata`]. A malformed plist is a real
//! error. Malformed *option entries* inside a well-formed plist are not:
//! they stay loose here and the context builder decides what is usable.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::vars::RawOptionEntry;

/// Name of the metadata file inside every bundle.
pub const METADATA_FILE_NAME: &str = "TemplateInfo.plist";

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read metadata file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: plist::Error,
    },
}

/// Declarative metadata of one template bundle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateMetadata {
    #[serde(rename = "Kind")]
    pub kind: Option<String>,

    #[serde(rename = "Identifier")]
    pub identifier: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,

    #[serde(rename = "Summary")]
    pub summary: Option<String>,

    #[serde(rename = "SortOrder")]
    pub sort_order: Option<i64>,

    #[serde(rename = "Platforms", default)]
    pub platforms: Vec<String>,

    /// Raw, loosely-typed option declarations. Filtering into usable
    /// options happens in the context builder, not here.
    #[serde(rename = "Options", default)]
    pub options: Vec<RawOptionEntry>,
}

impl TemplateMetadata {
    /// Read and decode the metadata file inside a bundle directory.
    pub fn load(bundle_dir: &Path) -> Result<Self, MetadataError> {
        let path = bundle_dir.join(METADATA_FILE_NAME);
        let bytes = std::fs::read(&path)
            .map_err(|e| MetadataError::Io { path: path.clone(), source: e })?;

        plist::from_bytes(&bytes)
            .map_err(|e| MetadataError::Parse { path, source: e })
    }
}
