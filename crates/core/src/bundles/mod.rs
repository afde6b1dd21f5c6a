//! Template bundle inventory: discovery, metadata decoding, loading.

pub mod discovery;
pub mod metadata;
pub mod repository;

pub use discovery::{discover_bundles, BundleDiscoveryError, BundleInfo};
pub use metadata::{MetadataError, TemplateMetadata, METADATA_FILE_NAME};
pub use repository::{BundleRepoError, BundleRepository, LoadedBundle};
