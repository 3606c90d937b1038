//! TOML sidecar metadata for documents.
//!
//! Each document `notes/<path>` keeps its external-authorship ranges in
//! `notes/<metadata dir>/<path>.toml`:
//!
//! ```toml
//! [[external]]
//! start = 3
//! end = 7
//! ```
//!
//! An empty set is never written: the key is omitted and the sidecar removed.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use relative_path::RelativePath;
use serde::{Deserialize, Serialize};

use crate::annotations::AnnotationSet;
use crate::io::{self, IoError};

/// Default folder, relative to the notes root, holding sidecar files.
pub const DEFAULT_METADATA_DIR: &str = ".wysiwym";

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to access metadata {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("Invalid metadata in {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to encode metadata: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// One serialized `{start, end}` pair.
///
/// Signed so that corrupt files still decode; invalid pairs are dropped when
/// the set is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRange {
    pub start: i64,
    pub end: i64,
}

/// Everything stored for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external: Vec<PersistedRange>,
}

impl DocumentMetadata {
    pub fn from_set(set: &AnnotationSet) -> Self {
        Self {
            external: set
                .iter()
                .map(|r| PersistedRange {
                    start: r.start as i64,
                    end: r.end as i64,
                })
                .collect(),
        }
    }

    /// Rebuilds the annotation set, dropping structurally invalid pairs.
    pub fn to_set(&self) -> AnnotationSet {
        AnnotationSet::from_ranges(self.external.iter().map(|r| (r.start, r.end)))
    }

    pub fn is_empty(&self) -> bool {
        self.external.is_empty()
    }

    pub fn to_toml(&self) -> Result<String, MetadataError> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, MetadataError> {
        toml::from_str(content).map_err(|source| MetadataError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Sidecar location for `relative` (`notes/<metadata_dir>/<relative>.toml`).
pub fn sidecar_path(notes_root: &Path, metadata_dir: &str, relative: &RelativePath) -> PathBuf {
    let mut name = relative.to_string();
    name.push_str(".toml");
    RelativePath::new(&name).to_path(notes_root.join(metadata_dir))
}

/// Loads a sidecar; a missing file is an empty document.
pub fn load_metadata(path: &Path) -> Result<DocumentMetadata, MetadataError> {
    if !path.exists() {
        return Ok(DocumentMetadata::default());
    }
    let content = fs::read_to_string(path).map_err(|e| MetadataError::Io {
        path: path.to_path_buf(),
        source: IoError::Io(e),
    })?;
    DocumentMetadata::from_toml(&content, path)
}

/// Writes a sidecar, or removes it when `metadata` is empty.
pub fn save_metadata(path: &Path, metadata: &DocumentMetadata) -> Result<(), MetadataError> {
    let io_err = |source: IoError| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    };
    if metadata.is_empty() {
        debug!("Removing empty metadata sidecar {}", path.display());
        return io::remove_file_if_exists(path).map_err(io_err);
    }
    debug!(
        "Writing {} external range(s) to {}",
        metadata.external.len(),
        path.display()
    );
    io::write_path(path, &metadata.to_toml()?).map_err(io_err)
}
