//! Portable local file bookmarks.
//!
//! A token records the file's path and, where the platform exposes one, its
//! file identity. A token whose file has vanished or been replaced by a
//! different file is stale.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::services::file_access_broker::BookmarkStore;
use crate::types::errors::{AccessError, TokenFailure};

#[derive(Debug, Serialize, Deserialize)]
struct PathBookmark {
    path: PathBuf,
    #[serde(default)]
    file_id: Option<u64>,
}

#[cfg(unix)]
fn file_id(meta: &fs::Metadata) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;
    Some(meta.ino())
}

#[cfg(not(unix))]
fn file_id(_meta: &fs::Metadata) -> Option<u64> {
    None
}

/// Bookmark store that needs no OS support.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathBookmarkStore;

impl BookmarkStore for PathBookmarkStore {
    fn resolve(&self, token: &[u8]) -> Result<PathBuf, TokenFailure> {
        let bookmark: PathBookmark =
            serde_json::from_slice(token).map_err(|e| TokenFailure::Invalid(e.to_string()))?;

        let meta = fs::metadata(&bookmark.path)
            .map_err(|e| TokenFailure::Stale(format!("{}: {}", bookmark.path.display(), e)))?;
        if !meta.is_file() {
            return Err(TokenFailure::Stale(format!(
                "{} is no longer a file",
                bookmark.path.display()
            )));
        }
        if bookmark.file_id.is_some() && bookmark.file_id != file_id(&meta) {
            return Err(TokenFailure::Stale(format!(
                "{} was replaced",
                bookmark.path.display()
            )));
        }
        Ok(bookmark.path)
    }

    fn mint(&self, path: &Path) -> Result<Vec<u8>, AccessError> {
        let path = fs::canonicalize(path).map_err(|e| AccessError::TokenMint(e.to_string()))?;
        let meta = fs::metadata(&path).map_err(|e| AccessError::TokenMint(e.to_string()))?;
        if !meta.is_file() {
            return Err(AccessError::TokenMint(format!(
                "{} is not a file",
                path.display()
            )));
        }
        let bookmark = PathBookmark {
            file_id: file_id(&meta),
            path,
        };
        serde_json::to_vec(&bookmark).map_err(|e| AccessError::TokenMint(e.to_string()))
    }

    fn begin_access(&self, path: &Path) -> bool {
        trace!(path = %path.display(), "Access session started");
        true
    }

    fn end_access(&self, path: &Path) {
        trace!(path = %path.display(), "Access session ended");
    }
}
