// QuickUrl File Access Broker
// Turns a stored bookmark token into a scoped access session for a local
// file, or asks the user to pick the file again and mints a fresh token.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use url::Url;

use crate::types::errors::{AccessError, TokenFailure};

/// Resolves and mints persistent access tokens for local files.
pub trait BookmarkStore {
    /// Turns a token back into the path it grants access to.
    fn resolve(&self, token: &[u8]) -> Result<PathBuf, TokenFailure>;
    /// Creates a token granting renewed access to `path`.
    fn mint(&self, path: &Path) -> Result<Vec<u8>, AccessError>;
    /// Starts an access session. Returns false if no session was needed or
    /// it could not be started; the open is still attempted.
    fn begin_access(&self, path: &Path) -> bool;
    fn end_access(&self, path: &Path);
}

/// Launches URLs and files in the user's default handler.
pub trait UrlOpener {
    fn open_url(&self, url: &Url) -> Result<(), AccessError>;
    fn open_path(&self, path: &Path) -> Result<(), AccessError>;
}

/// Parameters for the single-file selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub directory: Option<PathBuf>,
    pub file_name: Option<String>,
    pub message: String,
    pub confirm_label: String,
    pub allow_directories: bool,
    pub allow_multiple: bool,
}

impl PromptRequest {
    /// Request defaulted to `target`'s parent directory and file name.
    pub fn for_target(target: &Path) -> Self {
        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        let shown = file_name.clone().unwrap_or_else(|| target.display().to_string());
        Self {
            directory: target.parent().map(Path::to_path_buf),
            file_name,
            message: format!("Grant access to open \"{}\"", shown),
            confirm_label: "Open".to_string(),
            allow_directories: false,
            allow_multiple: false,
        }
    }
}

/// Result of the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Selected(PathBuf),
    Cancelled,
}

/// Interactive single-file chooser. Blocks until the user confirms or cancels.
pub trait FilePrompt {
    fn choose_file(&self, request: &PromptRequest) -> PromptOutcome;
}

impl<T: BookmarkStore + ?Sized> BookmarkStore for Box<T> {
    fn resolve(&self, token: &[u8]) -> Result<PathBuf, TokenFailure> {
        (**self).resolve(token)
    }
    fn mint(&self, path: &Path) -> Result<Vec<u8>, AccessError> {
        (**self).mint(path)
    }
    fn begin_access(&self, path: &Path) -> bool {
        (**self).begin_access(path)
    }
    fn end_access(&self, path: &Path) {
        (**self).end_access(path)
    }
}

impl<T: UrlOpener + ?Sized> UrlOpener for Box<T> {
    fn open_url(&self, url: &Url) -> Result<(), AccessError> {
        (**self).open_url(url)
    }
    fn open_path(&self, path: &Path) -> Result<(), AccessError> {
        (**self).open_path(path)
    }
}

impl<T: FilePrompt + ?Sized> FilePrompt for Box<T> {
    fn choose_file(&self, request: &PromptRequest) -> PromptOutcome {
        (**self).choose_file(request)
    }
}

/// Access session that ends when dropped.
pub struct ScopedAccess<'a, B: BookmarkStore + ?Sized> {
    store: &'a B,
    path: &'a Path,
    started: bool,
}

impl<'a, B: BookmarkStore + ?Sized> ScopedAccess<'a, B> {
    pub fn begin(store: &'a B, path: &'a Path) -> Self {
        let started = store.begin_access(path);
        Self {
            store,
            path,
            started,
        }
    }
}

impl<B: BookmarkStore + ?Sized> Drop for ScopedAccess<'_, B> {
    fn drop(&mut self) {
        if self.started {
            self.store.end_access(self.path);
        }
    }
}

/// Opens local files, reusing stored bookmark tokens where they still work.
pub struct FileAccessBroker<B, P, O> {
    bookmarks: B,
    prompt: P,
    opener: O,
}

impl<B: BookmarkStore, P: FilePrompt, O: UrlOpener> FileAccessBroker<B, P, O> {
    pub fn new(bookmarks: B, prompt: P, opener: O) -> Self {
        Self {
            bookmarks,
            prompt,
            opener,
        }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Opens `path`, returning the token to store on the entry afterwards.
    ///
    /// - A resolvable `existing` token is used as-is and returned unchanged.
    /// - Otherwise the user is prompted. Cancelling returns `existing`
    ///   unchanged without opening anything.
    /// - A confirmed selection is opened and a new token minted for it. If
    ///   minting fails the file is still opened and `None` is returned.
    pub fn open_local_target(&self, path: &Path, existing: Option<&[u8]>) -> Option<Vec<u8>> {
        if let Some(token) = existing {
            match self.bookmarks.resolve(token) {
                Ok(resolved) => {
                    let _access = ScopedAccess::begin(&self.bookmarks, &resolved);
                    self.launch(&resolved);
                    return Some(token.to_vec());
                }
                Err(failure) => {
                    debug!(path = %path.display(), %failure, "Bookmark unusable, prompting");
                }
            }
        }

        let selected = match self.prompt.choose_file(&PromptRequest::for_target(path)) {
            PromptOutcome::Selected(selected) => selected,
            PromptOutcome::Cancelled => {
                debug!(path = %path.display(), "File selection cancelled");
                return existing.map(<[u8]>::to_vec);
            }
        };

        self.launch(&selected);

        match self.bookmarks.mint(&selected) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!(path = %selected.display(), error = %e, "Could not create bookmark");
                None
            }
        }
    }

    /// Opens a non-file URL in its default handler.
    pub fn open_url(&self, url: &Url) {
        if let Err(e) = self.opener.open_url(url) {
            warn!(%url, error = %e, "Failed to open URL");
        }
    }

    fn launch(&self, path: &Path) {
        if let Err(e) = self.opener.open_path(path) {
            warn!(path = %path.display(), error = %e, "Failed to open file");
        }
    }
}
