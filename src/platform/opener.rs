//! Default-handler launcher backed by the `open` crate.

use std::path::Path;

use tracing::debug;
use url::Url;

use crate::services::file_access_broker::UrlOpener;
use crate::types::errors::AccessError;

/// Hands URLs and files to the desktop's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

#[cfg(feature = "launcher")]
impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &Url) -> Result<(), AccessError> {
        debug!(%url, "Launching URL");
        open::that(url.as_str()).map_err(|e| AccessError::Open(e.to_string()))
    }

    fn open_path(&self, path: &Path) -> Result<(), AccessError> {
        debug!(path = %path.display(), "Launching file");
        open::that(path).map_err(|e| AccessError::Open(e.to_string()))
    }
}

#[cfg(not(feature = "launcher"))]
impl UrlOpener for SystemOpener {
    fn open_url(&self, url: &Url) -> Result<(), AccessError> {
        debug!(%url, "Launcher disabled");
        Err(AccessError::Open("built without the `launcher` feature".to_string()))
    }

    fn open_path(&self, path: &Path) -> Result<(), AccessError> {
        debug!(path = %path.display(), "Launcher disabled");
        Err(AccessError::Open("built without the `launcher` feature".to_string()))
    }
}
