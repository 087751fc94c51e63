//! App Core for QuickUrl.
//!
//! Wires the list manager, the file access broker and the settings engine
//! together, and dispatches menu clicks to the right opener.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

use crate::database::Database;
use crate::managers::list_manager::{ListManager, ListManagerTrait};
use crate::managers::menu_builder::build_menu;
use crate::platform;
use crate::platform::bookmarks::PathBookmarkStore;
use crate::platform::opener::SystemOpener;
use crate::services::file_access_broker::{BookmarkStore, FileAccessBroker, FilePrompt, UrlOpener};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::storage_service::StorageService;
use crate::types::entry::ListEntry;
use crate::types::menu::MenuItem;

/// Environment variable overriding the directory holding `quickurl.db`.
pub const DATA_DIR_ENV: &str = "QUICKURL_DATA_DIR";

pub type Broker =
    FileAccessBroker<Box<dyn BookmarkStore>, Box<dyn FilePrompt>, Box<dyn UrlOpener>>;

/// Resolves the database path: explicit setting, then `QUICKURL_DATA_DIR`,
/// then the platform data directory.
pub fn resolve_database_path(configured: Option<&str>) -> PathBuf {
    if let Some(path) = configured {
        return PathBuf::from(path);
    }
    let dir = std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| platform::get_data_dir());
    dir.join("quickurl.db")
}

/// Central application struct.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub list_manager: ListManager<StorageService>,
    pub broker: Broker,
}

impl App {
    /// Opens the database named by `settings_engine` with the platform's
    /// default launcher and file chooser.
    pub fn new(settings_engine: SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let broker = FileAccessBroker::new(
            Box::new(PathBookmarkStore) as Box<dyn BookmarkStore>,
            platform::dialog::default_prompt(),
            Box::new(SystemOpener) as Box<dyn UrlOpener>,
        );
        Self::with_broker(settings_engine, broker)
    }

    /// Builds the app around caller-supplied OS collaborators.
    pub fn with_broker(
        settings_engine: SettingsEngine,
        broker: Broker,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let storage_settings = settings_engine.get_settings().storage.clone();
        let db_path = resolve_database_path(storage_settings.database_path.as_deref());
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let db = Arc::new(Database::open(&db_path)?);
        info!(path = %db_path.display(), "Opened database");

        let storage = StorageService::new(db.clone(), &storage_settings.slot_key);
        let list_manager = ListManager::open(storage);

        Ok(Self {
            db,
            settings_engine,
            list_manager,
            broker,
        })
    }

    /// Reloads from storage and returns the current status menu.
    pub fn menu(&mut self) -> Vec<MenuItem> {
        self.list_manager.load_all();
        build_menu(
            self.list_manager.entries(),
            &self.settings_engine.get_settings().menu,
        )
    }

    /// Opens the entry with `id`.
    ///
    /// Local files go through the broker and any changed token is recorded
    /// on the entry. Returns false for dividers, unknown ids and targets
    /// that are not valid URLs.
    pub fn open_entry(&mut self, id: &Uuid) -> bool {
        let Some(entry) = self.list_manager.get(id).cloned() else {
            debug!(%id, "Open for unknown entry ignored");
            return false;
        };
        let Some(url) = entry.url() else {
            debug!(%id, "Entry has nothing to open");
            return false;
        };

        match entry.local_path() {
            Some(path) => {
                let token = self
                    .broker
                    .open_local_target(&path, entry.bookmark_token.as_deref());
                if token != entry.bookmark_token {
                    self.list_manager.update_bookmark_token(id, token);
                }
            }
            None => self.broker.open_url(&url),
        }
        true
    }

    /// Opens a draft target for previewing, if it is a web URL.
    pub fn test_target(&self, target: &str) -> bool {
        match Url::parse(target.trim()) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                self.broker.open_url(&url);
                true
            }
            _ => false,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        self.list_manager.entries()
    }
}
