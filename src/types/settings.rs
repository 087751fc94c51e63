use serde::{Deserialize, Serialize};

/// Application settings, persisted as `settings.json` in the config directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppSettings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub menu: MenuSettings,
}

/// Where the entry list is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Explicit database file; `None` means the platform data directory.
    pub database_path: Option<String>,
    /// Name of the key-value slot holding the serialized list.
    pub slot_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            slot_key: "savedURLItems".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    pub show_manage_item: bool,
    pub show_quit_item: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            show_manage_item: true,
            show_quit_item: true,
        }
    }
}
