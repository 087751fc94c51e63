use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the status-bar menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuItem {
    Link {
        id: Uuid,
        title: String,
        target: String,
    },
    Separator,
    /// Opens the list manager window.
    Manage { shortcut: char },
    Quit { shortcut: char },
}
