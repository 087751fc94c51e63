// QuickUrl platform layer
// OS collaborators the core consumes (launcher, file chooser, local file
// bookmarks) and the per-user directories for settings and the database.
//
// | OS      | settings                         | database                        |
// |---------|----------------------------------|---------------------------------|
// | Linux   | `$XDG_CONFIG_HOME` or `~/.config` | `$XDG_DATA_HOME` or `~/.local/share` |
// | macOS   | `~/Library/Application Support`  | same                            |
// | Windows | `%APPDATA%`                      | same                            |

use std::path::PathBuf;

pub mod bookmarks;
pub mod dialog;
pub mod opener;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as os;

/// Directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    os::get_config_dir()
}

/// Directory holding the list database unless settings or
/// `QUICKURL_DATA_DIR` point elsewhere.
pub fn get_data_dir() -> PathBuf {
    os::get_data_dir()
}
