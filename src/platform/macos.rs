// QuickUrl platform paths for macOS
// Config and data both live in ~/Library/Application Support/QuickUrl

use std::env;
use std::path::PathBuf;

fn support_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("QuickUrl")
}

pub fn get_config_dir() -> PathBuf {
    support_dir()
}

pub fn get_data_dir() -> PathBuf {
    support_dir()
}
