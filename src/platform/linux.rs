// QuickUrl platform paths for Linux
// Config: ~/.config/quickurl
// Data:   ~/.local/share/quickurl

use std::env;
use std::path::PathBuf;

fn xdg_dir(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("quickurl"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            fallback
                .iter()
                .fold(PathBuf::from(home), |p, part| p.join(part))
                .join("quickurl")
        }
    }
}

/// Uses `$XDG_CONFIG_HOME/quickurl` if set, otherwise `~/.config/quickurl`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Uses `$XDG_DATA_HOME/quickurl` if set, otherwise `~/.local/share/quickurl`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}
