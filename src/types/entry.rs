//! List entry model: URL shortcuts and the dividers that separate them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// URL schemes a regular entry may point at.
pub const ACCEPTED_SCHEMES: [&str; 3] = ["http", "https", "file"];

/// One element of the quick-launch list.
///
/// A divider carries no title, target, or bookmark token. Field names are
/// part of the persisted format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: Uuid,
    pub title: String,
    pub target: String,
    pub is_divider: bool,
    /// Persisted access grant for a local file, present once the file has
    /// been opened successfully through the file access broker.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "token_base64"
    )]
    pub bookmark_token: Option<Vec<u8>>,
}

impl ListEntry {
    /// Creates a regular entry with a freshly generated id.
    pub fn new(title: &str, target: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            target: target.to_string(),
            is_divider: false,
            bookmark_token: None,
        }
    }

    /// Creates a divider entry.
    pub fn divider() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            target: String::new(),
            is_divider: true,
            bookmark_token: None,
        }
    }

    /// Advisory validity check used to gate save actions.
    ///
    /// Dividers are always valid. Regular entries need a target that parses
    /// as an absolute URL with one of [`ACCEPTED_SCHEMES`].
    pub fn is_valid(&self) -> bool {
        if self.is_divider {
            return true;
        }
        parse_target(&self.target).is_some()
    }

    /// Returns the parsed target, or `None` for dividers and invalid targets.
    pub fn url(&self) -> Option<Url> {
        if self.is_divider {
            return None;
        }
        parse_target(&self.target)
    }

    /// True if this entry points at a local file.
    pub fn is_local_file(&self) -> bool {
        self.url().is_some_and(|u| u.scheme() == "file")
    }

    /// Filesystem path of a local-file target.
    pub fn local_path(&self) -> Option<PathBuf> {
        self.url()
            .filter(|u| u.scheme() == "file")
            .and_then(|u| u.to_file_path().ok())
    }
}

fn parse_target(target: &str) -> Option<Url> {
    if target.is_empty() {
        return None;
    }
    Url::parse(target)
        .ok()
        .filter(|u| ACCEPTED_SCHEMES.contains(&u.scheme()))
}

/// Title/target pair being edited in the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub target: String,
}

impl EntryDraft {
    pub fn new(title: &str, target: &str) -> Self {
        Self {
            title: title.to_string(),
            target: target.to_string(),
        }
    }

    /// Whether the form may be submitted: both fields non-blank after
    /// trimming, and the target a web URL.
    pub fn can_save(&self) -> bool {
        let (title, target) = self.trimmed();
        !title.is_empty() && !target.is_empty() && is_web_url(&target)
    }

    /// Title and target with surrounding whitespace removed.
    pub fn trimmed(&self) -> (String, String) {
        (
            self.title.trim().to_string(),
            self.target.trim().to_string(),
        )
    }
}

/// True for absolute http/https URLs.
pub fn is_web_url(target: &str) -> bool {
    Url::parse(target)
        .map(|u| u.scheme() == "http" || u.scheme() == "https")
        .unwrap_or(false)
}

mod token_base64 {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(token: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match token {
            Some(bytes) => s.serialize_some(&BASE64.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(d)?;
        encoded
            .map(|s| BASE64.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
