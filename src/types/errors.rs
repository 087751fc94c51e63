use std::fmt;

// === StorageError ===

/// Errors raised while reading or writing the persisted entry list.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying database rejected the read or write.
    Database(String),
    /// The entry list could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

// === TokenFailure ===

/// Why a stored bookmark token could not be turned into a usable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenFailure {
    /// The token bytes are not a bookmark at all.
    Invalid(String),
    /// The token decoded but the grant it describes must be renewed.
    Stale(String),
}

impl fmt::Display for TokenFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenFailure::Invalid(msg) => write!(f, "invalid bookmark: {}", msg),
            TokenFailure::Stale(msg) => write!(f, "stale bookmark: {}", msg),
        }
    }
}

// === AccessError ===

/// Errors related to opening entries and local file access.
#[derive(Debug)]
pub enum AccessError {
    /// A stored bookmark token could not be resolved.
    TokenResolution(TokenFailure),
    /// The user dismissed the file selection prompt.
    UserCancelled,
    /// A new bookmark token could not be created.
    TokenMint(String),
    /// The system handler could not be launched.
    Open(String),
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::TokenResolution(failure) => {
                write!(f, "Token resolution failed: {}", failure)
            }
            AccessError::UserCancelled => write!(f, "File selection cancelled"),
            AccessError::TokenMint(msg) => write!(f, "Failed to create bookmark: {}", msg),
            AccessError::Open(msg) => write!(f, "Failed to open: {}", msg),
        }
    }
}

impl std::error::Error for AccessError {}

impl From<TokenFailure> for AccessError {
    fn from(failure: TokenFailure) -> Self {
        AccessError::TokenResolution(failure)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
