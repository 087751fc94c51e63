//! QuickUrl database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value slots the entry list is stored in.
//!
//! # Usage
//!
//! ```no_run
//! use quickurl::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("quickurl.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! db.write_slot("example", b"[]").expect("write failed");
//! assert_eq!(db.read_slot("example").unwrap(), Some(b"[]".to_vec()));
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
