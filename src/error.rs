//! Error types for the storage layer.
//!
//! Digest construction itself never fails (storage and parse problems are
//! absorbed into diagnostics per the partial-result contract), so the only
//! error enum here belongs to the store.

use thiserror::Error;

/// Errors specific to board-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Failed to create database directory: {0}")]
    CreateDir(std::io::Error),
}
