//! Unified application error type.
//! All modules (store, db, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Record encoding error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Corrupt record '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid drink: {0}")]
    InvalidDrink(String),

    #[error("Unknown drink: {0}")]
    UnknownDrink(String),

    #[error("Unsupported photo file: {0}")]
    InvalidPhoto(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
