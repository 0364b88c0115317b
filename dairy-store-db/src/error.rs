// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Error types for record store operations.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during record store operations.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to open database with context
    #[error("Failed to open database at '{path}': {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the directory holding the database file
    #[error("Failed to create database directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required field was missing or blank
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Another animal already carries this tag
    #[error("Duplicate tag_id: {0}")]
    DuplicateTag(String),

    /// The referenced farmer does not exist
    #[error("Invalid farmer_id: {0}")]
    UnknownFarmer(i64),

    /// The referenced animal does not exist
    #[error("Invalid animal_id: {0}")]
    UnknownAnimal(i64),
}

impl Error {
    /// Whether this error means the write clashed with existing records
    /// (duplicate tag or dangling owner reference).
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateTag(_) | Self::UnknownFarmer(_))
    }
}

/// Which kind of constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constraint {
    Unique,
    ForeignKey,
}

/// Classify a constraint violation by its extended result code.
pub(crate) fn violated_constraint(err: &rusqlite::Error) -> Option<Constraint> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    Some(Constraint::Unique)
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
                _ => None,
            }
        }
        _ => None,
    }
}
