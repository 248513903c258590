//! Seed pipeline error types.
//!
//! Every failure names its stage: entity lookup, file access, header
//! validation, CSV parsing, or the database itself.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

/// Seed loading errors.
#[derive(Error, Diagnostic, Debug)]
pub enum SeedError {
    #[error("Unknown entity type: `{name}`")]
    #[diagnostic(
        code(tripstore::seed::unknown_entity),
        help("Register the entity in seed::SEED_SOURCES before loading it.")
    )]
    UnknownEntity { name: String },

    #[error("Source file not found: {}", path.display())]
    #[diagnostic(
        code(tripstore::seed::missing_source),
        help("Check the configured base and data directories.")
    )]
    MissingSource { path: PathBuf },

    #[error("Failed to open {}: {source}", path.display())]
    #[diagnostic(code(tripstore::seed::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown column `{column}` in {}: expected a subset of {expected:?}", path.display())]
    #[diagnostic(code(tripstore::seed::header))]
    Header {
        path: PathBuf,
        column: String,
        expected: &'static [&'static str],
    },

    #[error("Failed to parse {}: {source}", path.display())]
    #[diagnostic(code(tripstore::seed::csv))]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),
}

/// Result type for seed operations.
pub type SeedResult<T> = Result<T, SeedError>;
