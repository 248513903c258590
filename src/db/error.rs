//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id {id}")]
    #[diagnostic(code(tripstore::db::not_found))]
    NotFound { entity_type: String, id: i64 },

    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(tripstore::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(tripstore::db::database_error))]
    Database { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(tripstore::db::schema_error))]
    Schema { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(tripstore::db::connection_error))]
    Connection { message: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(tripstore::db::constraint))]
    Constraint { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
