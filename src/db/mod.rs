//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for data access,
//! allowing different storage backends (SQLite, PostgreSQL, in-memory, etc.)
//! to be swapped without changing business logic.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (City, Customer, Carrier, Transaction, Trip)
//! - `repository`: Trait definitions for data access and table lifecycle
//! - `sqlite`: sqlx-backed SQLite implementation

mod error;
mod models;
mod repository;
mod sqlite;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::{
    SqliteCarrierRepository, SqliteCityRepository, SqliteCustomerRepository, SqliteDatabase,
    SqliteTransactionRepository, SqliteTripRepository,
};
