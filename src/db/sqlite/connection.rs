//! SQLite database connection and table lifecycle management.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{error, info};

use super::carrier::SqliteCarrierRepository;
use super::city::SqliteCityRepository;
use super::customer::SqliteCustomerRepository;
use super::schema::{CREATE_TABLES, DROP_TABLES};
use super::transaction::SqliteTransactionRepository;
use super::trip::SqliteTripRepository;
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Wraps one `SqlitePool` for the whole process; repositories borrow it via
/// the accessor methods, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open a database at the given path, creating the file if missing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// The pool is pinned to a single long-lived connection: each pooled
    /// connection would otherwise get its own private in-memory database.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Access the underlying pool.
    ///
    /// Useful for testing and advanced operations that need direct
    /// database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_ddl(&self, statements: &[&str]) -> DbResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| DbError::Schema {
            message: e.to_string(),
        })?;

        for statement in statements {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| DbError::Schema {
                    message: e.to_string(),
                })?;
        }

        tx.commit().await.map_err(|e| DbError::Schema {
            message: e.to_string(),
        })
    }
}

impl Database for SqliteDatabase {
    type Cities<'a>
        = SqliteCityRepository<'a>
    where
        Self: 'a;
    type Customers<'a>
        = SqliteCustomerRepository<'a>
    where
        Self: 'a;
    type Carriers<'a>
        = SqliteCarrierRepository<'a>
    where
        Self: 'a;
    type Transactions<'a>
        = SqliteTransactionRepository<'a>
    where
        Self: 'a;
    type Trips<'a>
        = SqliteTripRepository<'a>
    where
        Self: 'a;

    async fn tables_exist(&self) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(count > 0)
    }

    async fn create_tables(&self) -> DbResult<()> {
        if let Err(e) = self.run_ddl(&CREATE_TABLES).await {
            error!("Error during table creation, check your database connection: {}", e);
            self.pool.close().await;
            return Err(e);
        }
        info!("Created {} entity tables", CREATE_TABLES.len());
        Ok(())
    }

    async fn drop_tables(&self) -> DbResult<()> {
        if let Err(e) = self.run_ddl(&DROP_TABLES).await {
            error!("Error during table dropping, check your database connection: {}", e);
            self.pool.close().await;
            return Err(e);
        }
        info!("Dropped {} entity tables", DROP_TABLES.len());
        Ok(())
    }

    fn cities(&self) -> Self::Cities<'_> {
        SqliteCityRepository { pool: &self.pool }
    }

    fn customers(&self) -> Self::Customers<'_> {
        SqliteCustomerRepository { pool: &self.pool }
    }

    fn carriers(&self) -> Self::Carriers<'_> {
        SqliteCarrierRepository { pool: &self.pool }
    }

    fn transactions(&self) -> Self::Transactions<'_> {
        SqliteTransactionRepository { pool: &self.pool }
    }

    fn trips(&self) -> Self::Trips<'_> {
        SqliteTripRepository { pool: &self.pool }
    }
}
