//! Trip data API server binary.
//!
//! This binary opens the concrete database implementation, ensures the
//! schema exists, and hands off to the API server. The API layer remains
//! agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tripstore::api::{self, ApiError, Config};
use tripstore::db::{Database, DbError, SqliteDatabase};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(tripstore::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(tripstore::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(tripstore::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "tripstore-api")]
#[command(author, version, about = "Trip data API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Database file path
    #[arg(long, default_value = "trips.sqlite")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    println!("Opening database at {:?}", cli.db);

    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&cli.db).await?;

    // Schema creation is not idempotent, so guard on the catalog check.
    if !db.tables_exist().await? {
        db.create_tables().await?;
        println!("Created database schema");
    }

    api::run(Config {
        host: cli.host,
        port: cli.port,
    })
    .await?;

    Ok(())
}
