//! Trip data seed CLI.
//!
//! Loads the registered CSV sources into the database, drops the schema for
//! teardown, and prints per-table row counts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Diagnostic;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripstore::db::{
    CarrierRepository, CityRepository, CustomerRepository, Database, DbError, SqliteDatabase,
    TransactionRepository, TripRepository,
};
use tripstore::seed::{self, SeedConfig, SeedError};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(tripstore::binary::database))]
    Database(#[from] DbError),

    #[error("Seed error: {0}")]
    #[diagnostic(code(tripstore::binary::seed))]
    Seed(#[from] SeedError),
}

#[derive(Parser)]
#[command(name = "tripstore-seed")]
#[command(author, version, about = "Trip data seed loader", long_about = None)]
struct Cli {
    /// Database file path
    #[arg(long, default_value = "trips.sqlite")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every registered seed file into the database
    Load {
        /// Base directory containing the data directory
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Data directory, relative to the base directory
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Drop all entity tables
    Drop,
    /// Print row counts per entity table
    Status,
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripstore=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    init_tracing();
    let cli = Cli::parse();

    let db = SqliteDatabase::open(&cli.db).await?;

    match cli.command {
        Commands::Load { base_dir, data_dir } => {
            let config = SeedConfig { base_dir, data_dir };
            seed::load_all(&db, &config).await?;
            println!("Seed loading complete");
        }
        Commands::Drop => {
            db.drop_tables().await?;
            println!("Dropped all tables");
        }
        Commands::Status => {
            println!("city:        {}", db.cities().count().await?);
            println!("customer:    {}", db.customers().count().await?);
            println!("carrier:     {}", db.carriers().count().await?);
            println!("transaction: {}", db.transactions().count().await?);
            println!("trip:        {}", db.trips().count().await?);
        }
    }

    Ok(())
}
