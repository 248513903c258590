//! CSV parsing and the bulk ingestion orchestrator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::error::{SeedError, SeedResult};
use super::sources::{SEED_SOURCES, SeedSource, source_for};
use crate::db::{
    Carrier, CarrierRepository, City, CityRepository, Customer, CustomerRepository, Database,
    Transaction, TransactionRepository, Trip, TripRepository,
};

/// Where seed files live: `<base_dir>/<data_dir>/<EntityName>.csv`.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub base_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl SeedConfig {
    /// Full path of one source file.
    pub fn source_path(&self, file: &str) -> PathBuf {
        self.base_dir.join(&self.data_dir).join(file)
    }
}

/// Read every row of a CSV source into typed records.
///
/// The header row is validated against the registry's column list before any
/// record is parsed, so a stray column rejects the whole file up front and
/// nothing reaches the database.
fn read_rows<T: DeserializeOwned>(path: &Path, source: &SeedSource) -> SeedResult<Vec<T>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SeedError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => SeedError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| SeedError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    for column in headers.iter() {
        if !source.columns.contains(&column) {
            return Err(SeedError::Header {
                path: path.to_path_buf(),
                column: column.to_string(),
                expected: source.columns,
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| SeedError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?);
    }

    Ok(rows)
}

/// Load one registered source into its table via the matching repository.
///
/// The whole file goes to `create_many` in one call; the count logged is the
/// count actually inserted.
async fn load_source<D: Database>(
    db: &D,
    config: &SeedConfig,
    source: &SeedSource,
) -> SeedResult<usize> {
    let path = config.source_path(source.file);

    let count = match source.entity {
        "City" => {
            let rows: Vec<City> = read_rows(&path, source)?;
            db.cities().create_many(&rows).await?.len()
        }
        "Customer" => {
            let rows: Vec<Customer> = read_rows(&path, source)?;
            db.customers().create_many(&rows).await?.len()
        }
        "Carrier" => {
            let rows: Vec<Carrier> = read_rows(&path, source)?;
            db.carriers().create_many(&rows).await?.len()
        }
        "Transaction" => {
            let rows: Vec<Transaction> = read_rows(&path, source)?;
            db.transactions().create_many(&rows).await?.len()
        }
        "Trip" => {
            let rows: Vec<Trip> = read_rows(&path, source)?;
            db.trips().create_many(&rows).await?.len()
        }
        other => {
            return Err(SeedError::UnknownEntity {
                name: other.to_string(),
            });
        }
    };

    info!("Inserted {} rows for entity `{}`", count, source.entity);
    Ok(count)
}

/// Load one entity's source file by entity name.
pub async fn load_entity<D: Database>(
    db: &D,
    config: &SeedConfig,
    entity: &str,
) -> SeedResult<usize> {
    load_source(db, config, source_for(entity)?).await
}

/// Populate all database tables.
///
/// Ensures the schema exists first (creation is guarded by `tables_exist`,
/// since the DDL is not idempotent), then walks the registry in dependency
/// order. A failure at any stage aborts the remaining iteration and
/// propagates; entities already loaded stay committed.
pub async fn load_all<D: Database>(db: &D, config: &SeedConfig) -> SeedResult<()> {
    if !db.tables_exist().await? {
        db.create_tables().await?;
    }

    for source in &SEED_SOURCES {
        load_source(db, config, source).await?;
    }

    Ok(())
}
