//! Static registry of seed sources.
//!
//! This table is the single place that maps entity names to source files.
//! Its order is the load order, and the load order is the dependency order:
//! a file may only reference rows from files above it.

use super::error::{SeedError, SeedResult};

/// One seedable entity: its name, source file, and accepted columns.
///
/// `columns` is the full attribute set; a source file's header must be a
/// subset of it. `id` is always optional — omitted ids are assigned by the
/// database in file order.
#[derive(Debug)]
pub struct SeedSource {
    pub entity: &'static str,
    pub file: &'static str,
    pub columns: &'static [&'static str],
}

/// Seed sources in load order.
pub const SEED_SOURCES: [SeedSource; 5] = [
    SeedSource {
        entity: "City",
        file: "City.csv",
        columns: &["id", "name", "population", "users"],
    },
    SeedSource {
        entity: "Customer",
        file: "Customer.csv",
        columns: &["id", "name", "gender", "age"],
    },
    SeedSource {
        entity: "Carrier",
        file: "Carrier.csv",
        columns: &["id", "name", "contact"],
    },
    SeedSource {
        entity: "Transaction",
        file: "Transaction.csv",
        columns: &["id", "customer_id", "payment_method", "amount_cents"],
    },
    SeedSource {
        entity: "Trip",
        file: "Trip.csv",
        columns: &[
            "id",
            "transaction_id",
            "carrier_id",
            "city_id",
            "distance_km",
            "duration_min",
        ],
    },
];

/// Look up a seed source by exact entity name.
pub fn source_for(entity: &str) -> SeedResult<&'static SeedSource> {
    SEED_SOURCES
        .iter()
        .find(|source| source.entity == entity)
        .ok_or_else(|| SeedError::UnknownEntity {
            name: entity.to_string(),
        })
}
