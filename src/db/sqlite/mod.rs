//! SQLite implementation of the database traits.
//!
//! This module provides a SQLite-backed implementation of the repository
//! traits defined in the parent module, plus the table lifecycle manager.

mod carrier;
mod city;
mod connection;
mod customer;
mod helpers;
mod schema;
mod transaction;
mod trip;

#[cfg(test)]
mod city_test;
#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod transaction_test;
#[cfg(test)]
mod trip_test;

pub use carrier::SqliteCarrierRepository;
pub use city::SqliteCityRepository;
pub use connection::SqliteDatabase;
pub use customer::SqliteCustomerRepository;
pub use transaction::SqliteTransactionRepository;
pub use trip::SqliteTripRepository;
