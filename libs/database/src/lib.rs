//! Database connectivity for the catalog services.
//!
//! # Features
//!
//! - `postgres` (default): connection pool, migrations and health checks on SeaORM
//! - `config`: load [`postgres::PostgresConfig`] through `core_config::FromEnv`
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
