//! PostgreSQL primary/replica configuration generator
//!
//! Reads replication credentials from a `.env` file and renders:
//! - `master/config/init.sql`
//! - `master/config/pg_hba.conf`
//! - `slave-1/config/postgresql.auto.conf`
//! - `slave-2/config/postgresql.auto.conf`

pub mod config;
pub mod error;
pub mod generate;
pub mod paths;
pub mod template;

pub use config::{apply_defaults, Settings};
pub use error::GenerateError;
pub use generate::generate;
pub use paths::{Replica, REPLICAS};
