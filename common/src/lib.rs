//! Shared utilities for the replica configuration tools
//!
//! This crate provides:
//! - `.env` file parsing
//! - Lookup helpers with defaults
//! - Structured logging initialization

pub mod config;
pub mod env_file;
pub mod logging;

pub use config::EnvMapExt;
pub use env_file::{load_env_file, parse_env, EnvMap};
pub use logging::init_logging;
