//! Cluster configuration generator
//!
//! Reads `.env` from the working directory and writes the primary's init.sql
//! and pg_hba.conf plus a postgresql.auto.conf for each replica. Every run
//! overwrites the previous output.
//!
//! The final status line goes straight to stdout so `RUST_LOG` cannot hide it.

use anyhow::Result;
use common::init_logging;
use replica_config::generate;
use std::path::Path;
use tracing::{error, info};

const SUCCESS_MESSAGE: &str = "PostgreSQL configuration files generated successfully!";

fn main() -> Result<()> {
    let _guard = init_logging("generate-configs");

    match generate(Path::new(".")) {
        Ok(written) => {
            info!(files = written.len(), "Generation finished");
            println!("{}", SUCCESS_MESSAGE);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Failed to generate configuration");
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
