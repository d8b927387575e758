//! Errors that abort a generator run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Error loading {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {name} ({}): {source}", path.display())]
    FileWrite {
        /// Short label for the artifact, e.g. `slave-1 postgresql.auto.conf`
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
