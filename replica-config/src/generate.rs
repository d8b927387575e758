//! Render every artifact and write it to disk
//!
//! Runs strictly in order: load `.env`, create directories, write files.
//! The first failure aborts the run; files already written are left in place.

use crate::config::{apply_defaults, Settings};
use crate::error::GenerateError;
use crate::paths::{config_dirs, ENV_FILE, MASTER_CONFIG_DIR, REPLICAS};
use crate::template::{render_auto_conf, render_init_sql, render_pg_hba};
use common::load_env_file;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// A rendered file waiting to be written
struct Artifact {
    name: String,
    path: PathBuf,
    content: String,
}

/// Render all four artifacts for the given settings
fn render_artifacts(root: &Path, settings: &Settings) -> Vec<Artifact> {
    let master = root.join(MASTER_CONFIG_DIR);

    let mut artifacts = vec![
        Artifact {
            name: "init.sql".to_string(),
            path: master.join("init.sql"),
            content: render_init_sql(settings),
        },
        Artifact {
            name: "pg_hba.conf".to_string(),
            path: master.join("pg_hba.conf"),
            content: render_pg_hba(settings),
        },
    ];

    artifacts.extend(REPLICAS.iter().map(|replica| Artifact {
        name: format!("{} postgresql.auto.conf", replica.dir),
        path: root.join(replica.config_dir()).join("postgresql.auto.conf"),
        content: render_auto_conf(settings, replica),
    }));

    artifacts
}

fn create_dir(path: &Path) -> Result<(), GenerateError> {
    DirBuilder::new()
        .recursive(true)
        .mode(DIR_MODE)
        .create(path)
        .map_err(|source| GenerateError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })
}

fn write_artifact(artifact: &Artifact) -> Result<(), GenerateError> {
    let write = || -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(FILE_MODE)
            .open(&artifact.path)?;
        file.write_all(artifact.content.as_bytes())
    };

    write().map_err(|source| GenerateError::FileWrite {
        name: artifact.name.clone(),
        path: artifact.path.clone(),
        source,
    })
}

/// Generate the cluster configuration under `root`.
///
/// Reads `root/.env` and returns the paths written, in write order. Nothing
/// is created when the env file cannot be read.
pub fn generate(root: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let env_path = root.join(ENV_FILE);
    let mut vars = load_env_file(&env_path).map_err(|source| GenerateError::FileAccess {
        path: env_path.clone(),
        source,
    })?;
    debug!(path = %env_path.display(), keys = vars.len(), "Loaded env file");

    apply_defaults(&mut vars);
    let settings = Settings::from_env(&vars);

    if settings.replication_user.is_empty() {
        warn!("REPLICATION_USER is not set, rendering an empty user");
    }

    for dir in config_dirs(root) {
        create_dir(&dir)?;
    }

    let artifacts = render_artifacts(root, &settings);
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in &artifacts {
        write_artifact(artifact)?;
        info!(file = %artifact.name, path = %artifact.path.display(), "Wrote config");
        written.push(artifact.path.clone());
    }

    Ok(written)
}
