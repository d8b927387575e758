//! Output layout for the generated cluster configuration
//!
//! All paths are relative to the directory the generator runs in.

use std::path::{Path, PathBuf};

/// Env file read on every run
pub const ENV_FILE: &str = ".env";

/// Primary config directory
pub const MASTER_CONFIG_DIR: &str = "master/config";

/// Host the replicas stream from
pub const PRIMARY_HOST: &str = "postgres-master";

/// Port the replicas stream from
pub const PRIMARY_PORT: u16 = 5432;

/// A streaming replica and its slot on the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replica {
    /// Directory name, e.g. `slave-1`
    pub dir: &'static str,
    pub application_name: &'static str,
    pub slot_name: &'static str,
}

impl Replica {
    /// Config directory of this replica
    pub fn config_dir(&self) -> String {
        format!("{}/config", self.dir)
    }
}

pub const REPLICAS: [Replica; 2] = [
    Replica {
        dir: "slave-1",
        application_name: "slave1",
        slot_name: "replica_slot_slave1",
    },
    Replica {
        dir: "slave-2",
        application_name: "slave2",
        slot_name: "replica_slot_slave2",
    },
];

/// Every directory the generator writes into, primary first
pub fn config_dirs(root: &Path) -> Vec<PathBuf> {
    std::iter::once(root.join(MASTER_CONFIG_DIR))
        .chain(REPLICAS.iter().map(|r| root.join(r.config_dir())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dirs() {
        let dirs = config_dirs(Path::new("/out"));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/out/master/config"),
                PathBuf::from("/out/slave-1/config"),
                PathBuf::from("/out/slave-2/config"),
            ]
        );
    }
}
