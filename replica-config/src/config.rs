//! Generator settings read from the `.env` file

use common::{EnvMap, EnvMapExt};

pub const DEFAULT_PG_HBA_AUTH_METHOD: &str = "scram-sha-256";
pub const DEFAULT_LOCAL_AUTH_METHOD: &str = "trust";

/// Fill in the optional auth methods when the file does not set them.
pub fn apply_defaults(vars: &mut EnvMap) {
    vars.set_default("PG_HBA_AUTH_METHOD", DEFAULT_PG_HBA_AUTH_METHOD);
    vars.set_default("LOCAL_AUTH_METHOD", DEFAULT_LOCAL_AUTH_METHOD);
}

/// Settings used by the templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub replication_user: String,
    pub replication_password: String,
    /// Method for the final catch-all rule in pg_hba.conf
    pub pg_hba_auth_method: String,
    /// Method for local, loopback and replication rules in pg_hba.conf
    pub local_auth_method: String,
}

impl Settings {
    /// Build settings from a parsed env file.
    ///
    /// Missing keys become empty strings; call [`apply_defaults`] first to
    /// get the auth method defaults.
    pub fn from_env(vars: &EnvMap) -> Self {
        Self {
            replication_user: vars.get_or_empty("REPLICATION_USER"),
            replication_password: vars.get_or_empty("REPLICATION_PASSWORD"),
            pg_hba_auth_method: vars.get_or_empty("PG_HBA_AUTH_METHOD"),
            local_auth_method: vars.get_or_empty("LOCAL_AUTH_METHOD"),
        }
    }
}
