//! Configuration file templates for the primary and its replicas

use crate::config::Settings;
use crate::paths::{Replica, PRIMARY_HOST, PRIMARY_PORT, REPLICAS};

/// Generate one slot creation statement per replica
fn generate_slot_statements() -> String {
    REPLICAS
        .iter()
        .map(|replica| {
            format!(
                "SELECT pg_create_physical_replication_slot('{}', true);",
                replica.slot_name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate init.sql for the primary
pub fn render_init_sql(settings: &Settings) -> String {
    format!(
        r#"-- Enable pgvector extension
CREATE EXTENSION IF NOT EXISTS vector;

-- Add timescale extension
CREATE EXTENSION IF NOT EXISTS timescaledb;

-- Add vectorscale extension
CREATE EXTENSION IF NOT EXISTS vectorscale CASCADE;

-- Create a replication user
CREATE USER {repl_user} WITH REPLICATION PASSWORD '{repl_pass}' LOGIN;

-- Grant pg_monitor to the replication user
GRANT pg_monitor TO {repl_user};

-- Create replication slots for slaves
{slots}

-- SELECT * FROM pg_stat_replication;
-- ALTER SYSTEM SET synchronous_standby_names TO  '*';  
"#,
        repl_user = settings.replication_user,
        repl_pass = settings.replication_password,
        slots = generate_slot_statements(),
    )
}

/// Generate pg_hba.conf for the primary
///
/// The replication user always authenticates with md5. Local and replication
/// rules use `local_auth_method`, the catch-all rule uses `pg_hba_auth_method`.
pub fn render_pg_hba(settings: &Settings) -> String {
    format!(
        r#"# TYPE  DATABASE        USER            ADDRESS                 METHOD

host     replication     {repl_user}         0.0.0.0/0        md5

# "local" is for Unix domain socket connections only
local   all             all                                     {local}
# IPv4 local connections:
host    all             all             0.0.0.0/0            {local}
# IPv6 local connections:
host    all             all             ::1/128                 {local}
# Allow replication connections from localhost, by a user with the
# replication privilege.
local   replication     all                                     {local}
host    replication     all             0.0.0.0/0          {local}
host    replication     all             ::1/128                 {local}

# Allow replication user to connect to all databases
host    all             {repl_user}         0.0.0.0/0        md5

# Allow all other connections
host all all all {catch_all}
"#,
        repl_user = settings.replication_user,
        local = settings.local_auth_method,
        catch_all = settings.pg_hba_auth_method,
    )
}

/// Generate postgresql.auto.conf for a replica
pub fn render_auto_conf(settings: &Settings, replica: &Replica) -> String {
    format!(
        r#"primary_conninfo = 'host={host} port={port} user={repl_user} password={repl_pass} application_name={app}'
primary_slot_name = '{slot}'
"#,
        host = PRIMARY_HOST,
        port = PRIMARY_PORT,
        repl_user = settings.replication_user,
        repl_pass = settings.replication_password,
        app = replica.application_name,
        slot = replica.slot_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            replication_user: "repl".to_string(),
            replication_password: "secret".to_string(),
            pg_hba_auth_method: "scram-sha-256".to_string(),
            local_auth_method: "trust".to_string(),
        }
    }

    #[test]
    fn test_init_sql_creates_user_and_slots() {
        let sql = render_init_sql(&settings());

        assert!(sql.contains("CREATE EXTENSION IF NOT EXISTS vector;\n"));
        assert!(sql.contains("CREATE EXTENSION IF NOT EXISTS timescaledb;\n"));
        assert!(sql.contains("CREATE EXTENSION IF NOT EXISTS vectorscale CASCADE;\n"));
        assert!(sql.contains("CREATE USER repl WITH REPLICATION PASSWORD 'secret' LOGIN;"));
        assert!(sql.contains("GRANT pg_monitor TO repl;"));
        assert!(sql.contains(
            "SELECT pg_create_physical_replication_slot('replica_slot_slave1', true);\n\
             SELECT pg_create_physical_replication_slot('replica_slot_slave2', true);\n"
        ));
        assert!(sql.ends_with("-- ALTER SYSTEM SET synchronous_standby_names TO  '*';  \n"));
    }

    #[test]
    fn test_pg_hba_methods() {
        let mut settings = settings();
        settings.local_auth_method = "peer".to_string();
        settings.pg_hba_auth_method = "md5".to_string();

        let hba = render_pg_hba(&settings);

        assert!(hba.starts_with("# TYPE  DATABASE        USER            ADDRESS                 METHOD\n"));
        assert!(hba.contains("host     replication     repl         0.0.0.0/0        md5\n"));
        assert!(hba.contains("host    all             repl         0.0.0.0/0        md5\n"));
        assert!(hba.contains("local   all             all                                     peer\n"));
        assert!(hba.contains("host    replication     all             ::1/128                 peer\n"));
        assert_eq!(hba.matches("peer").count(), 6);
        assert!(hba.ends_with("host all all all md5\n"));
    }

    #[test]
    fn test_auto_conf_per_replica() {
        let first = render_auto_conf(&settings(), &REPLICAS[0]);
        assert_eq!(
            first,
            "primary_conninfo = 'host=postgres-master port=5432 user=repl password=secret application_name=slave1'\n\
             primary_slot_name = 'replica_slot_slave1'\n"
        );

        let second = render_auto_conf(&settings(), &REPLICAS[1]);
        assert!(second.contains("application_name=slave2'"));
        assert!(second.contains("primary_slot_name = 'replica_slot_slave2'"));
    }

    #[test]
    fn test_missing_user_renders_empty() {
        let settings = Settings {
            replication_user: String::new(),
            replication_password: String::new(),
            pg_hba_auth_method: "scram-sha-256".to_string(),
            local_auth_method: "trust".to_string(),
        };

        let sql = render_init_sql(&settings);
        assert!(sql.contains("CREATE USER  WITH REPLICATION PASSWORD '' LOGIN;"));
    }
}
