//! `.env` file parsing
//!
//! Reads `KEY=VALUE` lines into an [`EnvMap`]. Values are never interpreted:
//! everything stays a string.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Key/value pairs read from an env file.
pub type EnvMap = HashMap<String, String>;

/// Read an env file from disk and parse it.
///
/// The file is read in full before parsing. I/O errors are returned as-is.
pub fn load_env_file(path: impl AsRef<Path>) -> io::Result<EnvMap> {
    let content = fs::read_to_string(path)?;
    Ok(parse_env(&content))
}

/// Parse env file content.
///
/// Blank lines, `#` comments and lines without `=` are skipped. Later keys
/// overwrite earlier ones.
pub fn parse_env(content: &str) -> EnvMap {
    let mut vars = EnvMap::new();

    for line in content.split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    vars
}

/// Strip one pair of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    if value.len() < 2 {
        return value;
    }

    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }

    value
}
