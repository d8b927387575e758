//! Lookup helpers over a parsed env file
//!
//! Provides ergonomic helpers for reading settings out of an [`EnvMap`] with
//! defaults.

use crate::env_file::EnvMap;

/// Extension trait for reading settings from an [`EnvMap`].
pub trait EnvMapExt {
    /// Get a value, or `default` if the key is absent.
    ///
    /// # Example
    /// ```ignore
    /// let method = vars.get_or("LOCAL_AUTH_METHOD", "trust");
    /// ```
    fn get_or(&self, key: &str, default: &str) -> String;

    /// Get a value, or an empty string if the key is absent.
    fn get_or_empty(&self, key: &str) -> String {
        self.get_or(key, "")
    }

    /// Insert `value` only if `key` is absent.
    ///
    /// A key that is present with an empty value is left alone.
    fn set_default(&mut self, key: &str, value: &str);
}

impl EnvMapExt for EnvMap {
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set_default(&mut self, key: &str, value: &str) {
        self.entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or() {
        let mut vars = EnvMap::new();
        vars.insert("PRESENT".to_string(), "yes".to_string());

        assert_eq!(vars.get_or("PRESENT", "no"), "yes");
        assert_eq!(vars.get_or("ABSENT", "no"), "no");
        assert_eq!(vars.get_or_empty("ABSENT"), "");
    }

    #[test]
    fn test_set_default_only_when_absent() {
        let mut vars = EnvMap::new();
        vars.insert("SET".to_string(), "md5".to_string());
        vars.insert("EMPTY".to_string(), String::new());

        vars.set_default("SET", "trust");
        vars.set_default("EMPTY", "trust");
        vars.set_default("MISSING", "trust");

        assert_eq!(vars["SET"], "md5");
        assert_eq!(vars["EMPTY"], "");
        assert_eq!(vars["MISSING"], "trust");
    }
}
