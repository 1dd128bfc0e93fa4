//! Runtime settings read from the environment (`.env` is loaded by `main`).

use crate::table::DEFAULT_REVIEW_COLUMN;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_BATCH_ROWS: usize = 50_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    /// Column holding review text in uploaded tables.
    pub review_column: String,
    pub static_dir: String,
    pub max_batch_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            review_column: DEFAULT_REVIEW_COLUMN.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            max_batch_rows: DEFAULT_MAX_BATCH_ROWS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Blank values and unparseable numbers use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();

        Settings {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            review_column: get("REVIEW_COLUMN").unwrap_or(defaults.review_column),
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
            max_batch_rows: get("MAX_BATCH_ROWS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_batch_rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.review_column, "review");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("REVIEW_COLUMN", "comment"),
            ("MAX_BATCH_ROWS", "10"),
            ("STATIC_DIR", "  "),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.review_column, "comment");
        assert_eq!(settings.max_batch_rows, 10);
        assert_eq!(settings.static_dir, DEFAULT_STATIC_DIR);
    }

    #[test]
    fn test_bad_number_falls_back() {
        let settings = Settings::from_lookup(|k| (k == "MAX_BATCH_ROWS").then(|| "lots".to_string()));
        assert_eq!(settings.max_batch_rows, DEFAULT_MAX_BATCH_ROWS);
    }
}
