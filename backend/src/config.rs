//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded first by the
//! binary) and may be overridden by CLI flags.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `WELLMAP_PORT` | `3000` |
//! | `WELLMAP_DELIMITER` | `;` |
//! | `WELLMAP_STATIC_DIR` | unset (API only) |
//! | `WELLMAP_DEFAULT_FILE` | unset |

use std::path::PathBuf;

use crate::parser::DEFAULT_DELIMITER;

pub const DEFAULT_PORT: u16 = 3000;

pub const ENV_PORT: &str = "WELLMAP_PORT";
pub const ENV_DELIMITER: &str = "WELLMAP_DELIMITER";
pub const ENV_STATIC_DIR: &str = "WELLMAP_STATIC_DIR";
pub const ENV_DEFAULT_FILE: &str = "WELLMAP_DEFAULT_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Table delimiter.
    pub delimiter: char,
    /// Built frontend to serve at `/`.
    pub static_dir: Option<PathBuf>,
    /// Prefill for the dashboard's file path box.
    pub default_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            delimiter: DEFAULT_DELIMITER,
            static_dir: None,
            default_file: None,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            port: non_empty(ENV_PORT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            delimiter: non_empty(ENV_DELIMITER)
                .and_then(|v| parse_delimiter(&v))
                .unwrap_or(defaults.delimiter),
            static_dir: non_empty(ENV_STATIC_DIR).map(PathBuf::from),
            default_file: non_empty(ENV_DEFAULT_FILE),
        }
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn with_delimiter(mut self, delimiter: Option<char>) -> Self {
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter;
        }
        self
    }

    pub fn with_static_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.static_dir = dir;
        }
        self
    }
}

/// Single character, or the names `tab` / `\t`.
pub fn parse_delimiter(value: &str) -> Option<char> {
    match value {
        "tab" | "\\t" | "\t" => Some('\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    }
}
