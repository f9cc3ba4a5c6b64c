//! Options for the load and dump glue.
//!
//! Both types implement `Serialize`/`Deserialize` with defaults for every
//! field, so a host application can embed them in its own configuration.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a newline-delimited word list is turned into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Strip the trailing `\n` or `\r\n` from every line.
    pub strip_line_endings: bool,
    /// Strip leading and trailing whitespace from every line.
    pub trim_whitespace: bool,
    /// Skip lines that are empty after stripping.
    pub skip_empty: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strip_line_endings: true,
            trim_whitespace: false,
            skip_empty: true,
        }
    }
}

impl LoadOptions {
    /// Options that add every line exactly as read, terminator included.
    pub fn verbatim() -> Self {
        Self {
            strip_line_endings: false,
            trim_whitespace: false,
            skip_empty: false,
        }
    }

    /// Turns one raw line into the entry to add, or `None` to skip it.
    pub fn prepare<'a>(&self, line: &'a str) -> Option<&'a str> {
        let mut entry = line;
        if self.strip_line_endings {
            entry = entry.strip_suffix('\n').unwrap_or(entry);
            entry = entry.strip_suffix('\r').unwrap_or(entry);
        }
        if self.trim_whitespace {
            entry = entry.trim();
        }
        if self.skip_empty && entry.is_empty() {
            return None;
        }
        Some(entry)
    }
}

/// Encoding of a trie snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DumpFormat {
    /// Magic header, version byte, then postcard.
    #[default]
    Binary,
    /// Plain JSON.
    Json,
}

impl fmt::Display for DumpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpFormat::Binary => f.write_str("binary"),
            DumpFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for DumpFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(DumpFormat::Binary),
            "json" => Ok(DumpFormat::Json),
            other => Err(format!("unknown dump format '{other}' (expected binary or json)")),
        }
    }
}
