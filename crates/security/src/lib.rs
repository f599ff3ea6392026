//! Access control and configuration for InsureChain ledgers.
//!
//! This crate provides the [`AccessMode`] and [`OpenOptions`] types used to
//! control how a ledger is opened and what transactions are permitted.

#![warn(missing_docs)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controls whether the ledger accepts submit transactions or only evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: write transactions return an error.
    ReadOnly,
}

impl AccessMode {
    /// Name as written in `insurechain.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::ReadWrite => "read-write",
            AccessMode::ReadOnly => "read-only",
        }
    }

    /// Check if write transactions are allowed.
    pub fn allows_writes(&self) -> bool {
        matches!(self, AccessMode::ReadWrite)
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read-write" | "readwrite" | "rw" => Ok(AccessMode::ReadWrite),
            "read-only" | "readonly" | "ro" => Ok(AccessMode::ReadOnly),
            other => Err(format!(
                "unknown access mode '{}' (expected read-write or read-only)",
                other
            )),
        }
    }
}

/// Options for opening a ledger.
///
/// Use the builder pattern to configure options. Any field set to `Some`
/// overrides the corresponding value in `insurechain.toml`.
///
/// ```ignore
/// use insurechain_security::{OpenOptions, AccessMode};
///
/// let opts = OpenOptions::new()
///     .access_mode(AccessMode::ReadOnly)
///     .init_ledger(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// The access mode for the ledger.
    pub access_mode: AccessMode,
    /// Seed the ledger when the opened world state is empty.
    /// `None` means "do not seed".
    pub init_ledger: Option<bool>,
}

impl OpenOptions {
    /// Create a new `OpenOptions` with default settings (read-write mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode for the ledger.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Seed an empty ledger on open.
    pub fn init_ledger(mut self, enabled: bool) -> Self {
        self.init_ledger = Some(enabled);
        self
    }

    /// Whether an empty ledger should be seeded on open.
    pub fn seeds_empty_ledger(&self) -> bool {
        self.init_ledger.unwrap_or(false)
    }
}
