//! CLI configuration via `insurechain.toml`
//!
//! The file is optional. When present in the working directory (or named
//! with `--config`) its values become the defaults that command-line flags
//! override.

use std::path::{Path, PathBuf};

use insurechain_executor::AccessMode;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "insurechain.toml";

/// CLI configuration loaded from `insurechain.toml`.
///
/// # Example
///
/// ```toml
/// state = ".insurechain/state.json"
/// access_mode = "read-write"
/// init_ledger = false
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file holding the world state.
    #[serde(default = "default_state")]
    pub state: PathBuf,
    /// `"read-write"` or `"read-only"`.
    #[serde(default)]
    pub access_mode: AccessMode,
    /// Seed an empty ledger when it is opened.
    #[serde(default)]
    pub init_ledger: bool,
    /// Log filter used when neither `INSURECHAIN_LOG` nor `-v` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_state() -> PathBuf {
    PathBuf::from(".insurechain/state.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state: default_state(),
            access_mode: AccessMode::default(),
            init_ledger: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# InsureChain CLI configuration
#
# Snapshot file holding the world state. Created on the first write.
state = ".insurechain/state.json"

# "read-write" (default) or "read-only".
# In read-only mode every Create/Update/Delete/Transfer/InitLedger is refused.
access_mode = "read-write"

# Seed six records of every kind when the ledger is empty (default: false)
init_ledger = false

# Log filter when neither INSURECHAIN_LOG nor -v is given.
# Accepts a level ("warn", "info", ...) or directives ("insurechain_contract=debug").
log_level = "warn"
"#
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }

    /// Load the config for this run.
    ///
    /// An explicit path must exist. Otherwise `insurechain.toml` in the
    /// working directory is used when present, else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, String> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| {
            format!(
                "Failed to write default config file '{}': {}",
                path.display(),
                e
            )
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_toml_parses_to_default() {
        let cfg: Config = toml::from_str(Config::default_toml()).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("access_mode = \"read-only\"").unwrap();
        assert_eq!(cfg.access_mode, AccessMode::ReadOnly);
        assert_eq!(cfg.state, PathBuf::from(".insurechain/state.json"));
        assert_eq!(cfg.log_level, "warn");
        assert!(!cfg.init_ledger);
    }

    #[test]
    fn test_invalid_access_mode_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "access_mode = \"sometimes\"").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_write_default_if_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert!(Config::write_default_if_missing(&path).unwrap());
        assert!(!Config::write_default_if_missing(&path).unwrap());
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
