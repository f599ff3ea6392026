//! Snapshot file: the on-disk form of a MemoryState
//!
//! A single JSON document, values base64-encoded since they are opaque bytes:
//!
//! ```text
//! {"format":1,"entries":{"<key>":"<base64 value>",...}}
//! ```
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so a crash mid-write leaves either the old or the new snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use insurechain_core::{Error, Result, StateMap};

/// Snapshot format written by this version
pub const SNAPSHOT_FORMAT: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    format: u32,
    entries: BTreeMap<String, String>,
}

/// Read a snapshot file
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load(path: &Path) -> Result<Option<StateMap>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let file: SnapshotFile = serde_json::from_slice(&bytes).map_err(|e| {
        Error::Corruption(format!("snapshot {} is not valid: {}", path.display(), e))
    })?;

    if file.format != SNAPSHOT_FORMAT {
        return Err(Error::Corruption(format!(
            "snapshot {} has unsupported format {} (expected {})",
            path.display(),
            file.format,
            SNAPSHOT_FORMAT
        )));
    }

    let mut data = StateMap::new();
    for (key, encoded) in file.entries {
        let value = STANDARD.decode(encoded.as_bytes()).map_err(|e| {
            Error::Corruption(format!("snapshot value for '{}' is not base64: {}", key, e))
        })?;
        data.insert(key, value);
    }
    Ok(Some(data))
}

/// Write a snapshot file atomically
///
/// Parent directories are created as needed.
pub fn store(path: &Path, data: &StateMap) -> Result<()> {
    let file = SnapshotFile {
        format: SNAPSHOT_FORMAT,
        entries: data
            .iter()
            .map(|(k, v)| (k.clone(), STANDARD.encode(v)))
            .collect(),
    };
    let bytes = serde_json::to_vec(&file)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    {
        let mut out = fs::File::create(&tmp)?;
        out.write_all(&bytes)?;
        out.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("none.json")).unwrap().is_none());
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let mut data = StateMap::new();
        data.insert("k".to_string(), b"v".to_vec());

        store(&path, &data).unwrap();
        assert_eq!(load(&path).unwrap(), Some(data));
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut data = StateMap::new();
        data.insert("k".to_string(), b"hi".to_vec());
        store(&path, &data).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"format":1,"entries":{"k":"aGk="}}"#);
    }

    #[test]
    fn test_unknown_format_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"format":9,"entries":{}}"#).unwrap();
        assert!(matches!(load(&path), Err(Error::Corruption(_))));
    }

    #[test]
    fn test_garbage_is_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(load(&path), Err(Error::Corruption(_))));

        fs::write(&path, r#"{"format":1,"entries":{"k":"!!"}}"#).unwrap();
        assert!(matches!(load(&path), Err(Error::Corruption(_))));
    }
}
