//! File-backed implementation of the value store.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Result, error::Error, ports::ValueStore};

/// Stores one value table blob in a single file.
///
/// # Examples
///
/// ```no_run
/// use tictactoe_td::adapters::FileStore;
/// use tictactoe_td::ports::ValueStore;
///
/// let store = FileStore::new("policy_p1");
/// store.save(&[1, 2, 3])?;
/// let blob = store.load()?;
/// # Ok::<(), tictactoe_td::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ValueStore for FileStore {
    fn save(&self, blob: &[u8]) -> Result<()> {
        let path = &self.path;
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(blob)
            .and_then(|_| writer.flush())
            .map_err(|source| Error::Io {
                operation: format!("write value table to {path:?}"),
                source,
            })?;

        debug!(path = %path.display(), bytes = blob.len(), "saved value table");
        Ok(())
    }

    fn load(&self) -> Result<Vec<u8>> {
        let path = &self.path;
        match fs::read(path) {
            Ok(blob) => {
                debug!(path = %path.display(), bytes = blob.len(), "loaded value table");
                Ok(blob)
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(Error::MissingValueTable {
                    location: path.display().to_string(),
                })
            }
            Err(source) => Err(Error::Io {
                operation: format!("read file {path:?}"),
                source,
            }),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_file_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path().join("policy_p1"));

        store.save(b"value table").expect("Failed to save");
        assert_eq!(store.load().expect("Failed to load"), b"value table");
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path().join("policy"));

        store.save(b"first, longer blob").unwrap();
        store.save(b"second").unwrap();
        assert_eq!(store.load().unwrap(), b"second");
    }

    #[test]
    fn test_load_nonexistent_returns_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = FileStore::new(temp_dir.path().join("nope"));

        let err = store.load().unwrap_err();
        assert!(matches!(err, Error::MissingValueTable { .. }));
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let store = FileStore::new("/invalid_dir_12345/policy");
        assert!(matches!(store.save(b"x"), Err(Error::Io { .. })));
    }
}
