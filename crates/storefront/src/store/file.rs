//! File-backed store: one JSON blob per key under a data directory.
//!
//! The durable equivalent of browser local storage, scoped to one profile
//! directory. Each key maps to `<dir>/<key>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StateStore, StoreError};

/// Store that keeps each key in its own file under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a file store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), blob)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        assert!(store.read("cart").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.write("cart", "[1,2,3]").unwrap();
        assert_eq!(store.read("cart").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.write("theme", "\"light\"").unwrap();
        store.write("theme", "\"dark\"").unwrap();
        assert_eq!(store.read("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.write("user", "{}").unwrap();
        store.remove("user").unwrap();
        store.remove("user").unwrap();
        assert!(store.read("user").unwrap().is_none());
    }

    #[test]
    fn test_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileStore::open(tmp.path()).unwrap();
            store.write("wishlist", "[\"p-1\"]").unwrap();
        }
        let reopened = FileStore::open(tmp.path()).unwrap();
        assert_eq!(
            reopened.read("wishlist").unwrap().as_deref(),
            Some("[\"p-1\"]")
        );
    }
}
