use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

const BLOB_EXTENSION: &str = "json";

/// Directory-backed store: one `<key>.json` file per key.
///
/// The directory plays the role of a browser origin; two stores opened on
/// different directories never see each other's data.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).map_err(|e| StoreError::dir_creation(root.clone(), e))?;

        info!("Opened file store at {}", root.display());
        Ok(Self { root })
    }

    /// Opens the store for `origin` beneath `base`.
    pub fn open_origin(base: &Path, origin: &str) -> StoreErrorResult<Self> {
        Self::validate_key(origin)?;
        Self::open(base.join(origin))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> StoreErrorResult<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.root.join(format!("{key}.{BLOB_EXTENSION}")))
    }

    #[track_caller]
    fn validate_key(key: &str) -> StoreErrorResult<()> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if valid {
            Ok(())
        } else {
            Err(StoreError::invalid_key(key))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>> {
        let path = self.blob_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::file_read(path, e))
    }

    /// Writes through a temp file, fsync, then rename, so a crash mid-write
    /// leaves the previous blob intact. Each call gets its own temp file, so
    /// concurrent writers to one key never share one.
    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        let final_path = self.blob_path(key)?;

        let mut temp = NamedTempFile::new_in(&self.root)
            .map_err(|e| StoreError::file_write(self.root.clone(), e))?;

        temp.write_all(value.as_bytes())
            .map_err(|e| StoreError::file_write(temp.path().to_path_buf(), e))?;

        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::file_write(temp.path().to_path_buf(), e))?;

        // A failed persist hands the temp file back; dropping it deletes it.
        temp.persist(&final_path).map_err(|e| {
            StoreError::atomic_rename(e.file.path().to_path_buf(), final_path.clone(), e.error)
        })?;

        debug!("Wrote {} bytes to {}", value.len(), final_path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreErrorResult<()> {
        let path = self.blob_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path, e)),
        }
    }
}
