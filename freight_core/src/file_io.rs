//! # File I/O Module
//!
//! File-backed key-value store and the atomic write helper shared with the
//! report sinks:
//! - **Atomic writes**: write to `.tmp`, fsync, rename over the target
//! - **Write locking**: an exclusive OS lock on `<key>.lock` while writing,
//!   so two shells sharing a data directory never interleave partial files
//!
//! ## Layout
//!
//! Each key is stored as `<data_dir>/<key>.json`. Keys are restricted to
//! ASCII letters, digits, `-` and `_` so they map to safe filenames.
//!
//! ## Example
//!
//! ```rust,no_run
//! use freight_core::file_io::FileStore;
//! use freight_core::persistence::DraftStore;
//!
//! let store = FileStore::open("/home/me/.local/share/freight-class-pro")?;
//! let drafts = DraftStore::new(store);
//! let inputs = drafts.load();
//! # Ok::<(), freight_core::errors::FreightError>(())
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::errors::{FreightError, FreightResult};
use crate::persistence::KeyValueStore;

/// Key-value store keeping one JSON file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> FreightResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            FreightError::file_error("create directory", dir.display().to_string(), e.to_string())
        })?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> FreightResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn lock_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> FreightResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FreightError::storage_error("read", key, e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> FreightResult<()> {
        let path = self.path_for(key)?;
        let lock_path = self.lock_path_for(key);

        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| FreightError::storage_error("lock", key, e.to_string()))?;

        // Non-blocking: a concurrent writer means this write is dropped
        lock_file
            .try_lock_exclusive()
            .map_err(|_| FreightError::storage_error("lock", key, "another process is writing"))?;

        let result = write_atomic(&path, value.as_bytes());

        // Released on drop as well; unlock explicitly so the lock file can be reused at once
        let _ = lock_file.unlock();

        result.map_err(|e| match e {
            FreightError::FileError { operation, reason, .. } => {
                FreightError::storage_error(operation, key, reason)
            }
            other => other,
        })
    }
}

fn validate_key(key: &str) -> FreightResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(FreightError::invalid_input(
            "key",
            key,
            "Keys may only contain ASCII letters, digits, '-' and '_'",
        ))
    }
}

/// Write `bytes` to `path` with atomic replace semantics.
///
/// The write process:
/// 1. Write to a sibling temporary file (`<name>.tmp`)
/// 2. Sync to disk (fsync)
/// 3. Rename over `path` (atomic on most filesystems)
pub fn write_atomic(path: &Path, bytes: &[u8]) -> FreightResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FreightError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        FreightError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FreightError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        FreightError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
