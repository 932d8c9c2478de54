//! File-backed blob store.
//!
//! One file per key under the data directory; the canonical sketch
//! identity doubles as the file name. Writes go to a temp file that is
//! fsynced and renamed into place, so a reader never observes a partial
//! value for a key.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

const TMP_SUFFIX: &str = ".tmp";

/// Key-addressable byte store over a directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open the backend, creating the directory if missing.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Write a value atomically: temp file, fsync, rename.
    pub fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{}{}", key, TMP_SUFFIX));

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// List all stored keys, temp files excluded.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.ends_with(TMP_SUFFIX) {
                    keys.push(name.to_string());
                }
            }
        }
        Ok(keys)
    }

    /// Release the backend. Writes are already durable per `put`, so this
    /// only syncs the directory entry metadata where the platform allows.
    pub fn close(&self) -> Result<()> {
        if let Ok(dir) = File::open(&self.dir) {
            let _ = dir.sync_all();
        }
        Ok(())
    }
}
