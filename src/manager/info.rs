//! Registry of sketch metadata, persisted whole under a reserved key.

use std::collections::BTreeMap;

use crate::datamodel::Info;
use crate::error::{Result, SkizzeError};
use crate::storage::FileBackend;

/// Reserved storage key holding the serialized info registry.
pub const INFO_KEY: &str = "__info__";

/// In-memory mapping from sketch identity to its metadata.
#[derive(Debug, Default)]
pub struct InfoRegistry {
    infos: BTreeMap<String, Info>,
}

impl InfoRegistry {
    pub fn create(&mut self, info: Info) -> Result<()> {
        let id = info.id();
        if self.infos.contains_key(&id) {
            return Err(SkizzeError::AlreadyExists(format!("sketch {}", id)));
        }
        self.infos.insert(id, info);
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<Info> {
        self.infos
            .remove(id)
            .ok_or_else(|| SkizzeError::NotFound(format!("sketch {}", id)))
    }

    pub fn get(&self, id: &str) -> Option<&Info> {
        self.infos.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Info> {
        self.infos.values()
    }

    pub fn len(&self) -> usize {
        self.infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Serialize the whole mapping to storage.
    pub fn save(&self, storage: &FileBackend) -> Result<()> {
        let blob = bincode::serialize(&self.infos).map_err(|e| {
            SkizzeError::Storage(std::io::Error::new(std::io::ErrorKind::Other, e))
        })?;
        storage.put(INFO_KEY, &blob)
    }

    /// Replace the mapping from storage, if a registry blob exists.
    pub fn load(&mut self, storage: &FileBackend) -> Result<()> {
        if let Some(blob) = storage.get(INFO_KEY)? {
            self.infos = bincode::deserialize(&blob)
                .map_err(|e| SkizzeError::corrupt(INFO_KEY, e.to_string()))?;
        }
        Ok(())
    }
}
