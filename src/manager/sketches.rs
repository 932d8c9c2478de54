//! Registry of live sketch instances.
//!
//! Each instance lives in a cell pairing the sketch with a lock flag.
//! The flag is flipped for every instance while a checkpoint runs so
//! inserts cannot race the serializer; lookups and inserts themselves
//! only need shared access to the registry map.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::datamodel::{Info, QueryResult};
use crate::error::{Result, SkizzeError};
use crate::sketch::SketchInstance;
use crate::storage::FileBackend;

/// One live sketch plus its checkpoint lock flag.
#[derive(Debug)]
pub struct SketchCell {
    locked: AtomicBool,
    sketch: Mutex<SketchInstance>,
}

impl SketchCell {
    fn new(sketch: SketchInstance) -> Self {
        Self {
            locked: AtomicBool::new(false),
            sketch: Mutex::new(sketch),
        }
    }
}

/// In-memory mapping from sketch identity to its live instance.
#[derive(Debug, Default)]
pub struct SketchRegistry {
    sketches: HashMap<String, SketchCell>,
}

impl SketchRegistry {
    /// Construct a fresh instance from metadata and attach it.
    pub fn create(&mut self, info: &Info) -> Result<()> {
        let id = info.id();
        if self.sketches.contains_key(&id) {
            return Err(SkizzeError::AlreadyExists(format!("sketch {}", id)));
        }
        let instance = SketchInstance::from_info(info)?;
        self.sketches.insert(id, SketchCell::new(instance));
        Ok(())
    }

    /// Fetch the persisted blob for `info`'s identity and attach it.
    pub fn load(&mut self, info: &Info, storage: &FileBackend) -> Result<()> {
        let id = info.id();
        let blob = storage
            .get(&id)?
            .ok_or_else(|| SkizzeError::corrupt(&id, "missing sketch blob"))?;
        let instance = SketchInstance::from_bytes(info.kind, &id, &blob)?;
        self.sketches.insert(id, SketchCell::new(instance));
        Ok(())
    }

    /// Serialize one instance and write it under its identity.
    pub fn save(&self, id: &str, storage: &FileBackend) -> Result<()> {
        let cell = self.cell(id)?;
        let bytes = cell.sketch.lock().to_bytes()?;
        storage.put(id, &bytes)
    }

    /// Insert values into one instance, unless it is quiesced.
    pub fn add(&self, id: &str, values: &[String]) -> Result<()> {
        let cell = self.cell(id)?;
        if cell.locked.load(Ordering::Acquire) {
            return Err(SkizzeError::Locked(id.to_string()));
        }
        let mut sketch = cell.sketch.lock();
        for value in values {
            sketch.insert(value);
        }
        Ok(())
    }

    /// Dispatch a query to one instance.
    pub fn get(&self, id: &str, values: &[String]) -> Result<QueryResult> {
        let cell = self.cell(id)?;
        let sketch = cell.sketch.lock();
        Ok(sketch.query(values))
    }

    /// Remove the instance and its storage entry.
    pub fn delete(&mut self, id: &str, storage: &FileBackend) -> Result<()> {
        if self.sketches.remove(id).is_none() {
            return Err(SkizzeError::NotFound(format!("sketch {}", id)));
        }
        storage.delete(id)
    }

    /// Remove the instance only, leaving storage untouched. Used to undo
    /// a partially completed creation.
    pub fn remove(&mut self, id: &str) {
        self.sketches.remove(id);
    }

    /// Flip every instance's checkpoint lock flag.
    pub fn set_locked_all(&self, locked: bool) {
        for cell in self.sketches.values() {
            cell.locked.store(locked, Ordering::Release);
        }
    }

    /// Iterate identities for the checkpoint snapshot pass.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sketches.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sketches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sketches.is_empty()
    }

    fn cell(&self, id: &str) -> Result<&SketchCell> {
        self.sketches
            .get(id)
            .ok_or_else(|| SkizzeError::NotFound(format!("sketch {}", id)))
    }
}
