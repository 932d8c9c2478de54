//! Registry of domains: named bundles of one sketch per kind.

use std::collections::BTreeMap;

use crate::datamodel::Info;
use crate::error::{Result, SkizzeError};
use crate::manager::info::InfoRegistry;
use crate::manager::sketches::SketchRegistry;
use crate::storage::FileBackend;

/// Reserved storage key holding the serialized domain registry.
pub const DOMAINS_KEY: &str = "__domains__";

/// Mapping from domain name to its four member identities.
#[derive(Debug, Default)]
pub struct DomainRegistry {
    domains: BTreeMap<String, Vec<String>>,
}

impl DomainRegistry {
    /// Register a domain and create its members. If any member fails, the
    /// ones already created are unwound and the domain is not recorded.
    pub fn create(
        &mut self,
        name: &str,
        member_infos: Vec<Info>,
        infos: &mut InfoRegistry,
        sketches: &mut SketchRegistry,
    ) -> Result<()> {
        if self.domains.contains_key(name) {
            return Err(SkizzeError::AlreadyExists(format!("domain {}", name)));
        }

        let mut created: Vec<String> = Vec::with_capacity(member_infos.len());
        for info in &member_infos {
            let id = info.id();
            if let Err(e) = infos.create(info.clone()) {
                Self::unwind(&created, infos, sketches);
                return Err(e);
            }
            if let Err(e) = sketches.create(info) {
                let _ = infos.delete(&id);
                Self::unwind(&created, infos, sketches);
                return Err(e);
            }
            created.push(id);
        }

        self.domains.insert(name.to_string(), created);
        Ok(())
    }

    fn unwind(created: &[String], infos: &mut InfoRegistry, sketches: &mut SketchRegistry) {
        for id in created.iter().rev() {
            sketches.remove(id);
            let _ = infos.delete(id);
        }
    }

    /// Fan values out to every member, stopping at the first error.
    pub fn add(&self, name: &str, values: &[String], sketches: &SketchRegistry) -> Result<()> {
        let members = self.members(name)?;
        for id in members {
            sketches.add(id, values)?;
        }
        Ok(())
    }

    /// Drop the domain and all of its member sketches. Members that have
    /// already disappeared individually are skipped.
    pub fn delete(
        &mut self,
        name: &str,
        infos: &mut InfoRegistry,
        sketches: &mut SketchRegistry,
        storage: &FileBackend,
    ) -> Result<()> {
        let members = self
            .domains
            .remove(name)
            .ok_or_else(|| SkizzeError::NotFound(format!("domain {}", name)))?;

        for id in &members {
            match infos.delete(id) {
                Ok(_) | Err(SkizzeError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
            match sketches.delete(id, storage) {
                Ok(()) | Err(SkizzeError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn members(&self, name: &str) -> Result<&[String]> {
        self.domains
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SkizzeError::NotFound(format!("domain {}", name)))
    }

    /// Iterate domains in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.domains.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Serialize the whole mapping to storage.
    pub fn save(&self, storage: &FileBackend) -> Result<()> {
        let blob = bincode::serialize(&self.domains).map_err(|e| {
            SkizzeError::Storage(std::io::Error::new(std::io::ErrorKind::Other, e))
        })?;
        storage.put(DOMAINS_KEY, &blob)
    }

    /// Replace the mapping from storage, if a registry blob exists.
    pub fn load(&mut self, storage: &FileBackend) -> Result<()> {
        if let Some(blob) = storage.get(DOMAINS_KEY)? {
            self.domains = bincode::deserialize(&blob)
                .map_err(|e| SkizzeError::corrupt(DOMAINS_KEY, e.to_string()))?;
        }
        Ok(())
    }
}
