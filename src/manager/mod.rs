//! The manager: top-level façade over the registries, the storage
//! backend, the periodic checkpoint ticker and the checkpoint protocol.

pub mod domains;
pub mod info;
pub mod sketches;

pub use domains::DomainRegistry;
pub use info::InfoRegistry;
pub use sketches::SketchRegistry;

use parking_lot::{Condvar, Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::Config;
use crate::datamodel::{
    validate_name, validate_values, Info, Properties, QueryResult, SketchKind,
};
use crate::error::{Result, SkizzeError};
use crate::storage::FileBackend;

/// Snapshot worker pool width: four sketches serialize in parallel, and
/// the checkpoint waits for each batch before scheduling the next.
const SNAPSHOT_WORKERS: usize = 4;

#[derive(Debug, Default)]
struct Registries {
    infos: InfoRegistry,
    sketches: SketchRegistry,
    domains: DomainRegistry,
}

struct Shared {
    registries: RwLock<Registries>,
    storage: FileBackend,
    shutdown: AtomicBool,
    saving: AtomicBool,
    stop: (Mutex<bool>, Condvar),
}

/// Orchestrates sketches and domains and syncs them to disk.
pub struct Manager {
    shared: Arc<Shared>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl Manager {
    /// Open the manager over the configured data directory, restoring any
    /// previously checkpointed state, and start the periodic ticker.
    pub fn open(config: &Config) -> Result<Self> {
        let storage = FileBackend::open(&config.data_dir)?;

        let mut registries = Registries::default();
        registries.infos.load(&storage)?;
        let restored: Vec<Info> = registries.infos.iter().cloned().collect();
        for info in &restored {
            registries.sketches.load(info, &storage)?;
        }
        registries.domains.load(&storage)?;

        tracing::info!(
            sketches = restored.len(),
            domains = registries.domains.len(),
            data_dir = %config.data_dir.display(),
            "manager opened"
        );

        let shared = Arc::new(Shared {
            registries: RwLock::new(registries),
            storage,
            shutdown: AtomicBool::new(false),
            saving: AtomicBool::new(false),
            stop: (Mutex::new(false), Condvar::new()),
        });

        let ticker = spawn_ticker(Arc::clone(&shared), config.save_interval());
        Ok(Self {
            shared,
            ticker: Mutex::new(Some(ticker)),
        })
    }

    /// Register and construct a new sketch. If construction fails after
    /// the metadata was registered, the metadata entry is rolled back.
    pub fn create_sketch(&self, info: Info) -> Result<()> {
        self.ensure_open()?;
        info.validate()?;

        let id = info.id();
        let mut reg = self.shared.registries.write();
        reg.infos.create(info.clone())?;
        if let Err(e) = reg.sketches.create(&info) {
            if let Err(rollback) = reg.infos.delete(&id) {
                tracing::error!(sketch = %id, error = %rollback, "rollback of info entry failed");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Create a domain: four sketches, one per kind, sharing `name` and
    /// `properties`. Any child failure unwinds the ones already created.
    pub fn create_domain(&self, name: &str, properties: Properties) -> Result<()> {
        self.ensure_open()?;
        validate_name(name)?;

        let member_infos: Vec<Info> = SketchKind::ALL
            .iter()
            .map(|&kind| Info::new(name, kind, properties.clone()))
            .collect();
        for info in &member_infos {
            info.validate()?;
        }

        let reg = &mut *self.shared.registries.write();
        reg.domains
            .create(name, member_infos, &mut reg.infos, &mut reg.sketches)
    }

    /// Insert values into one sketch.
    pub fn add_to_sketch(&self, id: &str, values: &[String]) -> Result<()> {
        self.ensure_open()?;
        validate_values(values)?;
        let reg = self.shared.registries.read();
        reg.sketches.add(id, values)
    }

    /// Insert values into every member of a domain, stopping at the first
    /// error.
    pub fn add_to_domain(&self, name: &str, values: &[String]) -> Result<()> {
        self.ensure_open()?;
        validate_values(values)?;
        let reg = self.shared.registries.read();
        reg.domains.add(name, values, &reg.sketches)
    }

    /// Query one sketch. The result shape is determined by its kind.
    pub fn get_from_sketch(&self, id: &str, values: &[String]) -> Result<QueryResult> {
        self.ensure_open()?;
        let reg = self.shared.registries.read();
        reg.sketches.get(id, values)
    }

    /// Look up a sketch's creation metadata.
    pub fn get_sketch_info(&self, id: &str) -> Result<Info> {
        self.ensure_open()?;
        let reg = self.shared.registries.read();
        reg.infos
            .get(id)
            .cloned()
            .ok_or_else(|| SkizzeError::NotFound(format!("sketch {}", id)))
    }

    /// Look up a domain's member identities.
    pub fn get_domain(&self, name: &str) -> Result<Vec<String>> {
        self.ensure_open()?;
        let reg = self.shared.registries.read();
        reg.domains.members(name).map(<[String]>::to_vec)
    }

    /// Remove one sketch and its storage entry.
    pub fn delete_sketch(&self, id: &str) -> Result<()> {
        self.ensure_open()?;
        let mut reg = self.shared.registries.write();
        reg.infos.delete(id)?;
        reg.sketches.delete(id, &self.shared.storage)
    }

    /// Remove a domain and all four member sketches.
    pub fn delete_domain(&self, name: &str) -> Result<()> {
        self.ensure_open()?;
        let reg = &mut *self.shared.registries.write();
        reg.domains
            .delete(name, &mut reg.infos, &mut reg.sketches, &self.shared.storage)
    }

    /// All sketches as `(name, kind_tag)`, sorted by name then tag.
    pub fn get_sketches(&self) -> Vec<(String, String)> {
        let reg = self.shared.registries.read();
        let mut out: Vec<(String, String)> = reg
            .infos
            .iter()
            .map(|info| (info.name.clone(), info.kind.tag().to_string()))
            .collect();
        out.sort();
        out
    }

    /// All domains as `(name, member_count)`, sorted by name.
    pub fn get_domains(&self) -> Vec<(String, usize)> {
        let reg = self.shared.registries.read();
        reg.domains
            .iter()
            .map(|(name, members)| (name.to_string(), members.len()))
            .collect()
    }

    /// Synchronous checkpoint of registries and all live sketches.
    pub fn save(&self) -> Result<()> {
        self.ensure_open()?;
        self.shared.save()
    }

    /// Stop the ticker, wait for any running checkpoint, release storage.
    /// Idempotent; also invoked on drop.
    pub fn destroy(&self) {
        if self.shared.shutdown.swap(true, Ordering::AcqRel) {
            return;
        }

        {
            let mut stopped = self.shared.stop.0.lock();
            *stopped = true;
        }
        self.shared.stop.1.notify_all();
        if let Some(handle) = self.ticker.lock().take() {
            let _ = handle.join();
        }

        // A checkpoint started before shutdown holds the write lock;
        // taking it here waits that checkpoint out.
        let _reg = self.shared.registries.write();
        if let Err(e) = self.shared.storage.close() {
            tracing::warn!(error = %e, "failed to close storage backend");
        }
        tracing::info!("manager destroyed");
    }

    fn ensure_open(&self) -> Result<()> {
        if self.shared.shutdown.load(Ordering::Acquire) {
            return Err(SkizzeError::ShuttingDown);
        }
        Ok(())
    }
}

impl Drop for Manager {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl Shared {
    fn save(&self) -> Result<()> {
        self.saving.store(true, Ordering::Release);
        let result = self.checkpoint();
        self.saving.store(false, Ordering::Release);
        result
    }

    /// The checkpoint protocol: quiesce inserts, persist the registry
    /// blobs, then snapshot every live sketch.
    fn checkpoint(&self) -> Result<()> {
        let reg = self.registries.write();
        reg.sketches.set_locked_all(true);
        let result = self.persist(&reg);
        reg.sketches.set_locked_all(false);
        result
    }

    fn persist(&self, reg: &Registries) -> Result<()> {
        // Registry blob failures abort the checkpoint and surface.
        reg.infos.save(&self.storage)?;
        reg.domains.save(&self.storage)?;

        // Sketch snapshots run four at a time; each batch completes
        // before the next is scheduled. Per-sketch failures are logged
        // and do not fail the checkpoint.
        let ids: Vec<&str> = reg.sketches.ids().collect();
        let storage = &self.storage;
        for batch in ids.chunks(SNAPSHOT_WORKERS) {
            thread::scope(|scope| {
                for &id in batch {
                    let sketches = &reg.sketches;
                    scope.spawn(move || {
                        if let Err(e) = sketches.save(id, storage) {
                            tracing::warn!(sketch = id, error = %e, "failed to snapshot sketch");
                        }
                    });
                }
            });
        }
        Ok(())
    }
}

fn spawn_ticker(shared: Arc<Shared>, period: Duration) -> JoinHandle<()> {
    thread::spawn(move || {
        tracing::debug!(period_secs = period.as_secs(), "checkpoint ticker started");
        let mut stopped = shared.stop.0.lock();
        loop {
            let wait = shared.stop.1.wait_for(&mut stopped, period);
            if *stopped {
                break;
            }
            if !wait.timed_out() {
                continue;
            }
            // A tick landing while a save is still running is dropped.
            if shared.saving.load(Ordering::Acquire) {
                tracing::debug!("checkpoint still running, dropping tick");
                continue;
            }
            drop(stopped);
            if let Err(e) = shared.save() {
                tracing::warn!(error = %e, "periodic checkpoint failed");
            }
            stopped = shared.stop.0.lock();
            // A stop requested mid-save must not wait out another period.
            if *stopped {
                break;
            }
        }
        tracing::debug!("checkpoint ticker stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datamodel::MAX_KEY_SIZE;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_config(dir: &Path) -> Config {
        Config {
            info_dir: dir.to_path_buf(),
            data_dir: dir.to_path_buf(),
            port: 0,
            // Far enough out that the ticker never fires mid-test.
            save_threshold_seconds: 600,
        }
    }

    fn card_info(name: &str) -> Info {
        Info::new(
            name,
            SketchKind::Card,
            Properties {
                max_unique_items: Some(10_000),
                ..Properties::default()
            },
        )
    }

    fn values(vs: &[&str]) -> Vec<String> {
        vs.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_manager() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        assert!(manager.get_sketches().is_empty());
        assert!(manager.get_domains().is_empty());
    }

    #[test]
    fn test_create_list_and_duplicates() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();

        manager.create_sketch(card_info("marvel")).unwrap();
        assert_eq!(
            manager.get_sketches(),
            vec![("marvel".to_string(), "card".to_string())]
        );

        assert!(matches!(
            manager.create_sketch(card_info("marvel")),
            Err(SkizzeError::AlreadyExists(_))
        ));
        // Duplicate create leaves state unchanged.
        assert_eq!(manager.get_sketches().len(), 1);

        let rank = Info::new(
            "marvel",
            SketchKind::Rank,
            Properties {
                size: Some(10),
                ..Properties::default()
            },
        );
        manager.create_sketch(rank).unwrap();
        assert_eq!(
            manager.get_sketches(),
            vec![
                ("marvel".to_string(), "card".to_string()),
                ("marvel".to_string(), "rank".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_invalid_properties() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();

        let mut info = card_info("avengers");
        info.properties.max_unique_items = Some(0);
        assert!(matches!(
            manager.create_sketch(info),
            Err(SkizzeError::InvalidProperties(_))
        ));
        assert!(manager.get_sketches().is_empty());
    }

    #[test]
    fn test_delete_sketch() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();

        assert!(matches!(
            manager.delete_sketch("marvel.CARD"),
            Err(SkizzeError::NotFound(_))
        ));

        manager.create_sketch(card_info("marvel")).unwrap();
        manager.delete_sketch("marvel.CARD").unwrap();
        assert!(manager.get_sketches().is_empty());
    }

    #[test]
    fn test_add_and_query_unknown_sketch() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        assert!(matches!(
            manager.add_to_sketch("nope.CARD", &values(&["x"])),
            Err(SkizzeError::NotFound(_))
        ));
        assert!(matches!(
            manager.get_from_sketch("nope.CARD", &[]),
            Err(SkizzeError::NotFound(_))
        ));
    }

    #[test]
    fn test_oversized_value_rejected() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager.create_sketch(card_info("marvel")).unwrap();

        let oversized = vec!["x".repeat(MAX_KEY_SIZE + 1)];
        assert!(matches!(
            manager.add_to_sketch("marvel.CARD", &oversized),
            Err(SkizzeError::InvalidProperties(_))
        ));
    }

    #[test]
    fn test_query_does_not_mutate() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager.create_sketch(card_info("marvel")).unwrap();
        manager
            .add_to_sketch("marvel.CARD", &values(&["hulk", "thor"]))
            .unwrap();

        let first = manager.get_from_sketch("marvel.CARD", &[]).unwrap();
        let second = manager.get_from_sketch("marvel.CARD", &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_card_save_load() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let manager = Manager::open(&config).unwrap();
        manager.create_sketch(card_info("marvel")).unwrap();
        manager
            .add_to_sketch("marvel.CARD", &values(&["hulk", "thor", "iron man", "hawk-eye"]))
            .unwrap();
        manager.save().unwrap();
        manager
            .add_to_sketch("marvel.CARD", &values(&["hulk", "black widow"]))
            .unwrap();

        assert_eq!(
            manager.get_from_sketch("marvel.CARD", &[]).unwrap(),
            QueryResult::Cardinality(5)
        );
        assert!(tmp.path().join("marvel.CARD").exists());
        manager.destroy();

        // Reopen: only pre-save state survives.
        let manager = Manager::open(&config).unwrap();
        assert_eq!(
            manager.get_sketches(),
            vec![("marvel".to_string(), "card".to_string())]
        );
        assert_eq!(
            manager.get_from_sketch("marvel.CARD", &[]).unwrap(),
            QueryResult::Cardinality(4)
        );
    }

    #[test]
    fn test_freq_save_load() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let manager = Manager::open(&config).unwrap();
        let info = Info::new(
            "marvel",
            SketchKind::Freq,
            Properties {
                max_unique_items: Some(10_000),
                ..Properties::default()
            },
        );
        manager.create_sketch(info).unwrap();
        manager
            .add_to_sketch("marvel.FREQ", &values(&["hulk", "thor", "iron man", "hawk-eye"]))
            .unwrap();
        manager.save().unwrap();
        manager
            .add_to_sketch("marvel.FREQ", &values(&["hulk", "black widow"]))
            .unwrap();

        match manager
            .get_from_sketch("marvel.FREQ", &values(&["hulk"]))
            .unwrap()
        {
            QueryResult::Frequencies(freqs) => {
                assert_eq!(freqs, vec![("hulk".to_string(), 2)])
            }
            other => panic!("unexpected result {:?}", other),
        }
        manager.destroy();

        let manager = Manager::open(&config).unwrap();
        match manager
            .get_from_sketch("marvel.FREQ", &values(&["hulk"]))
            .unwrap()
        {
            QueryResult::Frequencies(freqs) => {
                assert_eq!(freqs, vec![("hulk".to_string(), 1)])
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_rank_save_load() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let manager = Manager::open(&config).unwrap();
        let info = Info::new(
            "marvel",
            SketchKind::Rank,
            Properties {
                size: Some(10),
                ..Properties::default()
            },
        );
        manager.create_sketch(info).unwrap();
        manager
            .add_to_sketch(
                "marvel.RANK",
                &values(&["hulk", "hulk", "thor", "iron man", "hawk-eye"]),
            )
            .unwrap();
        manager.save().unwrap();
        manager
            .add_to_sketch(
                "marvel.RANK",
                &values(&["hulk", "black widow", "black widow", "black widow", "black widow"]),
            )
            .unwrap();

        match manager.get_from_sketch("marvel.RANK", &[]).unwrap() {
            QueryResult::Rankings(ranked) => {
                assert_eq!(ranked.len(), 5);
                assert_eq!(ranked[0], ("black widow".to_string(), 4));
            }
            other => panic!("unexpected result {:?}", other),
        }
        manager.destroy();

        let manager = Manager::open(&config).unwrap();
        match manager.get_from_sketch("marvel.RANK", &[]).unwrap() {
            QueryResult::Rankings(ranked) => {
                assert_eq!(ranked.len(), 4);
                assert_eq!(ranked[0], ("hulk".to_string(), 2));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_memb_save_load() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let manager = Manager::open(&config).unwrap();
        let info = Info::new(
            "marvel",
            SketchKind::Memb,
            Properties {
                max_unique_items: Some(1_000),
                ..Properties::default()
            },
        );
        manager.create_sketch(info).unwrap();
        manager
            .add_to_sketch(
                "marvel.MEMB",
                &values(&["hulk", "hulk", "thor", "iron man", "hawk-eye"]),
            )
            .unwrap();
        manager.save().unwrap();
        manager
            .add_to_sketch(
                "marvel.MEMB",
                &values(&["hulk", "black widow", "black widow", "black widow", "black widow"]),
            )
            .unwrap();

        let query = values(&["hulk", "captain america", "black widow"]);
        assert_eq!(
            manager.get_from_sketch("marvel.MEMB", &query).unwrap(),
            QueryResult::Memberships(vec![
                ("hulk".to_string(), true),
                ("captain america".to_string(), false),
                ("black widow".to_string(), true),
            ])
        );
        manager.destroy();

        let manager = Manager::open(&config).unwrap();
        assert_eq!(
            manager.get_from_sketch("marvel.MEMB", &query).unwrap(),
            QueryResult::Memberships(vec![
                ("hulk".to_string(), true),
                ("captain america".to_string(), false),
                ("black widow".to_string(), false),
            ])
        );
    }

    #[test]
    fn test_domains() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();

        let props = Properties {
            max_unique_items: Some(10_000),
            size: Some(10_000),
            ..Properties::default()
        };
        manager.create_domain("marvel", props.clone()).unwrap();

        let sketches = manager.get_sketches();
        assert_eq!(sketches.len(), 4);
        let tags: Vec<&str> = sketches.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(tags, vec!["card", "freq", "memb", "rank"]);
        assert!(sketches.iter().all(|(name, _)| name == "marvel"));

        manager.create_domain("dc", props).unwrap();
        let sketches = manager.get_sketches();
        assert_eq!(sketches.len(), 8);
        assert_eq!(sketches[0], ("dc".to_string(), "card".to_string()));
        assert_eq!(sketches[1], ("dc".to_string(), "freq".to_string()));

        assert_eq!(
            manager.get_domains(),
            vec![("dc".to_string(), 4), ("marvel".to_string(), 4)]
        );
        assert_eq!(manager.get_domain("marvel").unwrap().len(), 4);
    }

    #[test]
    fn test_domain_add_fans_out() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager
            .create_domain("marvel", Properties::default())
            .unwrap();

        manager
            .add_to_domain("marvel", &values(&["hulk", "hulk", "thor"]))
            .unwrap();

        assert_eq!(
            manager.get_from_sketch("marvel.CARD", &[]).unwrap(),
            QueryResult::Cardinality(2)
        );
        match manager
            .get_from_sketch("marvel.FREQ", &values(&["hulk"]))
            .unwrap()
        {
            QueryResult::Frequencies(freqs) => assert_eq!(freqs[0].1, 2),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(
            manager.add_to_domain("dc", &values(&["flash"])),
            Err(SkizzeError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_domain_removes_members() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager
            .create_domain("marvel", Properties::default())
            .unwrap();

        manager.delete_domain("marvel").unwrap();
        assert!(manager.get_sketches().is_empty());
        assert!(manager.get_domains().is_empty());
        assert!(matches!(
            manager.delete_domain("marvel"),
            Err(SkizzeError::NotFound(_))
        ));
    }

    #[test]
    fn test_domain_create_conflict_rolls_back() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();

        // Occupy one member identity ahead of the domain.
        let clash = Info::new("marvel", SketchKind::Memb, Properties::default());
        manager.create_sketch(clash).unwrap();

        assert!(matches!(
            manager.create_domain("marvel", Properties::default()),
            Err(SkizzeError::AlreadyExists(_))
        ));
        // Only the standalone sketch survives, and no domain was recorded.
        assert_eq!(
            manager.get_sketches(),
            vec![("marvel".to_string(), "memb".to_string())]
        );
        assert!(manager.get_domains().is_empty());
    }

    #[test]
    fn test_domain_survives_restart() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let manager = Manager::open(&config).unwrap();
        manager
            .create_domain("marvel", Properties::default())
            .unwrap();
        manager.save().unwrap();
        manager.destroy();

        let manager = Manager::open(&config).unwrap();
        assert_eq!(manager.get_domains(), vec![("marvel".to_string(), 4)]);
        assert_eq!(manager.get_sketches().len(), 4);
    }

    #[test]
    fn test_empty_values_is_noop() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager.create_sketch(card_info("marvel")).unwrap();

        manager.add_to_sketch("marvel.CARD", &[]).unwrap();
        assert_eq!(
            manager.get_from_sketch("marvel.CARD", &[]).unwrap(),
            QueryResult::Cardinality(0)
        );
    }

    #[test]
    fn test_ops_after_destroy() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager.destroy();

        assert!(matches!(
            manager.create_sketch(card_info("marvel")),
            Err(SkizzeError::ShuttingDown)
        ));
        assert!(matches!(manager.save(), Err(SkizzeError::ShuttingDown)));
        // destroy is idempotent.
        manager.destroy();
    }

    #[test]
    fn test_get_sketch_info() {
        let tmp = TempDir::new().unwrap();
        let manager = Manager::open(&test_config(tmp.path())).unwrap();
        manager.create_sketch(card_info("marvel")).unwrap();

        let info = manager.get_sketch_info("marvel.CARD").unwrap();
        assert_eq!(info.name, "marvel");
        assert_eq!(info.kind, SketchKind::Card);
        assert!(matches!(
            manager.get_sketch_info("marvel.RANK"),
            Err(SkizzeError::NotFound(_))
        ));
    }
}
