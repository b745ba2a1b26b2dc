//! Providers, access-controller factories and journals that observe or
//! break the catalog pipeline

use extcatalog::catalog::base::CatalogBase;
use extcatalog::journal::{JournalEntry, JournalOp, MemoryJournal};
use extcatalog::{
    AccessController, AccessControllerFactory, AccessControllerRegistry, CatalogError,
    CatalogJournal, CatalogProvider, CatalogResult, CatalogSpec, ExternalCatalog,
    JournalStorageType, PropertySet,
};
use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

pub const RECORDING: &str = "recording";
/// When "true", the recording catalog fails its creation check
pub const FAIL_CHECK: &str = "recording.fail_check";

/// How often each hook ran
#[derive(Debug, Default)]
pub struct HookCounters {
    pub constructed: AtomicUsize,
    pub defaults: AtomicUsize,
    pub checks: AtomicUsize,
    pub access_inits: AtomicUsize,
}

impl HookCounters {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct RecordingCatalog {
    base: CatalogBase,
    counters: Arc<HookCounters>,
}

impl ExternalCatalog for RecordingCatalog {
    fn base(&self) -> &CatalogBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut CatalogBase {
        &mut self.base
    }

    fn catalog_type(&self) -> &str {
        RECORDING
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn set_default_props_if_missing(&mut self, replay: bool) {
        self.counters.defaults.fetch_add(1, Ordering::SeqCst);
        self.base.set_common_defaults(replay);
    }

    fn check_when_creating(&self) -> CatalogResult<()> {
        self.counters.checks.fetch_add(1, Ordering::SeqCst);
        if self.base.properties().get(FAIL_CHECK) == Some("true") {
            return Err(CatalogError::invalid_config(RECORDING, "check rejected"));
        }
        self.base.check_common_properties()
    }

    fn init_access_controller(
        &self,
        controllers: &AccessControllerRegistry,
        enforce: bool,
    ) -> CatalogResult<()> {
        self.counters.access_inits.fetch_add(1, Ordering::SeqCst);
        self.base.init_access_controller(controllers, enforce)
    }
}

/// Registers under a mixed-case tag to exercise case-insensitive lookup
pub struct RecordingProvider {
    pub counters: Arc<HookCounters>,
}

impl RecordingProvider {
    pub fn new() -> (Self, Arc<HookCounters>) {
        let counters = Arc::new(HookCounters::default());
        (
            Self {
                counters: counters.clone(),
            },
            counters,
        )
    }
}

impl CatalogProvider for RecordingProvider {
    fn catalog_type(&self) -> &str {
        "Recording"
    }

    fn construct(&self, spec: CatalogSpec) -> CatalogResult<Box<dyn ExternalCatalog>> {
        self.counters.constructed.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingCatalog {
            base: CatalogBase::new(RECORDING, spec),
            counters: self.counters.clone(),
        }))
    }
}

/// Factory whose controllers cannot be created
pub struct FailingAccessControllerFactory;

impl AccessControllerFactory for FailingAccessControllerFactory {
    fn class_name(&self) -> &str {
        "failing"
    }

    fn create(&self, _properties: &PropertySet) -> CatalogResult<Arc<dyn AccessController>> {
        Err(CatalogError::Config("policy service unreachable".to_string()))
    }
}

/// Factory that panics instead of returning an error
pub struct PanickingAccessControllerFactory;

impl AccessControllerFactory for PanickingAccessControllerFactory {
    fn class_name(&self) -> &str {
        "panicking"
    }

    fn create(&self, _properties: &PropertySet) -> CatalogResult<Arc<dyn AccessController>> {
        panic!("policy plugin crashed")
    }
}

pub fn sabotaged_access_controllers() -> AccessControllerRegistry {
    let mut registry = AccessControllerRegistry::with_builtin_factories();
    registry
        .register(Arc::new(FailingAccessControllerFactory))
        .expect("register failing factory");
    registry
        .register(Arc::new(PanickingAccessControllerFactory))
        .expect("register panicking factory");
    registry
}

/// In-memory journal whose appends or flushes can be made to fail
#[derive(Default)]
pub struct FaultyJournal {
    inner: MemoryJournal,
    pub fail_append: AtomicBool,
    pub fail_flush: AtomicBool,
}

impl FaultyJournal {
    pub fn failing_flush() -> Self {
        let journal = Self::default();
        journal.fail_flush.store(true, Ordering::SeqCst);
        journal
    }
}

impl CatalogJournal for FaultyJournal {
    fn append(&self, op: JournalOp) -> CatalogResult<u64> {
        if self.fail_append.load(Ordering::SeqCst) {
            return Err(CatalogError::Journal("append rejected".to_string()));
        }
        self.inner.append(op)
    }

    fn entries(&self) -> CatalogResult<Vec<JournalEntry>> {
        self.inner.entries()
    }

    fn len(&self) -> CatalogResult<usize> {
        self.inner.len()
    }

    fn flush(&self) -> CatalogResult<()> {
        if self.fail_flush.load(Ordering::SeqCst) {
            return Err(CatalogError::Journal("disk full".to_string()));
        }
        self.inner.flush()
    }

    fn storage_type(&self) -> JournalStorageType {
        JournalStorageType::Memory
    }
}
