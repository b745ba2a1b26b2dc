//! Shared fixtures for builder and manager tests

use extcatalog::{
    AccessControllerRegistry, CatalogBuilder, CatalogConfig, CatalogJournal, CatalogManager,
    JournalStorageType, PropertySet, ProviderRegistry, ResourceManager,
};
use std::sync::Arc;

/// Route library logging to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Smallest property set that passes construction and creation checks
pub fn minimal_props(catalog_type: &str) -> PropertySet {
    let props = PropertySet::new().with("type", catalog_type);
    match catalog_type {
        "hms" => props.with("hive.metastore.uris", "thrift://127.0.0.1:9083"),
        "es" => props.with("hosts", "http://127.0.0.1:9200"),
        "jdbc" => props
            .with("jdbc_url", "jdbc:mysql://127.0.0.1:3306/demo")
            .with("driver_url", "mysql-connector-j-8.3.0.jar")
            .with("driver_class", "com.mysql.cj.jdbc.Driver")
            .with("user", "root"),
        "iceberg" => props
            .with("iceberg.catalog.type", "rest")
            .with("uri", "http://127.0.0.1:8181"),
        "paimon" => props.with("warehouse", "s3://bucket/paimon"),
        "trino-connector" => props.with("trino.connector.name", "tpch"),
        "max_compute" => props
            .with("mc.default.project", "analytics")
            .with("mc.access_key", "ak")
            .with("mc.secret_key", "sk")
            .with("mc.endpoint", "http://service.cn.maxcompute.aliyun.com/api"),
        "lakesoul" => props
            .with("lakesoul.pg.username", "lakesoul")
            .with("lakesoul.pg.password", "secret")
            .with("lakesoul.pg.url", "jdbc:postgresql://127.0.0.1:5432/lakesoul"),
        _ => props,
    }
}

/// Builder over the built-in providers with the given resources
pub fn builder_with(
    providers: ProviderRegistry,
    resources: ResourceManager,
    access_controllers: AccessControllerRegistry,
    test_mode: bool,
) -> CatalogBuilder {
    CatalogBuilder::new(
        Arc::new(providers),
        Arc::new(resources),
        Arc::new(access_controllers),
        &CatalogConfig::default().with_test_mode(test_mode),
    )
}

pub fn default_builder(test_mode: bool) -> CatalogBuilder {
    builder_with(
        ProviderRegistry::with_builtin_providers(),
        ResourceManager::new(),
        AccessControllerRegistry::with_builtin_factories(),
        test_mode,
    )
}

/// A manager over a fresh in-memory journal
pub struct TestFixture {
    pub manager: CatalogManager,
    pub journal: Arc<dyn CatalogJournal>,
}

impl TestFixture {
    pub fn new() -> Self {
        init_logging();
        let journal = extcatalog::open_journal(JournalStorageType::Memory, "unused")
            .expect("memory journal");
        Self::with_journal(default_builder(false), journal)
    }

    pub fn with_journal(builder: CatalogBuilder, journal: Arc<dyn CatalogJournal>) -> Self {
        let (manager, _report) =
            CatalogManager::open(builder, journal.clone()).expect("open manager");
        Self { manager, journal }
    }

    /// Open a second manager over the same journal, as a restart would
    pub fn reopen(&self) -> CatalogManager {
        let (manager, _report) =
            CatalogManager::open(default_builder(false), self.journal.clone())
                .expect("reopen manager");
        manager
    }
}
