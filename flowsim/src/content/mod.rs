//! Editable site content, persisted slice by slice.
//!
//! Acts as a client-side CMS: every content category (glossary,
//! products, chart series, ...) is an independent slice loaded from the
//! [`Backend`] at startup — falling back to the compiled-in default
//! when the slice is absent, malformed, or tagged with a stale schema
//! version — and written back whenever it is updated. Load failures are
//! never surfaced as errors, only logged; write failures are.
//!
//! There is no cross-slice transactionality: each slice is
//! last-write-wins under its own key.

pub mod defaults;
mod icon;
mod model;
mod store;

pub use self::{
    icon::IconKey,
    model::{
        AppConfig, ChartPoint, HomeModule, HpcItem, Product, ProductFeature, ProductVariant,
        ProtocolConcept, ProtocolMechanism, RoadmapCategory, RoadmapItem,
    },
    store::{Backend, ContentError, DirStore, MemoryStore},
};

use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use tracing::warn;

/// Version tag of the stored content schema.
///
/// Bumped whenever a slice's shape changes incompatibly. A store tagged
/// with any other version is ignored wholesale and every slice reloads
/// from its default — stale data silently degrading into a broken page
/// is worse than losing edits.
pub const SCHEMA_VERSION: &str = "3.2";

/// Key under which [`SCHEMA_VERSION`] is stored.
const VERSION_KEY: &str = "app_version";

const KEY_APP_CONFIG: &str = "app_config";
const KEY_HOME_MODULES: &str = "app_home_modules";
const KEY_GLOSSARY: &str = "app_glossary";
const KEY_PRODUCTS: &str = "app_products";
const KEY_PERFORMANCE: &str = "app_perf_data";
const KEY_FAILOVER: &str = "app_failover_data";
const KEY_PROTOCOLS: &str = "app_protocols";
const KEY_HPC_CHECKLIST: &str = "app_hpc_checklist";
const KEY_ROADMAP: &str = "app_future";

/// The loaded content, bound to its persistence backend.
///
/// # Example
///
/// ```
/// use flowsim::content::{ContentStore, MemoryStore};
///
/// let mut content = ContentStore::open(MemoryStore::new()).unwrap();
/// assert!(content.glossary().contains_key("PFC"));
///
/// let mut glossary = content.glossary().clone();
/// glossary.insert("Hysteresis".into(), "Two thresholds, no flapping.".into());
/// content.update_glossary(glossary).unwrap();
/// ```
pub struct ContentStore<B> {
    backend: B,

    app_config: AppConfig,
    home_modules: Vec<HomeModule>,
    glossary: BTreeMap<String, String>,
    products: Vec<Product>,
    performance_data: Vec<ChartPoint>,
    failover_data: Vec<ChartPoint>,
    protocol_concepts: Vec<ProtocolConcept>,
    hpc_checklist: Vec<HpcItem>,
    roadmap: Vec<RoadmapCategory>,
}

/// Load one slice, substituting `fallback` for anything unusable.
fn load_slice<B: Backend, T: DeserializeOwned>(
    backend: &B,
    versioned: bool,
    key: &str,
    fallback: impl FnOnce() -> T,
) -> T {
    if !versioned {
        return fallback();
    }
    let Some(raw) = backend.get(key) else {
        return fallback();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(error) => {
            warn!(key, %error, "stored content slice unusable, using default");
            fallback()
        }
    }
}

impl<B: Backend> ContentStore<B> {
    /// Load every slice from `backend`, then stamp the current schema
    /// version so the next launch trusts what this session writes.
    ///
    /// A backend tagged with a different schema version contributes
    /// nothing: its content is cleared out and every slice starts from
    /// its compiled-in default. Without the clear, a stale slice that
    /// still parses under the new schema would pass the (re-stamped)
    /// version gate and resurface on the next open.
    pub fn open(mut backend: B) -> Result<Self, ContentError> {
        let versioned = match backend.get(VERSION_KEY) {
            Some(stored) if stored == SCHEMA_VERSION => true,
            Some(_) => {
                warn!("content schema version mismatch, discarding stored content");
                backend.clear()?;
                false
            }
            None => false,
        };

        let mut store = Self {
            app_config: load_slice(&backend, versioned, KEY_APP_CONFIG, defaults::app_config),
            home_modules: load_slice(
                &backend,
                versioned,
                KEY_HOME_MODULES,
                defaults::home_modules,
            ),
            glossary: load_slice(&backend, versioned, KEY_GLOSSARY, defaults::glossary),
            products: load_slice(&backend, versioned, KEY_PRODUCTS, defaults::products),
            performance_data: load_slice(
                &backend,
                versioned,
                KEY_PERFORMANCE,
                defaults::performance_data,
            ),
            failover_data: load_slice(&backend, versioned, KEY_FAILOVER, defaults::failover_data),
            protocol_concepts: load_slice(
                &backend,
                versioned,
                KEY_PROTOCOLS,
                defaults::protocol_concepts,
            ),
            hpc_checklist: load_slice(
                &backend,
                versioned,
                KEY_HPC_CHECKLIST,
                defaults::hpc_checklist,
            ),
            roadmap: load_slice(&backend, versioned, KEY_ROADMAP, defaults::roadmap),
            backend,
        };

        store.backend.set(VERSION_KEY, SCHEMA_VERSION)?;

        Ok(store)
    }

    fn persist<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), ContentError> {
        let raw = serde_json::to_string(value).map_err(|source| ContentError::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.backend.set(key, &raw)
    }

    /// Clear the whole backend and restore every slice to its
    /// compiled-in default.
    pub fn reset_to_defaults(&mut self) -> Result<(), ContentError> {
        self.backend.clear()?;
        self.backend.set(VERSION_KEY, SCHEMA_VERSION)?;

        self.app_config = defaults::app_config();
        self.home_modules = defaults::home_modules();
        self.glossary = defaults::glossary();
        self.products = defaults::products();
        self.performance_data = defaults::performance_data();
        self.failover_data = defaults::failover_data();
        self.protocol_concepts = defaults::protocol_concepts();
        self.hpc_checklist = defaults::hpc_checklist();
        self.roadmap = defaults::roadmap();

        Ok(())
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn update_app_config(&mut self, value: AppConfig) -> Result<(), ContentError> {
        self.persist(KEY_APP_CONFIG, &value)?;
        self.app_config = value;
        Ok(())
    }

    pub fn home_modules(&self) -> &[HomeModule] {
        &self.home_modules
    }

    pub fn update_home_modules(&mut self, value: Vec<HomeModule>) -> Result<(), ContentError> {
        self.persist(KEY_HOME_MODULES, &value)?;
        self.home_modules = value;
        Ok(())
    }

    pub fn glossary(&self) -> &BTreeMap<String, String> {
        &self.glossary
    }

    pub fn update_glossary(
        &mut self,
        value: BTreeMap<String, String>,
    ) -> Result<(), ContentError> {
        self.persist(KEY_GLOSSARY, &value)?;
        self.glossary = value;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn update_products(&mut self, value: Vec<Product>) -> Result<(), ContentError> {
        self.persist(KEY_PRODUCTS, &value)?;
        self.products = value;
        Ok(())
    }

    pub fn performance_data(&self) -> &[ChartPoint] {
        &self.performance_data
    }

    pub fn update_performance_data(&mut self, value: Vec<ChartPoint>) -> Result<(), ContentError> {
        self.persist(KEY_PERFORMANCE, &value)?;
        self.performance_data = value;
        Ok(())
    }

    pub fn failover_data(&self) -> &[ChartPoint] {
        &self.failover_data
    }

    pub fn update_failover_data(&mut self, value: Vec<ChartPoint>) -> Result<(), ContentError> {
        self.persist(KEY_FAILOVER, &value)?;
        self.failover_data = value;
        Ok(())
    }

    pub fn protocol_concepts(&self) -> &[ProtocolConcept] {
        &self.protocol_concepts
    }

    pub fn update_protocol_concepts(
        &mut self,
        value: Vec<ProtocolConcept>,
    ) -> Result<(), ContentError> {
        self.persist(KEY_PROTOCOLS, &value)?;
        self.protocol_concepts = value;
        Ok(())
    }

    pub fn hpc_checklist(&self) -> &[HpcItem] {
        &self.hpc_checklist
    }

    pub fn update_hpc_checklist(&mut self, value: Vec<HpcItem>) -> Result<(), ContentError> {
        self.persist(KEY_HPC_CHECKLIST, &value)?;
        self.hpc_checklist = value;
        Ok(())
    }

    pub fn roadmap(&self) -> &[RoadmapCategory] {
        &self.roadmap
    }

    pub fn update_roadmap(&mut self, value: Vec<RoadmapCategory>) -> Result<(), ContentError> {
        self.persist(KEY_ROADMAP, &value)?;
        self.roadmap = value;
        Ok(())
    }

    /// Hand the backend back, dropping the loaded content.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(entries: &[(&str, &str)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (key, value) in entries {
            store.set(key, value).unwrap();
        }
        store
    }

    #[test]
    fn fresh_backend_loads_defaults_and_stamps_version() {
        let content = ContentStore::open(MemoryStore::new()).unwrap();
        assert_eq!(content.app_config(), &defaults::app_config());
        assert_eq!(content.glossary(), &defaults::glossary());

        let backend = content.into_backend();
        assert_eq!(backend.get(VERSION_KEY).as_deref(), Some(SCHEMA_VERSION));
    }

    #[test]
    fn stored_slice_wins_over_default() {
        let backend = seeded(&[
            (VERSION_KEY, SCHEMA_VERSION),
            (KEY_GLOSSARY, r#"{"Only":"entry"}"#),
        ]);
        let content = ContentStore::open(backend).unwrap();

        assert_eq!(content.glossary().len(), 1);
        assert_eq!(content.glossary()["Only"], "entry");
        // untouched slices still come from defaults
        assert_eq!(content.products(), defaults::products());
    }

    #[test]
    fn version_mismatch_ignores_stored_content() {
        let backend = seeded(&[
            (VERSION_KEY, "2.9"),
            (KEY_GLOSSARY, r#"{"Stale":"entry"}"#),
        ]);
        let content = ContentStore::open(backend).unwrap();

        assert_eq!(content.glossary(), &defaults::glossary());
        // and the version is re-stamped for the next launch
        assert_eq!(
            content.into_backend().get(VERSION_KEY).as_deref(),
            Some(SCHEMA_VERSION)
        );
    }

    #[test]
    fn pre_migration_content_does_not_survive_a_reopen() {
        let backend = seeded(&[
            (VERSION_KEY, "2.9"),
            (KEY_GLOSSARY, r#"{"Stale":"entry"}"#),
        ]);

        // first open discards the mismatched content and re-stamps
        let backend = ContentStore::open(backend).unwrap().into_backend();
        assert_eq!(backend.get(KEY_GLOSSARY), None);

        // the second open now passes the version gate, the stale slice
        // must not resurface
        let reopened = ContentStore::open(backend).unwrap();
        assert_eq!(reopened.glossary(), &defaults::glossary());
    }

    #[test]
    fn malformed_slice_falls_back() {
        let backend = seeded(&[
            (VERSION_KEY, SCHEMA_VERSION),
            (KEY_GLOSSARY, "not json at all"),
        ]);
        let content = ContentStore::open(backend).unwrap();
        assert_eq!(content.glossary(), &defaults::glossary());
    }

    #[test]
    fn shape_mismatch_falls_back() {
        // an array where an object is expected, and JSON null
        let backend = seeded(&[
            (VERSION_KEY, SCHEMA_VERSION),
            (KEY_GLOSSARY, "[1, 2, 3]"),
            (KEY_PRODUCTS, "null"),
        ]);
        let content = ContentStore::open(backend).unwrap();
        assert_eq!(content.glossary(), &defaults::glossary());
        assert_eq!(content.products(), defaults::products());
    }

    #[test]
    fn update_persists_immediately() {
        let mut content = ContentStore::open(MemoryStore::new()).unwrap();

        let mut glossary = content.glossary().clone();
        glossary.insert("Hysteresis".into(), "Two thresholds.".into());
        content.update_glossary(glossary.clone()).unwrap();

        // reopening the same backend sees the edit
        let reopened = ContentStore::open(content.into_backend()).unwrap();
        assert_eq!(reopened.glossary(), &glossary);
    }

    #[test]
    fn reset_restores_defaults_and_clears_backend() {
        let mut content = ContentStore::open(MemoryStore::new()).unwrap();
        content
            .update_glossary(BTreeMap::from([("A".into(), "b".into())]))
            .unwrap();

        content.reset_to_defaults().unwrap();
        assert_eq!(content.glossary(), &defaults::glossary());

        let backend = content.into_backend();
        assert_eq!(backend.get(KEY_GLOSSARY), None);
        assert_eq!(backend.get(VERSION_KEY).as_deref(), Some(SCHEMA_VERSION));
    }

    #[test]
    fn dir_store_end_to_end() {
        let dir = tempfile::tempdir().unwrap();

        let mut content = ContentStore::open(DirStore::new(dir.path())).unwrap();
        let mut config = content.app_config().clone();
        config.hero_title = "Edited".into();
        content.update_app_config(config.clone()).unwrap();
        drop(content);

        let reopened = ContentStore::open(DirStore::new(dir.path())).unwrap();
        assert_eq!(reopened.app_config(), &config);
    }
}
