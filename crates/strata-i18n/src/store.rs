//! Process-wide catalog cache with lazy at-most-once construction
//!
//! Steady-state reads go through an [`ArcSwap`] and never take a lock. The
//! build path uses double-checked locking: the fast path reads the loaded
//! flag, the slow path re-checks it under the build mutex so unlimited
//! concurrent first callers trigger exactly one full load. A reload builds a
//! brand-new catalog set and swaps it in atomically, so in-flight readers
//! see either the fully-old or the fully-new set, never a partial one.

use crate::catalog::{self, Catalog};
use crate::config::I18nConfig;
use crate::locale::Locale;
use crate::resource;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// All catalogs for one published generation, keyed by locale
pub(crate) type CatalogSet = HashMap<Locale, Catalog>;

/// Owner of the locale-to-catalog mapping
#[derive(Debug)]
pub(crate) struct CatalogStore {
    catalogs: ArcSwap<CatalogSet>,
    loaded: AtomicBool,
    build_lock: Mutex<()>,
    load_count: AtomicU64,
}

impl CatalogStore {
    pub(crate) fn new() -> Self {
        Self {
            catalogs: ArcSwap::from_pointee(CatalogSet::new()),
            loaded: AtomicBool::new(false),
            build_lock: Mutex::new(()),
            load_count: AtomicU64::new(0),
        }
    }

    /// Return the current catalog set, building it first if necessary
    pub(crate) fn ensure_loaded(&self, config: &I18nConfig) -> Arc<CatalogSet> {
        if self.loaded.load(Ordering::Acquire) {
            return self.catalogs.load_full();
        }

        let _guard = self.build_lock.lock();
        // Re-check under the lock: another caller may have finished the
        // build while this one was waiting.
        if self.loaded.load(Ordering::Acquire) {
            return self.catalogs.load_full();
        }

        let set = self.build(config);
        self.catalogs.store(Arc::new(set));
        self.loaded.store(true, Ordering::Release);
        self.catalogs.load_full()
    }

    /// Rebuild from scratch and atomically swap the published set
    pub(crate) fn reload(&self, config: &I18nConfig) {
        let _guard = self.build_lock.lock();
        let set = self.build(config);
        self.catalogs.store(Arc::new(set));
        self.loaded.store(true, Ordering::Release);
        info!("translation catalogs reloaded");
    }

    /// Mark the published set stale so the next access rebuilds
    pub(crate) fn invalidate(&self) {
        self.loaded.store(false, Ordering::Release);
        debug!("translation catalogs invalidated");
    }

    /// Drop all catalogs and return to the unloaded state (test utility)
    pub(crate) fn reset(&self) {
        let _guard = self.build_lock.lock();
        self.catalogs.store(Arc::new(CatalogSet::new()));
        self.loaded.store(false, Ordering::Release);
        debug!("translation catalogs reset");
    }

    /// Number of full catalog builds performed so far
    pub(crate) fn load_count(&self) -> u64 {
        self.load_count.load(Ordering::Relaxed)
    }

    fn build(&self, config: &I18nConfig) -> CatalogSet {
        let documents = resource::load_documents(&config.load_path);
        let mut set = CatalogSet::new();
        for document in &documents {
            catalog::merge_document(
                &mut set,
                &document.root,
                &document.path,
                &config.available_locales,
            );
        }
        self.load_count.fetch_add(1, Ordering::Relaxed);
        info!(
            locales = set.len(),
            sources = documents.len(),
            "translation catalogs built"
        );
        set
    }
}
