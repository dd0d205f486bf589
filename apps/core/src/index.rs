use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use crate::crawler::crawl_into;
use crate::logging;
use crate::model::{Catalog, Entry};
use crate::search;
use crate::sources::IndexSource;

/// Owns the catalog as an atomically swappable immutable snapshot.
///
/// The background build assembles a complete catalog before publishing it,
/// so readers never observe a partially rebuilt one. Queries issued before
/// the readiness flag is set return empty results by design.
pub struct IndexService {
    sources: Vec<IndexSource>,
    snapshot: RwLock<Arc<Catalog>>,
    ready: AtomicBool,
}

impl IndexService {
    pub fn new(sources: Vec<IndexSource>) -> Self {
        Self {
            sources,
            snapshot: RwLock::new(Arc::new(Catalog::default())),
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Current catalog snapshot. The lock is held only for the pointer
    /// clone; a poisoned lock still hands back the inner value.
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self
            .snapshot
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    pub fn entry_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Runs every enumerator in order, sorts and deduplicates the combined
    /// result, swaps it in, then flags completion. An unreadable source
    /// contributes nothing; the worst case is a partial or empty catalog,
    /// never an abort.
    pub fn rebuild(&self) {
        self.ready.store(false, Ordering::Release);

        let mut collected: Vec<Entry> = Vec::new();
        for source in &self.sources {
            crawl_into(&source.root, source.depth, &mut collected);
        }

        let discovered = collected.len();
        let catalog = Arc::new(Catalog::from_unsorted(collected));
        logging::info(&format!(
            "index rebuilt sources={} discovered={} unique={}",
            self.sources.len(),
            discovered,
            catalog.len(),
        ));

        {
            let mut guard = self
                .snapshot
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = catalog;
        }
        self.ready.store(true, Ordering::Release);
    }

    /// Starts the one-shot background build. The handle lets callers join
    /// at shutdown (or in tests) instead of polling the readiness flag.
    pub fn spawn_rebuild(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        thread::spawn(move || service.rebuild())
    }

    /// Substring search over the current snapshot, empty until the first
    /// build completes.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Entry> {
        if !self.is_ready() {
            return Vec::new();
        }
        search::search(&self.snapshot(), query, limit.min(search::MAX_RESULTS))
    }
}
