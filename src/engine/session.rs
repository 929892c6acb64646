use crate::equity::EquityCache;
use crate::equity::Simulator;
use crate::opponent::MemoryStore;
use crate::opponent::Registry;
use crate::opponent::StatsStore;
use crate::tilt::Ledger;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Mutable state shared by every decision in one game.
///
/// Holds the equity memo, opponent models and tilt ledger. Unrelated games
/// get their own sessions so nothing leaks between them, and dropping a
/// session discards all of it.
pub struct Session {
    cache: Arc<EquityCache>,
    registry: Registry,
    ledger: Ledger,
    decisions: AtomicU64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }
}

impl Session {
    pub fn new(store: Arc<dyn StatsStore>) -> Self {
        Self {
            cache: Arc::new(EquityCache::default()),
            registry: Registry::new(store),
            ledger: Ledger::default(),
            decisions: AtomicU64::new(0),
        }
    }
    pub fn cache(&self) -> &Arc<EquityCache> {
        &self.cache
    }
    pub fn simulator(&self) -> Simulator {
        Simulator::new(self.cache.clone())
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn store(&self) -> &Arc<dyn StatsStore> {
        self.registry.store()
    }
    /// Decisions made so far.
    pub fn decisions(&self) -> u64 {
        self.decisions.load(Ordering::Relaxed)
    }
    pub(crate) fn count(&self) -> u64 {
        self.decisions.fetch_add(1, Ordering::Relaxed) + 1
    }
    /// Start a new game with the same store.
    pub fn reset(&self) {
        self.cache.clear();
        self.registry.reset();
        self.ledger.reset();
        self.decisions.store(0, Ordering::Relaxed);
    }
}
