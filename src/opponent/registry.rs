use super::model::OpponentModel;
use super::stats::HandSummary;
use super::store::MemoryStore;
use super::store::StatsStore;
use crate::MAX_OPPONENT_MODELS;
use crate::OPPONENT_STALE_AFTER;
use crate::OPPONENT_SWEEP_INTERVAL;
use crate::table::GameMode;
use crate::table::PlayerId;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

type Key = (PlayerId, GameMode);

struct Entry {
    model: OpponentModel,
    seen: AtomicU64,
}

/// Session-scoped opponent models.
///
/// Models are built lazily from the stats store on first lookup and then
/// updated in place as hands are observed. Every lookup ticks a logical
/// clock. Every `OPPONENT_SWEEP_INTERVAL` ticks, models idle for longer
/// than `OPPONENT_STALE_AFTER` ticks are dropped, then the least recently
/// seen go until the registry fits `MAX_OPPONENT_MODELS`.
pub struct Registry {
    store: Arc<dyn StatsStore>,
    models: RwLock<HashMap<Key, Entry>>,
    clock: AtomicU64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }
}

impl Registry {
    pub fn new(store: Arc<dyn StatsStore>) -> Self {
        Self {
            store,
            models: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
        }
    }
    pub fn store(&self) -> &Arc<dyn StatsStore> {
        &self.store
    }

    /// Current model of `player`, created from the store if unseen.
    pub fn lookup(&self, player: &PlayerId, mode: GameMode) -> OpponentModel {
        let now = self.tick();
        let key = (player.clone(), mode);
        if let Some(entry) = self
            .models
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            entry.seen.store(now, Ordering::Relaxed);
            return entry.model.clone();
        }
        let model = self.load(player, mode);
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let model = models
            .entry(key)
            .or_insert_with(|| Entry {
                model,
                seen: AtomicU64::new(now),
            })
            .model
            .clone();
        Self::shrink(&mut models, MAX_OPPONENT_MODELS);
        model
    }

    /// Fold one finished hand into `player`'s model.
    pub fn observe(&self, player: &PlayerId, mode: GameMode, hand: &HandSummary) -> OpponentModel {
        let now = self.tick();
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let entry = models.entry((player.clone(), mode)).or_insert_with(|| Entry {
            model: self.load(player, mode),
            seen: AtomicU64::new(now),
        });
        entry.model.observe(hand);
        entry.seen.store(now, Ordering::Relaxed);
        let model = entry.model.clone();
        Self::shrink(&mut models, MAX_OPPONENT_MODELS);
        model
    }

    pub fn len(&self) -> usize {
        self.models.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Forget every model, as at the start of a new game.
    pub fn reset(&self) {
        self.models.write().unwrap_or_else(PoisonError::into_inner).clear();
        self.clock.store(0, Ordering::Relaxed);
    }

    fn load(&self, player: &PlayerId, mode: GameMode) -> OpponentModel {
        let stats = self.store.lookup(player, mode).unwrap_or_default();
        let model = OpponentModel::new(player.clone(), mode, stats);
        log::debug!("loaded {} from {} hands", model, stats.hands);
        model
    }
    fn tick(&self) -> u64 {
        let now = self.clock.fetch_add(1, Ordering::Relaxed) + 1;
        if now % OPPONENT_SWEEP_INTERVAL == 0 {
            self.sweep(now);
        }
        now
    }
    fn sweep(&self, now: u64) {
        let mut models = self.models.write().unwrap_or_else(PoisonError::into_inner);
        let before = models.len();
        models.retain(|_, e| now.saturating_sub(e.seen.load(Ordering::Relaxed)) <= OPPONENT_STALE_AFTER);
        Self::shrink(&mut models, MAX_OPPONENT_MODELS);
        if models.len() < before {
            log::debug!("opponent sweep dropped {} models", before - models.len());
        }
    }
    fn shrink(models: &mut HashMap<Key, Entry>, capacity: usize) {
        while models.len() > capacity {
            let oldest = models
                .iter()
                .min_by_key(|(_, e)| e.seen.load(Ordering::Relaxed))
                .map(|(k, _)| k.clone());
            match oldest {
                Some(key) => models.remove(&key),
                None => break,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::Stats;
    use crate::opponent::Style;

    fn fishy() -> HandSummary {
        HandSummary {
            vpip: true,
            passive: 2,
            ..HandSummary::default()
        }
    }

    #[test]
    fn unseen_players_are_unknown() {
        let registry = Registry::default();
        let model = registry.lookup(&PlayerId::from("ghost"), GameMode::Cash);
        assert_eq!(model.style, Style::Unknown);
        assert_eq!(model.confidence, 0.0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn seeds_from_store() {
        let player = PlayerId::from("v");
        let stats = Stats {
            hands: 100,
            vpip: 50,
            pfr: 5,
            aggressive: 10,
            passive: 40,
            ..Stats::default()
        };
        let store = MemoryStore::from(vec![(player.clone(), GameMode::Cash, stats)]);
        let registry = Registry::new(Arc::new(store));
        assert_eq!(registry.lookup(&player, GameMode::Cash).style, Style::Fish);
        assert_eq!(registry.lookup(&player, GameMode::Tournament).style, Style::Unknown);
    }

    #[test]
    fn observations_accumulate() {
        let registry = Registry::default();
        let player = PlayerId::from("v");
        for _ in 0..40 {
            registry.observe(&player, GameMode::Cash, &fishy());
        }
        let model = registry.lookup(&player, GameMode::Cash);
        assert_eq!(model.stats.hands, 40);
        assert!(model.is_reliable());
    }

    #[test]
    fn capped_at_capacity() {
        let registry = Registry::default();
        for i in 0..(MAX_OPPONENT_MODELS + 10) {
            registry.lookup(&PlayerId::from(format!("p{}", i)), GameMode::Cash);
        }
        assert_eq!(registry.len(), MAX_OPPONENT_MODELS);
        // the most recent survive
        let last = PlayerId::from(format!("p{}", MAX_OPPONENT_MODELS + 9));
        registry.observe(&last, GameMode::Cash, &fishy());
        assert_eq!(registry.lookup(&last, GameMode::Cash).stats.hands, 1);
    }

    #[test]
    fn stale_models_are_swept() {
        let registry = Registry::default();
        let old = PlayerId::from("old");
        let fresh = PlayerId::from("fresh");
        registry.observe(&old, GameMode::Cash, &fishy());
        for _ in 0..(OPPONENT_STALE_AFTER + OPPONENT_SWEEP_INTERVAL + 1) {
            registry.lookup(&fresh, GameMode::Cash);
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup(&old, GameMode::Cash).stats.hands, 0);
    }

    #[test]
    fn reset_forgets() {
        let registry = Registry::default();
        registry.observe(&PlayerId::from("v"), GameMode::Cash, &fishy());
        registry.reset();
        assert!(registry.is_empty());
    }
}
