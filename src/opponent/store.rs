use super::stats::Stats;
use crate::table::GameMode;
use crate::table::PlayerId;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Historical statistics, keyed by player and game mode.
pub trait StatsStore: Send + Sync {
    fn lookup(&self, player: &PlayerId, mode: GameMode) -> Option<Stats>;
}

/// Store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    stats: RwLock<HashMap<(PlayerId, GameMode), Stats>>,
}

impl MemoryStore {
    pub fn insert(&self, player: PlayerId, mode: GameMode, stats: Stats) {
        self.stats
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((player, mode), stats);
    }
}

impl StatsStore for MemoryStore {
    fn lookup(&self, player: &PlayerId, mode: GameMode) -> Option<Stats> {
        self.stats
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(player.clone(), mode))
            .copied()
    }
}

impl From<Vec<(PlayerId, GameMode, Stats)>> for MemoryStore {
    fn from(rows: Vec<(PlayerId, GameMode, Stats)>) -> Self {
        Self {
            stats: RwLock::new(rows.into_iter().map(|(p, m, s)| ((p, m), s)).collect()),
        }
    }
}
