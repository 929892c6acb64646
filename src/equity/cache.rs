use crate::EQUITY_CACHE_CAPACITY;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Exact identity of an equity query.
///
/// Card sets are stored as bitsets, so the order in which hole or board
/// cards were listed never changes the key.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Key {
    hole: u64,
    board: u64,
    opponents: usize,
}

impl Key {
    pub fn new(hole: Hole, board: Board, opponents: usize) -> Self {
        Self {
            hole: u64::from(Hand::from(hole)),
            board: u64::from(Hand::from(board)),
            opponents,
        }
    }
    /// Seed shared by every rollout of this query.
    pub fn seed(&self) -> u64 {
        crate::scramble(self.hole ^ crate::scramble(self.board ^ crate::scramble(self.opponents as u64)))
    }
}

#[derive(Debug, Default)]
struct Memo {
    values: HashMap<Key, Probability>,
    order: VecDeque<Key>,
}

/// Session-scoped equity memo.
///
/// Lookups share the read lock. Inserts take the write lock and, once the
/// memo holds more than its capacity, drop the older half of entries in
/// insertion order. This is bulk FIFO, not LRU: a hit does not refresh an
/// entry's age.
#[derive(Debug)]
pub struct EquityCache {
    capacity: usize,
    memo: RwLock<Memo>,
}

impl Default for EquityCache {
    fn default() -> Self {
        Self::with_capacity(EQUITY_CACHE_CAPACITY)
    }
}

impl EquityCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            memo: RwLock::new(Memo::default()),
        }
    }
    pub fn get(&self, key: &Key) -> Option<Probability> {
        let hit = self
            .memo
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values
            .get(key)
            .copied();
        if hit.is_some() {
            log::trace!("equity hit {:?}", key);
        }
        hit
    }
    pub fn insert(&self, key: Key, equity: Probability) {
        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        if memo.values.insert(key, equity).is_none() {
            memo.order.push_back(key);
        }
        if memo.values.len() > self.capacity {
            let stale = memo.order.len() / 2;
            let Memo { values, order } = &mut *memo;
            for key in order.drain(..stale) {
                values.remove(&key);
            }
            log::debug!("equity cache swept {} entries, {} remain", stale, values.len());
        }
    }
    pub fn len(&self) -> usize {
        self.memo.read().unwrap_or_else(PoisonError::into_inner).values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn clear(&self) {
        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        memo.values.clear();
        memo.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn key(i: u8) -> Key {
        let hole = Hole::from((Card::from(i % 52), Card::from((i + 1) % 52)));
        Key::new(hole, Board::empty(), 1 + i as usize / 52)
    }

    #[test]
    fn key_ignores_card_order() {
        let a = Key::new(
            Hole::try_from("As Kd").unwrap(),
            Board::try_from("Qh Jc 2s").unwrap(),
            2,
        );
        let b = Key::new(
            Hole::try_from("Kd As").unwrap(),
            Board::try_from("2s Qh Jc").unwrap(),
            2,
        );
        assert_eq!(a, b);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn opponents_are_part_of_the_key() {
        let hole = Hole::try_from("As Kd").unwrap();
        assert_ne!(Key::new(hole, Board::empty(), 1), Key::new(hole, Board::empty(), 2));
    }

    #[test]
    fn sweeps_oldest_half() {
        let cache = EquityCache::with_capacity(8);
        for i in 0..8 {
            cache.insert(key(i), i as f32 / 10.0);
        }
        assert_eq!(cache.len(), 8);
        cache.insert(key(8), 0.8);
        assert_eq!(cache.len(), 5);
        for i in 0..4 {
            assert_eq!(cache.get(&key(i)), None);
        }
        for i in 4..9 {
            assert_eq!(cache.get(&key(i)), Some(i as f32 / 10.0));
        }
    }

    #[test]
    fn hits_do_not_refresh_age() {
        let cache = EquityCache::with_capacity(4);
        for i in 0..4 {
            cache.insert(key(i), 0.5);
        }
        assert!(cache.get(&key(0)).is_some());
        cache.insert(key(4), 0.5);
        assert_eq!(cache.get(&key(0)), None);
    }

    #[test]
    fn reinsert_keeps_one_entry() {
        let cache = EquityCache::default();
        cache.insert(key(0), 0.1);
        cache.insert(key(0), 0.2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key(0)), Some(0.2));
    }
}
