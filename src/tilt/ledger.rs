use super::state::Tilt;
use super::trigger::Trigger;
use crate::Probability;
use crate::table::PlayerId;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;

/// Tilt of every player seen in a session.
#[derive(Debug, Default)]
pub struct Ledger {
    tilts: RwLock<HashMap<PlayerId, Tilt>>,
}

impl Ledger {
    /// Current tilt, calm for players never triggered.
    pub fn tilt(&self, player: &PlayerId) -> Tilt {
        self.tilts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(player)
            .copied()
            .unwrap_or_default()
    }
    pub fn trigger(&self, player: &PlayerId, event: Trigger, sensitivity: Probability) -> Tilt {
        let mut tilts = self.tilts.write().unwrap_or_else(PoisonError::into_inner);
        let tilt = tilts.entry(player.clone()).or_default();
        tilt.trigger(event, sensitivity);
        log::debug!("{:<12} {:<14} -> {}", player, format!("{:?}", event), tilt);
        *tilt
    }
    /// Let every tracked player cool off after `hands` hands.
    pub fn recover(&self, hands: u32) {
        self.tilts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .values_mut()
            .for_each(|t| t.recover(hands));
    }
    pub fn len(&self) -> usize {
        self.tilts.read().unwrap_or_else(PoisonError::into_inner).len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn reset(&self) {
        self.tilts.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
