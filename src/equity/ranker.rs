use crate::cards::Evaluator;
use crate::cards::Hand;
use crate::cards::Strength;

/// Seven-card comparator used by rollouts.
///
/// Higher strength wins, equal strength splits.
pub trait Ranker: Send + Sync {
    fn strength(&self, hand: Hand) -> Strength;
}

/// Ranks hands with the in-crate [`Evaluator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Standard;

impl Ranker for Standard {
    fn strength(&self, hand: Hand) -> Strength {
        Strength::from(Evaluator::from(hand))
    }
}
