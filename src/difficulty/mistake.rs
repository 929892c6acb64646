use super::tier::Difficulty;
use crate::Probability;
use crate::table::Action;
use crate::table::Legal;

/// Systematic errors injected into weaker players' decisions.
///
/// A mistake is never random noise: it is the passive or timid twin of the
/// chosen action. Folds become calls, calls become folds, bets and raises
/// lose their aggression. Checks and shoves are left alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mistake(Probability);

impl From<Difficulty> for Mistake {
    fn from(difficulty: Difficulty) -> Self {
        Self(difficulty.mistake_rate())
    }
}

impl Mistake {
    pub fn rate(&self) -> Probability {
        self.0
    }
    /// Swap `action` for its mistaken twin when `roll` falls under the rate.
    /// The result is always legal.
    pub fn inject(&self, action: Action, legal: &Legal, roll: Probability) -> Action {
        if roll >= self.0 {
            return legal.clamp(action);
        }
        let swapped = match action {
            Action::Fold => Action::Call(legal.to_call()),
            Action::Raise(_) => Action::Call(legal.to_call()),
            Action::Bet(_) => Action::Check,
            Action::Call(_) => Action::Fold,
            Action::Check | Action::AllIn(_) => action,
        };
        if swapped != action {
            log::debug!("mistake: {} -> {}", action, swapped);
        }
        legal.clamp(swapped)
    }
}
