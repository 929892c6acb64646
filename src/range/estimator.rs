use super::action::PreflopAction;
use super::width::HandRange;
use crate::DEFAULT_RANGE_WIDTH;
use crate::Probability;
use crate::table::Position;

/// Starting-hand width from position and preflop action.
pub struct Estimator;

impl Estimator {
    /// A raise made while facing a raise is read as a 3-bet.
    pub fn estimate(position: Position, action: PreflopAction, facing_raise: bool) -> HandRange {
        let action = match (action, facing_raise) {
            (PreflopAction::Raise, true) => PreflopAction::ThreeBet,
            (a, _) => a,
        };
        HandRange::new(position, action, Self::width(position, action, facing_raise))
    }
    fn width(position: Position, action: PreflopAction, facing_raise: bool) -> Probability {
        match action {
            PreflopAction::Raise => Self::open(position),
            PreflopAction::Limp => 0.45,
            PreflopAction::Call => match position {
                Position::Button | Position::BigBlind => 0.22 * 1.3,
                _ => 0.22,
            },
            PreflopAction::ThreeBet => 0.07,
            PreflopAction::FourBet => 0.03,
            PreflopAction::AllIn if facing_raise => 0.05,
            PreflopAction::AllIn => 0.12,
        }
    }
    fn open(position: Position) -> Probability {
        match position {
            Position::Early => 0.12,
            Position::Middle => 0.18,
            Position::Cutoff => 0.27,
            Position::Button => 0.40,
            Position::SmallBlind => 0.35,
            Position::BigBlind => 0.30,
            Position::Unknown => DEFAULT_RANGE_WIDTH,
        }
    }
}
