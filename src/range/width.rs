use super::action::PostflopAction;
use super::action::PreflopAction;
use crate::Probability;
use crate::RANGE_EQUITY_PENALTY;
use crate::cards::Street;
use crate::table::Position;
use crate::texture::Texture;

/// An opponent's holdings as the share of starting hands they could have.
///
/// Width only shrinks as actions are observed. A fold empties the range.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct HandRange {
    pub position: Position,
    pub origin: PreflopAction,
    pub street: Street,
    width: Probability,
    description: String,
}

impl HandRange {
    pub fn new(position: Position, origin: PreflopAction, width: Probability) -> Self {
        let width = crate::unit(width);
        Self {
            position,
            origin,
            street: Street::Pref,
            width,
            description: format!("{} {} top {:.0}%", position, origin, width * 100.0),
        }
    }
    pub fn width(&self) -> Probability {
        self.width
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    /// Normalised preflop strength of the weakest hand still in range.
    pub fn strength_floor(&self) -> Probability {
        1.0 - self.width
    }
    /// Shrink after a postflop action. The street advances with every call.
    pub fn narrow(&mut self, action: PostflopAction, texture: &Texture) {
        let factor = match action {
            PostflopAction::Check => 0.95,
            PostflopAction::Call if texture.is_wet() => 0.90,
            PostflopAction::Call => 0.85,
            PostflopAction::Bet => 0.70,
            PostflopAction::Raise => 0.50,
            PostflopAction::AllIn => 0.35,
            PostflopAction::Fold => 0.00,
        };
        self.width = crate::unit(self.width * factor);
        self.street = self.street.next();
        self.description = match action {
            PostflopAction::Fold => format!("{} folded", self.position),
            _ => format!("{}, {} on {} top {:.0}%", self.description, action, self.street, self.width * 100.0),
        };
    }
    /// Scale hero equity against random hands down toward what it is
    /// against this range. Full width leaves it alone.
    pub fn discount(&self, equity: Probability) -> Probability {
        crate::unit(equity * (1.0 - RANGE_EQUITY_PENALTY * (1.0 - self.width)))
    }
}

impl std::fmt::Display for HandRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
