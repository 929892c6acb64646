use crate::ENTRY_BASE;
use crate::ENTRY_CEILING;
use crate::ENTRY_FLOOR;
use crate::ENTRY_TIGHTNESS_SLOPE;
use crate::Probability;
use crate::profile::Effective;
use crate::table::Position;

/// Normalised preflop strength needed to put chips in voluntarily.
pub struct Threshold;

impl Threshold {
    /// Position shifts the bar in proportion to how much the player cares
    /// about position; tightness shifts it around 0.5; late seats lower it
    /// by any steal bonus.
    pub fn entry(position: Position, profile: &Effective) -> Probability {
        let late = match position.is_late() {
            true => 1.0,
            false => 0.0,
        };
        let bar = ENTRY_BASE
            + Self::offset(position) * profile.position_awareness
            + (profile.tightness - 0.5) * ENTRY_TIGHTNESS_SLOPE
            - profile.steal_bonus * late;
        bar.clamp(ENTRY_FLOOR, ENTRY_CEILING)
    }
    fn offset(position: Position) -> f32 {
        match position {
            Position::Early => 0.10,
            Position::Middle => 0.04,
            Position::Cutoff => -0.04,
            Position::Button => -0.08,
            Position::SmallBlind => 0.02,
            Position::BigBlind => -0.02,
            Position::Unknown => 0.00,
        }
    }
}
