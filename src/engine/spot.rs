use super::dice::Dice;
use super::dice::Mix;
use crate::Chips;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use crate::cards::Strength;
use crate::heuristic::Chen;
use crate::range::HandRange;
use crate::table::Position;
use crate::table::TableSnapshot;
use crate::texture::Draws;
use crate::texture::Texture;

/// Everything a decision procedure reads, computed once per decision.
///
/// Chip amounts follow the snapshot: `pot` includes every bet already in,
/// `to_call` is what hero still owes.
#[derive(Debug, Clone)]
pub struct Spot {
    pub street: Street,
    pub hole: Hole,
    pub board: Board,
    pub position: Position,
    pub in_position: bool,
    pub aggressor: bool,
    pub pot: Chips,
    pub to_call: Chips,
    pub current_bet: Chips,
    pub stack: Chips,
    pub big_blind: Chips,
    pub raises: usize,
    pub limpers: usize,
    pub spr: f32,
    pub pot_odds: Probability,
    pub equity: Probability,
    pub chen: Chen,
    pub category: u8,
    pub draws: Draws,
    pub texture: Texture,
    pub range: Option<HandRange>,
    pub dice: Dice,
    pub mix: Mix,
}

impl Spot {
    /// `equity` is already discounted for the villain's range, if any.
    pub fn new(
        table: &TableSnapshot,
        hole: Hole,
        equity: Probability,
        texture: Texture,
        range: Option<HandRange>,
    ) -> Self {
        let dealt = Hand::or(Hand::from(hole), Hand::from(table.board));
        let category = match table.board.is_empty() {
            true => hole.paired() as u8,
            false => Strength::from(dealt).category(),
        };
        let seed = crate::scramble(
            u64::from(dealt)
                ^ crate::scramble(
                    (table.street as u64) | (table.pot as u64) << 8 | (table.actor as u64) << 48,
                ),
        );
        Self {
            street: table.street,
            hole,
            board: table.board,
            position: table.position(),
            in_position: table.in_position(),
            aggressor: table.is_aggressor(),
            pot: table.pot,
            to_call: table.to_call(),
            current_bet: table.current_bet,
            stack: table.stack(),
            big_blind: table.big_blind,
            raises: table.raises,
            limpers: table.limpers,
            spr: table.spr(),
            pot_odds: table.pot_odds(),
            equity: crate::unit(equity),
            chen: Chen::from(hole),
            category,
            draws: Draws::from((hole, table.board)),
            texture,
            range,
            dice: Dice::new(seed),
            mix: Mix::from(dealt),
        }
    }
    pub fn facing(&self) -> bool {
        self.to_call > 0
    }
    /// Chips hero already has in this street.
    pub fn committed(&self) -> Chips {
        self.current_bet - self.to_call
    }
    /// Chips to add so hero's street total reaches `level`.
    pub fn raise_to(&self, level: Chips) -> Chips {
        (level - self.committed()).max(0)
    }
    /// Chips to add for a raise of `fraction` of the pot after calling.
    pub fn raise_by(&self, fraction: f32) -> Chips {
        self.to_call + ((self.pot + self.to_call) as f32 * fraction) as Chips
    }
    /// Chips for a bet of `fraction` of the pot.
    pub fn bet(&self, fraction: f32) -> Chips {
        ((self.pot as f32 * fraction) as Chips).max(self.big_blind)
    }
    pub fn stack_in_bbs(&self) -> f32 {
        self.stack as f32 / self.big_blind.max(1) as f32
    }
}
