use super::sizing::Sizing;
use super::spot::Spot;
use crate::Chips;
use crate::FOUR_BET_MULTIPLIER;
use crate::GTO_BLUFF_IP_PCT;
use crate::GTO_BLUFF_OOP_PCT;
use crate::GTO_BLUFF_THREE_BET_PCT;
use crate::GTO_CONTINUE_THREE_BET;
use crate::GTO_FOUR_BET;
use crate::GTO_MIX_BAND;
use crate::GTO_MIX_PCT;
use crate::GTO_OPEN_BBS;
use crate::GTO_RAISE_CATEGORY;
use crate::GTO_RAISE_PCT;
use crate::GTO_SEMI_BLUFF_PCT;
use crate::GTO_THREE_BET;
use crate::GTO_THREE_BET_IP;
use crate::GTO_THREE_BET_OOP;
use crate::MDF_EPSILON;
use crate::MONSTER_CATEGORY;
use crate::Probability;
use crate::SHORT_SPR_POSTFLOP;
use crate::SHORT_SPR_PREFLOP;
use crate::STRONG_CATEGORY;
use crate::STRONG_EQUITY;
use crate::cards::Street;
use crate::heuristic::Tier;
use crate::profile::Effective;
use crate::table::Action;
use crate::table::Position;

/// Share of a defending range that must continue so a bet of `bet` into
/// `pot` is not automatically profitable.
pub fn mdf(pot: Chips, bet: Chips) -> Probability {
    match pot + bet {
        0 => 1.0,
        total => crate::unit(pot as f32 / total as f32),
    }
}

/// Normalised strength needed to open from each seat.
pub fn opening(position: Position) -> Probability {
    match position {
        Position::Early => 0.49,
        Position::Middle => 0.44,
        Position::Cutoff => 0.37,
        Position::Button => 0.30,
        Position::SmallBlind => 0.35,
        Position::BigBlind => 0.40,
        Position::Unknown => 0.44,
    }
}

/// Threshold-and-mix play.
///
/// Clear of a threshold the action is fixed. Within `GTO_MIX_BAND` below
/// it, the card hash picks between the two neighbouring actions. Profile
/// scalars only size bets; they never move the thresholds.
pub fn gto(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let choice = match spot.street {
        Street::Pref => preflop(spot),
        _ => postflop(spot, profile),
    };
    log::debug!(
        "gto {} {} mix {} -> {} ({})",
        spot.street,
        spot.hole,
        spot.mix.bucket(),
        choice.0,
        choice.1
    );
    choice
}

/// At or over `bar`, or in the band below it and on the mixing side.
fn reaches(spot: &Spot, strength: Probability, bar: Probability) -> bool {
    strength >= bar || (strength >= bar - GTO_MIX_BAND && spot.mix.take(GTO_MIX_PCT))
}

fn preflop(spot: &Spot) -> (Action, &'static str) {
    let strength = spot.chen.strength();
    let bar = opening(spot.position);
    let pass = match spot.facing() {
        true => Action::Fold,
        false => Action::Check,
    };
    match (spot.facing(), spot.raises) {
        (true, r) if r >= 2 => match () {
            _ if spot.chen.tier() == Tier::Premium && spot.spr < SHORT_SPR_PREFLOP => {
                (Action::AllIn(spot.stack), "premium, shallow vs 3-bet")
            }
            _ if reaches(spot, strength, GTO_FOUR_BET) && spot.spr < SHORT_SPR_PREFLOP => {
                (Action::AllIn(spot.stack), "shove over 3-bet")
            }
            _ if reaches(spot, strength, GTO_FOUR_BET) => {
                let level = (spot.current_bet as f32 * FOUR_BET_MULTIPLIER) as Chips;
                (Action::Raise(spot.raise_to(level)), "4-bet")
            }
            _ if strength >= GTO_CONTINUE_THREE_BET => (Action::Call(spot.to_call), "defend vs 3-bet"),
            _ => (pass, "outside 3-bet defense"),
        },
        (true, 1) => {
            let multiplier = match spot.in_position {
                true => GTO_THREE_BET_IP,
                false => GTO_THREE_BET_OOP,
            };
            let level = (spot.current_bet as f32 * multiplier) as Chips;
            let three_bet = Action::Raise(spot.raise_to(level));
            match () {
                _ if reaches(spot, strength, GTO_THREE_BET) => (three_bet, "3-bet"),
                _ if strength >= bar => (Action::Call(spot.to_call), "flat in range"),
                _ if spot.position.is_late()
                    && strength >= bar - 2.0 * GTO_MIX_BAND
                    && spot.mix.take(GTO_BLUFF_THREE_BET_PCT) =>
                {
                    (three_bet, "bluff 3-bet")
                }
                _ => (pass, "outside flatting range"),
            }
        }
        _ => {
            let level = (GTO_OPEN_BBS * spot.big_blind as f32) as Chips + spot.limpers as Chips * spot.big_blind;
            match reaches(spot, strength, bar) {
                true => (Action::Raise(spot.raise_to(level)), "open"),
                false => (pass, "outside opening range"),
            }
        }
    }
}

fn postflop(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let wetness = spot.texture.wetness();
    let sizing = Sizing::choose(spot.category, wetness, spot.in_position, spot.spr);
    let value = spot.category >= STRONG_CATEGORY || spot.equity >= STRONG_EQUITY;
    match spot.facing() {
        false => {
            let bet = Action::Bet(sizing.chips(spot.pot, spot.stack));
            let bluff = match spot.in_position {
                true => GTO_BLUFF_IP_PCT,
                false => GTO_BLUFF_OOP_PCT,
            };
            match () {
                _ if value => (Action::Bet(scaled(sizing, spot, profile)), "value bet"),
                _ if spot.draws.is_live() && spot.mix.take(GTO_SEMI_BLUFF_PCT) => (bet, "semi-bluff"),
                _ if !spot.draws.is_live() && spot.mix.take(bluff) => {
                    (Action::Bet(Sizing::Third.chips(spot.pot, spot.stack)), "balancing bluff")
                }
                _ => (Action::Check, "check range"),
            }
        }
        true => {
            // equity stands in for the hand's place in range. With the bet
            // already in the pot, 1 - mdf is the price of a call.
            let defend = mdf(spot.pot, spot.to_call);
            let floor = (1.0 - defend).min(defend);
            match () {
                _ if spot.category >= MONSTER_CATEGORY
                    && (spot.stack <= 2 * spot.to_call || spot.spr < SHORT_SPR_POSTFLOP) =>
                {
                    (Action::AllIn(spot.stack), "monster, stacks shallow")
                }
                _ if spot.equity + MDF_EPSILON < floor => (Action::Fold, "below defense floor"),
                _ if spot.category >= GTO_RAISE_CATEGORY && spot.spr < SHORT_SPR_POSTFLOP => {
                    (Action::AllIn(spot.stack), "raise all-in for value")
                }
                _ if spot.category >= GTO_RAISE_CATEGORY && spot.mix.take(GTO_RAISE_PCT) => {
                    (Action::Raise(spot.to_call + sizing.chips(spot.pot + spot.to_call, spot.stack)), "raise for value")
                }
                _ => (Action::Call(spot.to_call), "defend"),
            }
        }
    }
}

/// Value sizes stretch with the profile's sizing multiplier.
fn scaled(sizing: Sizing, spot: &Spot, profile: &Effective) -> Chips {
    match sizing {
        Sizing::AllIn => spot.stack,
        s => ((s.chips(spot.pot, spot.stack) as f32 * profile.value_sizing) as Chips).min(spot.stack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use crate::engine::Dice;
    use crate::engine::Mix;
    use crate::heuristic::Chen;
    use crate::profile::Archetype;
    use crate::profile::Profile;
    use crate::texture::Draws;
    use crate::texture::Texture;

    fn spot(hole: &str, board: &str, to_call: Chips, pot: Chips, raises: usize) -> Spot {
        let hole = Hole::try_from(hole).unwrap();
        let board = match board {
            "" => Board::empty(),
            b => Board::try_from(b).unwrap(),
        };
        let dealt = Hand::or(Hand::from(hole), Hand::from(board));
        Spot {
            street: board.street(),
            hole,
            board,
            position: Position::Button,
            in_position: true,
            aggressor: false,
            pot,
            to_call,
            current_bet: to_call,
            stack: 5000,
            big_blind: 10,
            raises,
            limpers: 0,
            spr: 5000.0 / pot as f32,
            pot_odds: to_call as f32 / (pot + to_call) as f32,
            equity: 0.5,
            chen: Chen::from(hole),
            category: match board.is_empty() {
                true => hole.paired() as u8,
                false => Strength::from(dealt).category(),
            },
            draws: Draws::from((hole, board)),
            texture: Texture::from(board),
            range: None,
            dice: Dice::new(3),
            mix: Mix::from(dealt),
        }
    }
    fn shark() -> Effective {
        Effective::from(&Profile::from(Archetype::Shark))
    }

    #[test]
    fn minimum_defense_frequency() {
        assert!((mdf(100, 50) - 100.0 / 150.0).abs() < 1e-6);
        assert_eq!(mdf(0, 0), 1.0);
    }

    #[test]
    fn never_folds_at_mdf() {
        let mut s = spot("9c 4d", "Ah Kd 2s", 50, 100, 0);
        s.equity = mdf(100, 50);
        assert_ne!(gto(&s, &shark()).0, Action::Fold);
    }

    #[test]
    fn never_folds_at_mdf_facing_overbet() {
        let mut s = spot("9c 4d", "Ah Kd 2s", 300, 100, 0);
        s.equity = mdf(100, 300);
        assert_ne!(gto(&s, &shark()).0, Action::Fold);
    }

    #[test]
    fn folds_well_below_price() {
        let mut s = spot("9c 4d", "Ah Kd 2s", 50, 100, 0);
        s.equity = 0.1;
        assert_eq!(gto(&s, &shark()).0, Action::Fold);
    }

    #[test]
    fn aces_four_bet() {
        let s = spot("As Ah", "", 300, 450, 2);
        assert_eq!(gto(&s, &shark()).0, Action::Raise(660));
    }

    #[test]
    fn premium_pairs_shove_shallow_three_bets() {
        for hole in ["9s 9h", "Ts Th", "Ks Kh"] {
            let mut s = spot(hole, "", 200, 450, 2);
            s.stack = 800;
            s.spr = 800.0 / 450.0;
            assert_eq!(gto(&s, &shark()).0, Action::AllIn(800), "{}", hole);
        }
    }

    #[test]
    fn shallow_monster_shoves_below_the_floor() {
        let mut s = spot("3h 2c", "Ah Kh 9h 5h 7c", 300, 900, 0);
        s.stack = 550;
        s.spr = 550.0 / 900.0;
        s.equity = 0.125;
        assert_eq!(s.category, MONSTER_CATEGORY);
        assert_eq!(gto(&s, &shark()).0, Action::AllIn(550));
    }

    #[test]
    fn junk_folds_unopened_from_early() {
        let mut s = spot("7c 2d", "", 10, 15, 0);
        s.position = Position::Early;
        assert_eq!(gto(&s, &shark()).0, Action::Fold);
    }

    #[test]
    fn mixing_is_reproducible() {
        let s = spot("Td 9d", "", 30, 45, 1);
        assert_eq!(gto(&s, &shark()), gto(&s, &shark()));
    }

    #[test]
    fn opens_button_to_two_and_a_half() {
        let s = spot("Ad Jh", "", 0, 15, 0);
        assert_eq!(gto(&s, &shark()).0, Action::Raise(25));
    }

    #[test]
    fn value_bets_made_hands() {
        let s = spot("Ac Kd", "Ah Kh 2s", 0, 200, 0);
        assert!(matches!(gto(&s, &shark()).0, Action::Bet(_)));
    }
}
