use super::dice::Roll;
use super::spot::Spot;
use crate::BLUFF_THREE_BET_FACTOR;
use crate::Chips;
use crate::FOUR_BET_MULTIPLIER;
use crate::LIMPER_INCREMENT_BBS;
use crate::OPEN_RAISE_BBS;
use crate::SHORT_SPR_PREFLOP;
use crate::THREE_BET_MULTIPLIER;
use crate::heuristic::Threshold;
use crate::heuristic::Tier;
use crate::profile::Effective;
use crate::table::Action;

/// Exploitative preflop play, keyed on how many raises hero faces.
pub fn preflop(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let choice = match (spot.facing(), spot.raises) {
        (true, r) if r >= 2 => versus_three_bet(spot, profile),
        (true, 1) => versus_raise(spot, profile),
        _ => unopened(spot, profile),
    };
    log::debug!("preflop {} {} -> {} ({})", spot.hole, spot.chen, choice.0, choice.1);
    choice
}

/// Premiums shove or 4-bet, strong hands call. Anything else folds when
/// the gap below a perfect hand, `1 - strength`, exceeds the player's
/// `1 - fold_to_three_bet`, which is the same as strength falling short
/// of `fold_to_three_bet`.
fn versus_three_bet(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let strength = spot.chen.strength();
    match spot.chen.tier() {
        Tier::Premium if spot.spr < SHORT_SPR_PREFLOP => (Action::AllIn(spot.stack), "premium, shallow vs 3-bet"),
        Tier::Premium => {
            let level = (spot.current_bet as f32 * FOUR_BET_MULTIPLIER) as Chips;
            (Action::Raise(spot.raise_to(level)), "premium 4-bet")
        }
        Tier::Strong => (Action::Call(spot.to_call), "strong, call the 3-bet"),
        _ if 1.0 - strength > 1.0 - profile.fold_to_three_bet => (Action::Fold, "fold to 3-bet"),
        _ => (Action::Call(spot.to_call), "sticky vs 3-bet"),
    }
}

fn versus_raise(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let strength = spot.chen.strength();
    let bar = Threshold::entry(spot.position, profile);
    let three_bet = (spot.current_bet as f32 * THREE_BET_MULTIPLIER) as Chips;
    let three_bet = Action::Raise(spot.raise_to(three_bet));
    match spot.chen.tier() {
        Tier::Premium if spot.dice.chance(Roll::ThreeBet, 0.5 + profile.aggression / 2.0) => {
            (three_bet, "premium 3-bet")
        }
        Tier::Premium => (Action::Call(spot.to_call), "premium flat"),
        Tier::Strong if spot.dice.chance(Roll::ThreeBet, profile.aggression / 2.0) => {
            (three_bet, "strong 3-bet")
        }
        Tier::Strong => (Action::Call(spot.to_call), "strong flat"),
        _ if strength >= bar => (Action::Call(spot.to_call), "playable flat"),
        _ if spot.position.is_late()
            && spot.dice.chance(Roll::Bluff, profile.bluff * BLUFF_THREE_BET_FACTOR) =>
        {
            (three_bet, "light 3-bet")
        }
        _ => (Action::Fold, "below range vs raise"),
    }
}

fn unopened(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let strength = spot.chen.strength();
    let bar = Threshold::entry(spot.position, profile);
    let open = (OPEN_RAISE_BBS + LIMPER_INCREMENT_BBS * spot.limpers as Chips) * spot.big_blind;
    let open = Action::Raise(spot.raise_to(open));
    let pass = match spot.facing() {
        true => Action::Fold,
        false => Action::Check,
    };
    match () {
        _ if strength >= bar => (open, "open for value"),
        _ if spot.position.is_late()
            && spot.limpers == 0
            && spot.dice.chance(Roll::Steal, profile.bluff + profile.steal_bonus) =>
        {
            (open, "steal")
        }
        _ => (pass, "below opening range"),
    }
}
