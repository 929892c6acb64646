use super::dice::Roll;
use super::spot::Spot;
use crate::CALLING_STATION;
use crate::IMPLIED_DEEP;
use crate::IMPLIED_STRONG_DRAW;
use crate::IMPLIED_WEAK_DRAW;
use crate::MONSTER_CATEGORY;
use crate::PURE_BLUFF_FACTOR;
use crate::Probability;
use crate::RAISE_MARGIN;
use crate::SHORT_SPR_POSTFLOP;
use crate::STRONG_CATEGORY;
use crate::STRONG_EQUITY;
use crate::cards::Street;
use crate::profile::Effective;
use crate::table::Action;
use crate::texture::Straight;

/// Exploitative flop, turn and river play.
pub fn postflop(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let choice = match spot.facing() {
        false => unbet(spot, profile),
        true => versus_bet(spot, profile),
    };
    log::debug!(
        "{} {} {} eq {:.3} -> {} ({})",
        spot.street,
        spot.hole,
        spot.board,
        spot.equity,
        choice.0,
        choice.1
    );
    choice
}

fn strong(spot: &Spot) -> bool {
    spot.category >= STRONG_CATEGORY || spot.equity >= STRONG_EQUITY
}

/// Equity credited for later streets when stacks are deep or draws are live.
pub fn implied(spot: &Spot, profile: &Effective) -> Probability {
    let deep = match spot.stack_in_bbs() >= profile.deep_stack_bb {
        true => IMPLIED_DEEP,
        false => 0.0,
    };
    let draw = match (spot.street, spot.draws.flush, spot.draws.straight) {
        (Street::Rive, _, _) => 0.0,
        (_, true, _) | (_, _, Straight::OpenEnded) => IMPLIED_STRONG_DRAW,
        (_, _, Straight::Gutshot) => IMPLIED_WEAK_DRAW,
        _ => 0.0,
    };
    deep + draw
}

fn unbet(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let cbet = match spot.street {
        Street::Flop => profile.cbet_flop,
        Street::Turn => profile.cbet_turn,
        _ => 0.0,
    };
    let cbet = cbet * (0.5 + 0.5 * spot.texture.dryness());
    let value = match spot.category >= MONSTER_CATEGORY {
        true => 0.75,
        false => 0.60,
    };
    match () {
        _ if strong(spot) && spot.dice.chance(Roll::Value, profile.aggression) => {
            (Action::Bet(spot.bet(value * profile.value_sizing)), "value bet")
        }
        _ if strong(spot) => (Action::Check, "slow play"),
        _ if spot.aggressor && spot.dice.chance(Roll::ContinuationBet, cbet) => {
            (Action::Bet(spot.bet(0.5)), "continuation bet")
        }
        _ if spot.draws.is_combo() && spot.dice.chance(Roll::SemiBluff, profile.aggression) => {
            (Action::Bet(spot.bet(0.66)), "combo draw semi-bluff")
        }
        _ if spot.draws.is_live()
            && spot.dice.chance(Roll::SemiBluff, profile.aggression * 0.5 + profile.bluff * 0.5) =>
        {
            (Action::Bet(spot.bet(0.5)), "draw semi-bluff")
        }
        _ if spot.position.is_late()
            && spot.in_position
            && spot.dice.chance(Roll::Stab, profile.bluff * PURE_BLUFF_FACTOR) =>
        {
            (Action::Bet(spot.bet(0.5)), "stab in position")
        }
        _ => (Action::Check, "check"),
    }
}

fn versus_bet(spot: &Spot, profile: &Effective) -> (Action, &'static str) {
    let credited = spot.equity + implied(spot, profile);
    match () {
        _ if spot.category >= MONSTER_CATEGORY
            && (spot.stack <= 2 * spot.to_call || spot.spr < SHORT_SPR_POSTFLOP) =>
        {
            (Action::AllIn(spot.stack), "monster, stacks shallow")
        }
        _ if spot.category >= MONSTER_CATEGORY
            && spot.dice.chance(Roll::Raise, profile.aggression.max(0.5)) =>
        {
            (Action::Raise(spot.raise_by(0.75 * profile.value_sizing)), "monster raise")
        }
        _ if spot.category >= MONSTER_CATEGORY => (Action::Call(spot.to_call), "monster trap"),
        _ if profile.call_down > CALLING_STATION && (spot.category >= 1 || spot.draws.is_live()) => {
            (Action::Call(spot.to_call), "calling down")
        }
        _ if strong(spot) && spot.dice.chance(Roll::Raise, profile.aggression) => {
            (Action::Raise(spot.raise_by(0.75 * profile.value_sizing)), "strong raise")
        }
        _ if strong(spot) => (Action::Call(spot.to_call), "strong call"),
        _ if credited >= spot.pot_odds + RAISE_MARGIN
            && spot.dice.chance(Roll::Raise, profile.aggression * 0.5) =>
        {
            (Action::Raise(spot.raise_by(0.66)), "raise with equity edge")
        }
        _ if credited >= spot.pot_odds => (Action::Call(spot.to_call), "priced in"),
        _ => (Action::Fold, "not enough equity"),
    }
}
