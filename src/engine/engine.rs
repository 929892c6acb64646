use super::decision::Decision;
use super::dice::Roll;
use super::explain::Explanation;
use super::gto::gto;
use super::gto::mdf;
use super::postflop::postflop;
use super::preflop::preflop;
use super::session::Session;
use super::spot::Spot;
use crate::cards::Street;
use crate::difficulty::Difficulty;
use crate::difficulty::Mistake;
use crate::icm::Posture;
use crate::icm::Situation;
use crate::profile::Effective;
use crate::profile::Profile;
use crate::range::Estimator;
use crate::range::HandRange;
use crate::range::PostflopAction;
use crate::range::PreflopAction;
use crate::table::Legal;
use crate::table::TableSnapshot;
use crate::texture::Texture;

/// Picks one action for the player to act.
///
/// Stateless apart from its difficulty tier. Everything that persists
/// between decisions lives in the [`Session`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    difficulty: Difficulty,
}

impl From<Difficulty> for Engine {
    fn from(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }
}

impl Engine {
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Validate, build the effective profile and the spot, run a procedure,
    /// then let the difficulty tier inject its mistakes.
    pub fn decide(&self, session: &Session, profile: &Profile, table: &TableSnapshot) -> anyhow::Result<Decision> {
        table.validate()?;
        let n = session.count();
        let legal = Legal::from(table);
        let effective = self.effective(session, profile, table);
        let spot = self.spot(session, table)?;
        let features = self.difficulty.features();
        let (procedure, (proposal, reason)) = match (profile.gto && features.gto, spot.street) {
            (true, _) => ("gto", gto(&spot, &effective)),
            (false, Street::Pref) => ("preflop", preflop(&spot, &effective)),
            (false, _) => ("postflop", postflop(&spot, &effective)),
        };
        let action = Mistake::from(self.difficulty).inject(proposal, &legal, spot.dice.roll(Roll::Mistake));
        log::debug!(
            "#{} {} {} {} {} -> {}",
            n,
            profile.name,
            self.difficulty,
            procedure,
            reason,
            action
        );
        Ok(Decision {
            action,
            explanation: self.explain(&spot, &effective, procedure, reason),
        })
    }

    /// Base profile with every enabled adjustment layered on.
    pub fn effective(&self, session: &Session, profile: &Profile, table: &TableSnapshot) -> Effective {
        let features = self.difficulty.features();
        let mut effective = Effective::from(profile);
        if let Some(hero) = table.hero().filter(|_| features.tilt) {
            effective = effective.tilted(session.ledger().tilt(&hero.id).value());
        }
        if let Some(villain) = table.villain().filter(|_| features.opponent_modeling) {
            let model = session.registry().lookup(&table.seats[villain].id, table.mode());
            effective = effective.exploit(&model.exploit());
        }
        if let Some(payouts) = table.format.payouts().filter(|_| features.icm) {
            let stacks = table.seats.iter().map(|s| s.total()).collect::<Vec<_>>();
            let situation = Situation::new(table.actor, &stacks, payouts);
            effective = effective.posture(&Posture::from(&situation));
        }
        effective
    }

    /// Everything the procedures read about this decision.
    pub fn spot(&self, session: &Session, table: &TableSnapshot) -> anyhow::Result<Spot> {
        let features = self.difficulty.features();
        let hole = table
            .hole()
            .ok_or_else(|| anyhow::anyhow!("actor has no hole cards"))?;
        let opponents = table.opponents().count();
        let equity = session
            .simulator()
            .equity(hole, table.board, opponents, self.difficulty.iterations());
        let range = match features.ranges {
            true => Self::range(table),
            false => None,
        };
        let equity = range.as_ref().map(|r| r.discount(equity)).unwrap_or(equity);
        let texture = match features.board_texture {
            true => Texture::from(table.board),
            false => Texture::default(),
        };
        Ok(Spot::new(table, hole, equity, texture, range))
    }

    /// Read the primary opponent's range off the betting so far.
    fn range(table: &TableSnapshot) -> Option<HandRange> {
        let villain = table.villain()?;
        let position = table.position_of(villain);
        let seat = &table.seats[villain];
        match table.street {
            Street::Pref => Some(Estimator::estimate(
                position,
                PreflopAction::from_raises(table.raises, table.limpers > 0),
                false,
            )),
            _ => {
                let origin = match table.aggressor == Some(villain) {
                    true => PreflopAction::Raise,
                    false => PreflopAction::Call,
                };
                let mut range = Estimator::estimate(position, origin, false);
                let action = match (seat.bet > 0, table.raises) {
                    (false, _) => PostflopAction::Check,
                    (true, 0) => PostflopAction::Bet,
                    (true, _) => PostflopAction::Raise,
                };
                range.street = table.street.prev();
                range.narrow(action, &Texture::from(table.board));
                Some(range)
            }
        }
    }

    fn explain(&self, spot: &Spot, profile: &Effective, procedure: &str, reason: &str) -> Explanation {
        let mut explanation = Explanation::new(format!("{}: {}", procedure, reason))
            .factor("equity", spot.equity, 0.35)
            .factor("pot odds", spot.pot_odds, 0.20)
            .factor("preflop", spot.chen.strength(), 0.15)
            .factor("wetness", spot.texture.wetness(), 0.10)
            .factor("spr", spot.spr.min(100.0), 0.05)
            .factor("outs", spot.draws.outs() as f32, 0.05);
        if spot.facing() {
            explanation = explanation.factor("mdf", mdf(spot.pot, spot.to_call), 0.05);
        }
        if let Some(range) = spot.range.as_ref() {
            explanation = explanation.factor("villain range", range.width(), 0.05);
        }
        if profile.tilt > 0.0 {
            explanation = explanation.factor("tilt", profile.tilt, 0.05);
        }
        explanation
    }
}
