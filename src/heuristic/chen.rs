use crate::CHEN_MAX;
use crate::CHEN_MIN;
use crate::CHEN_PLAYABLE;
use crate::CHEN_PREMIUM;
use crate::CHEN_STRONG;
use crate::Probability;
use crate::cards::Hole;
use crate::cards::Rank;

/// Coarse preflop bucket.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Weak,
    Playable,
    Strong,
    Premium,
}

/// Closed-form preflop score of two hole cards.
///
/// Base value from the higher card, doubled for pairs, bonus for suits,
/// stepped penalty for rank gaps and a small bonus for low connected cards.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[derive(serde::Serialize)]
pub struct Chen(f32);

impl From<Hole> for Chen {
    fn from(hole: Hole) -> Self {
        let hi = hole.hi().rank();
        let lo = hole.lo().rank();
        let base = Self::base(hi);
        let gap = hi as u8 - lo as u8;
        let mut score = match hole.paired() {
            true => (2.0 * base).max(5.0),
            false => base,
        };
        if hole.suited() {
            score += 2.0;
        }
        score -= match gap {
            0 | 1 => 0.0,
            2 => 1.0,
            3 => 2.0,
            4 => 4.0,
            _ => 5.0,
        };
        if hi <= Rank::Queen && gap <= 2 {
            score += 1.0;
        }
        Self(score)
    }
}

impl Chen {
    fn base(rank: Rank) -> f32 {
        match rank {
            Rank::Ace => 10.0,
            Rank::King => 8.0,
            Rank::Queen => 7.0,
            Rank::Jack => 6.0,
            Rank::Ten => 5.0,
            r => r.value() as f32 / 2.0,
        }
    }
    pub fn score(&self) -> f32 {
        self.0
    }
    /// Score mapped onto [0, 1].
    pub fn strength(&self) -> Probability {
        crate::unit((self.0 - CHEN_MIN) / (CHEN_MAX - CHEN_MIN))
    }
    pub fn tier(&self) -> Tier {
        match self.0 {
            s if s >= CHEN_PREMIUM => Tier::Premium,
            s if s >= CHEN_STRONG => Tier::Strong,
            s if s >= CHEN_PLAYABLE => Tier::Playable,
            _ => Tier::Weak,
        }
    }
}

impl std::fmt::Display for Chen {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>5.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Suit;

    fn chen(s: &str) -> f32 {
        Chen::from(Hole::try_from(s).unwrap()).score()
    }

    fn every_hole() -> Vec<Hole> {
        (0u8..52)
            .flat_map(|a| (0u8..a).map(move |b| Hole::from((Card::from(a), Card::from(b)))))
            .collect()
    }

    #[test]
    fn known_scores() {
        assert_eq!(chen("As Ah"), 20.0);
        assert_eq!(chen("Ks Kh"), 16.0);
        assert_eq!(chen("Qs Qh"), 15.0);
        assert_eq!(chen("2s 2h"), 6.0);
        assert_eq!(chen("As Ks"), 12.0);
        assert_eq!(chen("Ts 9s"), 8.0);
        assert_eq!(chen("7s 2h"), CHEN_MIN);
    }

    #[test]
    fn tiers() {
        assert_eq!(Chen::from(Hole::try_from("Js Jh").unwrap()).tier(), Tier::Premium);
        assert_eq!(Chen::from(Hole::try_from("Ts 9s").unwrap()).tier(), Tier::Strong);
        assert_eq!(Chen::from(Hole::try_from("Kd Th").unwrap()).tier(), Tier::Playable);
        assert_eq!(Chen::from(Hole::try_from("9c 3h").unwrap()).tier(), Tier::Weak);
    }

    #[test]
    fn strength_in_unit_interval() {
        for hole in every_hole() {
            let s = Chen::from(hole).strength();
            assert!((0.0..=1.0).contains(&s), "{} -> {}", hole, s);
        }
    }

    #[test]
    fn pairs_beat_same_high_card() {
        for hole in every_hole().into_iter().filter(|h| !h.paired()) {
            let hi = hole.hi();
            let pair = Hole::from((
                Card::from((hi.rank(), Suit::C)),
                Card::from((hi.rank(), Suit::D)),
            ));
            assert!(Chen::from(pair).score() >= Chen::from(hole).score(), "{}", hole);
        }
    }

    #[test]
    fn suited_beats_offsuit() {
        for hole in every_hole().into_iter().filter(|h| h.suited()) {
            let offsuit = Hole::from((
                Card::from((hole.hi().rank(), Suit::C)),
                Card::from((hole.lo().rank(), Suit::D)),
            ));
            assert!(Chen::from(hole).score() > Chen::from(offsuit).score(), "{}", hole);
        }
    }
}
