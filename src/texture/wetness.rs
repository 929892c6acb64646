use crate::Probability;
use crate::WET_BOARD;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// How coordinated the community cards are.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Texture {
    pub paired: bool,
    pub monotone: bool,
    pub two_tone: bool,
    pub broadway: bool,
    /// Pairs of distinct ranks within four of each other, ace also low.
    pub connectivity: usize,
}

impl From<Board> for Texture {
    fn from(board: Board) -> Self {
        let hand = Hand::from(board);
        let cards = board.cards();
        let ranks = u16::from(hand);
        let suited = Suit::all()
            .iter()
            .map(|s| hand.of(s).size())
            .max()
            .unwrap_or(0);
        let distinct = Rank::all()
            .into_iter()
            .filter(|r| ranks & (1 << *r as u16) != 0)
            .collect::<Vec<_>>();
        let connectivity = distinct
            .iter()
            .enumerate()
            .flat_map(|(i, a)| distinct.iter().skip(i + 1).map(move |b| (*a, *b)))
            .filter(|(a, b)| Self::distance(*a, *b) <= 4)
            .count();
        Self {
            paired: distinct.len() < cards.len(),
            monotone: suited >= 3,
            two_tone: suited == 2,
            broadway: cards.iter().any(|c| c.rank() >= Rank::Ten),
            connectivity,
        }
    }
}

impl Texture {
    /// Rank distance with the ace playing high or low, whichever is closer.
    fn distance(a: Rank, b: Rank) -> u8 {
        let value = |r: Rank| r.value();
        let low = |r: Rank| match r {
            Rank::Ace => 1,
            r => r.value(),
        };
        value(a)
            .abs_diff(value(b))
            .min(low(a).abs_diff(low(b)))
    }
    /// Flush potential, straight potential, less a little for pairing.
    pub fn wetness(&self) -> Probability {
        let mut wet = 0.0;
        if self.monotone {
            wet += 0.40;
        }
        if self.two_tone {
            wet += 0.20;
        }
        wet += (0.10 * self.connectivity as f32).min(0.40);
        if self.paired {
            wet -= 0.10;
        }
        crate::unit(wet)
    }
    pub fn dryness(&self) -> Probability {
        1.0 - self.wetness()
    }
    pub fn is_wet(&self) -> bool {
        self.wetness() >= WET_BOARD
    }
}

impl std::fmt::Display for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let suits = match (self.monotone, self.two_tone) {
            (true, _) => "monotone",
            (_, true) => "two-tone",
            _ => "rainbow",
        };
        let pair = match self.paired {
            true => " paired",
            false => "",
        };
        write!(f, "{}{} wet {:.2}", suits, pair, self.wetness())
    }
}
