use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
///
/// Stored as a Hand so that union with the board is a single OR. The two
/// cards are always distinct; `hi()` and `lo()` order them by rank, then suit.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hole(Hand);

impl Hole {
    pub fn hi(&self) -> Card {
        Card::from(63 - u64::from(self.0).leading_zeros() as u8)
    }
    pub fn lo(&self) -> Card {
        Card::from(u64::from(self.0).trailing_zeros() as u8)
    }
    pub fn paired(&self) -> bool {
        self.hi().rank() == self.lo().rank()
    }
    pub fn suited(&self) -> bool {
        self.hi().suit() == self.lo().suit()
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(format!("hole must hold 2 cards, got {}", n)),
        }
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

/// str isomorphism
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}
impl TryFrom<String> for Hole {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Hole> for String {
    fn from(h: Hole) -> Self {
        h.to_string()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi(), self.lo())
    }
}
