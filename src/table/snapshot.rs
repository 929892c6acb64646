use super::format::Format;
use super::format::GameMode;
use super::position::Position;
use super::seat::Seat;
use super::seat::Status;
use crate::Arbitrary;
use crate::Chips;
use crate::Probability;
use crate::cards::*;
use anyhow::ensure;

/// Everything the orchestrator tells us about the table when it is our turn.
///
/// `pot` counts every chip committed this hand, current street included.
/// `offset` is the actor's distance clockwise from the button among seats
/// still in play. `raises` counts raises on the current street (the big blind
/// is not a raise) and `limpers` the players who only called the big blind.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TableSnapshot {
    pub street: Street,
    pub pot: Chips,
    pub current_bet: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub min_raise: Chips,
    pub seats: Vec<Seat>,
    pub actor: usize,
    pub offset: usize,
    #[serde(default)]
    pub board: Board,
    #[serde(default)]
    pub aggressor: Option<usize>,
    #[serde(default)]
    pub raises: usize,
    #[serde(default)]
    pub limpers: usize,
    #[serde(default)]
    pub format: Format,
}

impl TableSnapshot {
    /// Rejects snapshots the orchestrator should never have produced.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.pot >= 0, "negative pot: {}", self.pot);
        ensure!(self.big_blind > 0, "big blind must be positive: {}", self.big_blind);
        ensure!(self.current_bet >= 0, "negative current bet: {}", self.current_bet);
        ensure!(
            self.actor < self.seats.len(),
            "actor {} outside {} seats",
            self.actor,
            self.seats.len()
        );
        for seat in self.seats.iter() {
            ensure!(seat.chips >= 0, "negative stack for {}", seat.id);
            ensure!(seat.bet >= 0, "negative bet for {}", seat.id);
        }
        let hero = &self.seats[self.actor];
        ensure!(hero.status == Status::Active, "actor {} cannot act: {:?}", hero.id, hero.status);
        ensure!(hero.chips > 0, "actor {} has no chips", hero.id);
        ensure!(
            self.current_bet >= hero.bet,
            "current bet {} below actor bet {}",
            self.current_bet,
            hero.bet
        );
        let hole = hero.hole.ok_or_else(|| anyhow::anyhow!("actor {} has no hole cards", hero.id))?;
        ensure!(
            self.board.street() == self.street,
            "board of {} cards on the {}",
            self.board.size(),
            self.street
        );
        ensure!(
            !Hand::from(hole).overlaps(&Hand::from(self.board)),
            "hole {} overlaps board {}",
            hole,
            self.board
        );
        ensure!(self.opponents().count() > 0, "no opponent left in the hand");
        Ok(())
    }

    pub fn hero(&self) -> Option<&Seat> {
        self.seats.get(self.actor)
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hero().and_then(|s| s.hole)
    }
    /// Hero's hole cards plus the board.
    pub fn dealt(&self) -> Hand {
        self.hole()
            .map(Hand::from)
            .map(|h| Hand::or(h, Hand::from(self.board)))
            .unwrap_or_else(|| Hand::from(self.board))
    }
    /// Chips behind for the actor.
    pub fn stack(&self) -> Chips {
        self.hero().map(|s| s.chips).unwrap_or(0)
    }
    pub fn to_call(&self) -> Chips {
        let bet = self.hero().map(|s| s.bet).unwrap_or(0);
        (self.current_bet - bet).max(0)
    }
    /// Break-even win probability for a call.
    pub fn pot_odds(&self) -> Probability {
        match self.to_call() {
            0 => 0.0,
            c => c as Probability / (self.pot + c) as Probability,
        }
    }
    /// Stack-to-pot ratio. Unbounded with an empty pot.
    pub fn spr(&self) -> f32 {
        match self.pot {
            0 => f32::MAX,
            p => self.stack() as f32 / p as f32,
        }
    }
    pub fn mode(&self) -> GameMode {
        self.format.mode()
    }
    /// Opponents still contesting the pot, with their seat index.
    pub fn opponents(&self) -> impl Iterator<Item = (usize, &Seat)> {
        self.seats
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.actor)
            .filter(|(_, s)| s.is_live())
    }
    /// The opponent that put in the most this street, first seat on ties.
    pub fn villain(&self) -> Option<usize> {
        self.opponents()
            .min_by_key(|(i, s)| (std::cmp::Reverse(s.bet), *i))
            .map(|(i, _)| i)
    }
    pub fn is_aggressor(&self) -> bool {
        self.aggressor == Some(self.actor)
    }
    /// Seats dealt into this hand.
    pub fn in_play(&self) -> usize {
        self.seats.iter().filter(|s| s.status != Status::Out).count()
    }
    pub fn position(&self) -> Position {
        Position::from_offset(self.offset, self.in_play())
    }
    /// Position of any seat, derived from the actor's offset.
    pub fn position_of(&self, seat: usize) -> Position {
        Position::from_offset(self.offset_of(seat), self.in_play())
    }
    /// Hero acts after every live opponent on postflop streets.
    pub fn in_position(&self) -> bool {
        let n = self.in_play();
        let order = |o: usize| if o == 0 { n } else { o };
        let hero = order(self.offset);
        self.opponents()
            .map(|(i, _)| order(self.offset_of(i)))
            .all(|o| o < hero)
    }
    fn offset_of(&self, seat: usize) -> usize {
        let n = self.in_play().max(1);
        let rank = |i: usize| {
            self.seats
                .iter()
                .take(i)
                .filter(|s| s.status != Status::Out)
                .count()
        };
        (self.offset + n + rank(seat) - rank(self.actor) % n) % n
    }
}

impl Arbitrary for TableSnapshot {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(2..=6usize);
        let street = Street::random();
        let mut deck = Deck::new();
        let hole = deck.hole(rng);
        let board = Board::try_from(deck.deal(street.n_observed(), rng)).unwrap_or_default();
        let big_blind = 10;
        let actor = rng.random_range(0..n);
        let raises = rng.random_range(0..3usize);
        let current_bet = match (street, raises) {
            (Street::Pref, 0) => big_blind,
            (Street::Pref, r) => big_blind * 3 * r as Chips,
            (_, 0) => 0,
            (_, r) => big_blind * 4 * r as Chips,
        };
        let seats = (0..n)
            .map(|i| {
                let seat = Seat::new(&format!("p{}", i), big_blind * rng.random_range(20..200));
                match i == actor {
                    true => seat.with_hole(hole),
                    false => seat.with_bet(current_bet),
                }
            })
            .collect::<Vec<_>>();
        Self {
            street,
            pot: current_bet * (n as Chips - 1) + big_blind * rng.random_range(2..30),
            current_bet,
            big_blind,
            min_raise: current_bet.max(big_blind),
            seats,
            actor,
            offset: actor,
            board,
            aggressor: (raises > 0).then_some((actor + 1) % n),
            raises,
            limpers: 0,
            format: Format::Cash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flop() -> TableSnapshot {
        TableSnapshot {
            street: Street::Flop,
            pot: 100,
            current_bet: 50,
            big_blind: 10,
            min_raise: 50,
            seats: vec![
                Seat::new("btn", 1000).with_bet(50),
                Seat::new("sb", 1000).with_status(Status::Folded),
                Seat::new("bb", 900).with_hole(Hole::try_from("As Kd").unwrap()),
            ],
            actor: 2,
            offset: 2,
            board: Board::try_from("Ah 7c 2d").unwrap(),
            aggressor: Some(0),
            raises: 0,
            limpers: 0,
            format: Format::Cash,
        }
    }

    #[test]
    fn valid_snapshot() {
        let table = flop();
        assert!(table.validate().is_ok());
        assert_eq!(table.to_call(), 50);
        assert_eq!(table.villain(), Some(0));
        assert_eq!(table.position(), Position::BigBlind);
        assert!(!table.in_position());
        assert!((table.pot_odds() - 50.0 / 150.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_negative_pot() {
        let mut table = flop();
        table.pot = -1;
        assert!(table.validate().is_err());
    }

    #[test]
    fn rejects_overlapping_cards() {
        let mut table = flop();
        table.board = Board::try_from("As 7c 2d").unwrap();
        assert!(table.validate().is_err());
    }

    #[test]
    fn rejects_street_mismatch() {
        let mut table = flop();
        table.street = Street::Turn;
        assert!(table.validate().is_err());
    }

    #[test]
    fn rejects_folded_actor() {
        let mut table = flop();
        table.seats[2].status = Status::Folded;
        assert!(table.validate().is_err());
    }

    #[test]
    fn rejects_lonely_actor() {
        let mut table = flop();
        table.seats[0].status = Status::Folded;
        assert!(table.validate().is_err());
    }

    #[test]
    fn button_is_in_position() {
        let mut table = flop();
        table.seats[0].hole = None;
        table.seats[2].hole = None;
        table.seats[0] = table.seats[0].clone().with_hole(Hole::try_from("Qs Qd").unwrap());
        table.seats[2].bet = 50;
        table.seats[0].bet = 0;
        table.actor = 0;
        table.offset = 0;
        assert!(table.in_position());
        assert_eq!(table.position_of(2), Position::BigBlind);
    }

    #[test]
    fn villain_ties_break_by_seat() {
        let mut table = flop();
        table.seats[1].status = Status::Active;
        table.seats[1].bet = 50;
        assert_eq!(table.villain(), Some(0));
    }

    #[test]
    fn arbitrary_snapshots_validate() {
        for _ in 0..64 {
            assert!(TableSnapshot::random().validate().is_ok());
        }
    }

    #[test]
    fn json_round_trip() {
        let table = flop();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(serde_json::from_str::<TableSnapshot>(&json).unwrap(), table);
    }
}
