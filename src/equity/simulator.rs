use super::cache::EquityCache;
use super::cache::Key;
use super::ranker::Ranker;
use super::ranker::Standard;
use super::tally::Tally;
use crate::EQUITY_CHUNK;
use crate::NEUTRAL_EQUITY;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;
use std::sync::Arc;

/// Monte Carlo equity against random opponent holdings.
///
/// Rollouts are split into fixed-size chunks that run on the rayon pool.
/// Each chunk seeds its own generator from the query key and the chunk
/// index, so an estimate is a pure function of the query and iteration
/// count no matter how the pool schedules the work.
pub struct Simulator<R: Ranker = Standard> {
    cache: Arc<EquityCache>,
    ranker: R,
}

impl Simulator<Standard> {
    pub fn new(cache: Arc<EquityCache>) -> Self {
        Self::with_ranker(cache, Standard)
    }
}

impl<R: Ranker> Simulator<R> {
    pub fn with_ranker(cache: Arc<EquityCache>, ranker: R) -> Self {
        Self { cache, ranker }
    }

    /// Probability that `hole` wins at showdown against `opponents` random
    /// hands, splits counted half. Neutral when the unseen deck cannot
    /// cover the deal.
    pub fn equity(&self, hole: Hole, board: Board, opponents: usize, iterations: usize) -> Probability {
        let opponents = opponents.max(1);
        let iterations = iterations.max(1);
        let key = Key::new(hole, board, opponents);
        if let Some(equity) = self.cache.get(&key) {
            return equity;
        }
        let dealt = Hand::or(Hand::from(hole), Hand::from(board));
        let unseen = dealt.complement().size();
        let needed = 2 * opponents + 5 - board.size();
        if unseen < needed {
            log::debug!("{} unseen cards cannot deal {} opponents", unseen, opponents);
            return NEUTRAL_EQUITY;
        }
        let tally = self.rollouts(key.seed(), iterations, |rng| {
            let mut deck = Deck::without(dealt);
            let community = Hand::or(Hand::from(board), deck.deal(5 - board.size(), rng));
            let hero = self.ranker.strength(Hand::or(Hand::from(hole), community));
            let best = (0..opponents)
                .map(|_| Hand::or(deck.deal(2, rng), community))
                .map(|hand| self.ranker.strength(hand))
                .max()
                .unwrap_or(hero);
            Tally::from(hero.cmp(&best))
        });
        let equity = tally.equity();
        log::trace!("{} {} x{} {}", hole, board, opponents, tally);
        self.cache.insert(key, equity);
        equity
    }

    /// Heads-up showdowns between two known hands on random runouts.
    /// The villain's side is `tally.flip()`. Empty on overlapping cards.
    pub fn matchup(&self, hero: Hole, villain: Hole, board: Board, iterations: usize) -> Tally {
        let hero_hand = Hand::from(hero);
        let villain_hand = Hand::from(villain);
        let board_hand = Hand::from(board);
        if hero_hand.overlaps(&villain_hand)
            || hero_hand.overlaps(&board_hand)
            || villain_hand.overlaps(&board_hand)
        {
            return Tally::default();
        }
        let dealt = Hand::or(Hand::or(hero_hand, villain_hand), board_hand);
        let seed = crate::scramble(u64::from(dealt) ^ crate::scramble(u64::from(hero_hand)));
        self.rollouts(seed, iterations.max(1), |rng| {
            let mut deck = Deck::without(dealt);
            let community = Hand::or(board_hand, deck.deal(5 - board.size(), rng));
            let h = self.ranker.strength(Hand::or(hero_hand, community));
            let v = self.ranker.strength(Hand::or(villain_hand, community));
            Tally::from(h.cmp(&v))
        })
    }

    fn rollouts<F>(&self, seed: u64, iterations: usize, rollout: F) -> Tally
    where
        F: Fn(&mut SmallRng) -> Tally + Sync,
    {
        (0..iterations.div_ceil(EQUITY_CHUNK))
            .into_par_iter()
            .map(|chunk| {
                let n = EQUITY_CHUNK.min(iterations - chunk * EQUITY_CHUNK);
                let ref mut rng = SmallRng::seed_from_u64(crate::scramble(seed ^ chunk as u64));
                (0..n).map(|_| rollout(rng)).sum::<Tally>()
            })
            .reduce(Tally::default, std::ops::Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> Simulator {
        Simulator::new(Arc::new(EquityCache::default()))
    }
    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }

    #[test]
    fn aces_crush_one_random_hand() {
        let equity = simulator().equity(hole("As Ah"), Board::empty(), 1, 4000);
        assert!(equity > 0.80 && equity < 0.90, "{}", equity);
    }

    #[test]
    fn more_opponents_less_equity() {
        let sim = simulator();
        let one = sim.equity(hole("As Ah"), Board::empty(), 1, 2000);
        let four = sim.equity(hole("As Ah"), Board::empty(), 4, 2000);
        assert!(four < one);
    }

    #[test]
    fn nuts_on_the_river() {
        let equity = simulator().equity(hole("As Ks"), board("Qs Js Ts 2d 3c"), 3, 500);
        assert_eq!(equity, 1.0);
    }

    #[test]
    fn board_plays_splits() {
        let equity = simulator().equity(hole("2c 3d"), board("As Ks Qs Js Ts"), 1, 500);
        assert_eq!(equity, 0.5);
    }

    #[test]
    fn invariant_under_card_order() {
        let a = simulator().equity(hole("As Kd"), board("Qh Jc 2s"), 2, 1000);
        let b = simulator().equity(hole("Kd As"), board("2s Jc Qh"), 2, 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn repeat_queries_hit_the_cache() {
        let cache = Arc::new(EquityCache::default());
        let sim = Simulator::new(cache.clone());
        let first = sim.equity(hole("7h 7d"), board("Ac Kc 2h"), 1, 300);
        let again = sim.equity(hole("7d 7h"), board("2h Kc Ac"), 1, 300);
        assert_eq!(first, again);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn short_deck_is_neutral() {
        let sim = simulator();
        let equity = sim.equity(hole("As Ah"), board("Kc Kd Ks"), 23, 100);
        assert_eq!(equity, NEUTRAL_EQUITY);
    }

    #[test]
    fn matchup_is_complementary() {
        let sim = simulator();
        let hero = sim.matchup(hole("As Kd"), hole("Qh Qc"), Board::empty(), 20_000);
        let villain = sim.matchup(hole("Qh Qc"), hole("As Kd"), Board::empty(), 20_000);
        assert_eq!(hero.n(), 20_000);
        assert!(villain.equity() > 0.5);
        let total = hero.equity() + villain.equity();
        assert!((total - 1.0).abs() < 0.03, "{}", total);
    }

    #[test]
    fn heads_up_equity_matches_every_holding() {
        // on the river each matchup is exact, so their mean is the true
        // heads-up equity against a random hand
        let sim = simulator();
        let hero = hole("9c 8d");
        let river = board("Kh 9s 4d 2c 7h");
        let unseen = Hand::or(Hand::from(hero), Hand::from(river))
            .complement()
            .collect::<Vec<_>>();
        let tallies = unseen
            .iter()
            .enumerate()
            .flat_map(|(i, a)| unseen[i + 1..].iter().map(move |b| (*a, *b)))
            .map(|(a, b)| Hole::try_from(Hand::or(Hand::from(a), Hand::from(b))).unwrap())
            .map(|villain| sim.matchup(hero, villain, river, 1))
            .collect::<Vec<_>>();
        assert_eq!(tallies.len(), 990);
        let n = tallies.len() as f32;
        let exact = tallies.iter().map(|t| t.equity()).sum::<f32>() / n;
        let against = tallies.iter().map(|t| t.flip().equity()).sum::<f32>() / n;
        assert!((exact + against - 1.0).abs() < 1e-4);
        let sampled = sim.equity(hero, river, 1, 20_000);
        assert!((sampled - exact).abs() < 0.02, "{} vs {}", sampled, exact);
    }

    #[test]
    fn matchup_with_shared_cards_is_empty() {
        let tally = simulator().matchup(hole("As Kd"), hole("As Qc"), Board::empty(), 100);
        assert_eq!(tally, Tally::default());
    }
}
