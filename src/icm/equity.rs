use super::payouts::Payouts;
use crate::Chips;
use crate::ICM_EXACT_PLAYERS;
use crate::Utility;

/// Malmuth-Harville finishing equity of every stack.
///
/// The chance of finishing next is proportional to chips among the players
/// not yet placed. Reach probabilities are accumulated over the set of placed
/// players, so the cost is `2^n * n` rather than `n!`. Fields larger than
/// `ICM_EXACT_PLAYERS` fall back to chip-proportional equity.
pub fn equities(stacks: &[Chips], payouts: &Payouts) -> Vec<Utility> {
    let n = stacks.len();
    let chips = stacks.iter().map(|s| (*s).max(0) as f64).collect::<Vec<_>>();
    let total = chips.iter().sum::<f64>();
    if total <= 0.0 {
        return vec![0.0; n];
    }
    if n > ICM_EXACT_PLAYERS {
        return chips
            .iter()
            .map(|c| (c / total * payouts.total() as f64) as Utility)
            .collect();
    }
    let paid = payouts.spots().min(n);
    let mut reach = vec![0f64; 1 << n];
    let mut equity = vec![0f64; n];
    reach[0] = 1.0;
    for placed in 0..(1usize << n) {
        let p = reach[placed];
        let place = placed.count_ones() as usize;
        if p == 0.0 || place >= paid {
            continue;
        }
        let left = total
            - (0..n)
                .filter(|i| placed & (1 << i) != 0)
                .map(|i| chips[i])
                .sum::<f64>();
        if left <= 0.0 {
            continue;
        }
        let prize = payouts.prize(place + 1) as f64;
        for j in (0..n).filter(|j| placed & (1 << j) == 0 && chips[*j] > 0.0) {
            let q = p * chips[j] / left;
            equity[j] += q * prize;
            reach[placed | (1 << j)] += q;
        }
    }
    equity.into_iter().map(|e| e as Utility).collect()
}
