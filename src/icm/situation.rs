use super::equity::equities;
use super::payouts::Payouts;
use super::stack::StackClass;
use crate::Chips;
use crate::NEAR_BUBBLE_WINDOW;
use crate::Probability;
use crate::Utility;

/// Tournament standing of one player, recomputed every decision.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct Situation {
    pub chips: Chips,
    pub average: f32,
    pub ratio: f32,
    pub remaining: usize,
    pub spots: usize,
    pub bubble: bool,
    pub near_bubble: bool,
    pub in_the_money: bool,
    pub bubble_jump: f32,
    pub pressure: Probability,
    pub equity: Utility,
}

impl Situation {
    /// Standing of `stacks[hero]` among `stacks`. Zero stacks are busted.
    pub fn new(hero: usize, stacks: &[Chips], payouts: &Payouts) -> Self {
        let chips = stacks.get(hero).copied().unwrap_or(0);
        let alive = stacks.iter().filter(|s| **s > 0).collect::<Vec<_>>();
        let remaining = alive.len();
        let average = match remaining {
            0 => 0.0,
            n => alive.iter().map(|s| **s as f32).sum::<f32>() / n as f32,
        };
        let ratio = match average > 0.0 {
            true => chips as f32 / average,
            false => 1.0,
        };
        let spots = payouts.spots();
        let bubble = remaining == spots + 1;
        let near_bubble = remaining > spots + 1 && remaining <= spots + 1 + NEAR_BUBBLE_WINDOW;
        let in_the_money = remaining <= spots;
        let bubble_jump = Self::jump(payouts, remaining);
        let pressure = Self::pressure(bubble, near_bubble, in_the_money, remaining, spots, bubble_jump);
        let equity = equities(stacks, payouts).get(hero).copied().unwrap_or(0.0);
        Self {
            chips,
            average,
            ratio,
            remaining,
            spots,
            bubble,
            near_bubble,
            in_the_money,
            bubble_jump,
            pressure,
            equity,
        }
    }
    pub fn class(&self) -> StackClass {
        StackClass::from(self.ratio)
    }
    /// Players still to bust before the money.
    pub fn distance(&self) -> usize {
        self.remaining.saturating_sub(self.spots)
    }

    /// Relative payout gain from outlasting one more player, in severity bands.
    fn jump(payouts: &Payouts, remaining: usize) -> f32 {
        if remaining < 2 {
            return 0.0;
        }
        let better = payouts.prize(remaining - 1);
        let worse = payouts.prize(remaining);
        let gap = match better > 0.0 {
            true => (better - worse) / better,
            false => 0.0,
        };
        match gap {
            g if g >= 0.50 => 1.00,
            g if g >= 0.25 => 0.75,
            g if g >= 0.10 => 0.50,
            g if g > 0.00 => 0.25,
            _ => 0.00,
        }
    }
    fn pressure(
        bubble: bool,
        near_bubble: bool,
        in_the_money: bool,
        remaining: usize,
        spots: usize,
        jump: f32,
    ) -> Probability {
        let base = match () {
            _ if bubble => 0.8,
            _ if near_bubble => 0.8 - 0.1 * (remaining - spots - 2) as f32,
            _ if in_the_money => 0.3,
            _ => 0.1,
        };
        crate::unit(base + 0.2 * jump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_detection() {
        let payouts = Payouts::from(vec![50, 30, 20]);
        let s = Situation::new(0, &[1000, 800, 600, 200], &payouts);
        assert!(s.bubble);
        assert!(!s.near_bubble);
        assert!(!s.in_the_money);
        assert_eq!(s.bubble_jump, 1.0);
        assert!((s.pressure - 1.0).abs() < 1e-6);
    }

    #[test]
    fn near_bubble_pressure_decays_with_distance() {
        let payouts = Payouts::from(vec![50, 30, 20]);
        let one = Situation::new(0, &[100; 5], &payouts);
        let five = Situation::new(0, &[100; 9], &payouts);
        let far = Situation::new(0, &[100; 10], &payouts);
        assert!(one.near_bubble && five.near_bubble && !far.near_bubble);
        assert!((one.pressure - 0.8).abs() < 1e-6);
        assert!((five.pressure - 0.4).abs() < 1e-6);
        assert!((far.pressure - 0.1).abs() < 1e-6);
    }

    #[test]
    fn in_the_money_jump_bands() {
        let payouts = Payouts::from(vec![50, 30, 20]);
        let s = Situation::new(0, &[100, 100, 100], &payouts);
        // 30 -> 20 is a third of the better prize
        assert!(s.in_the_money);
        assert_eq!(s.bubble_jump, 0.75);
        assert!((s.pressure - 0.45).abs() < 1e-6);
    }

    #[test]
    fn stack_ratio_and_class() {
        let payouts = Payouts::from(vec![100]);
        let s = Situation::new(2, &[1000, 1000, 400, 0], &payouts);
        assert_eq!(s.remaining, 3);
        assert!((s.ratio - 0.5).abs() < 1e-6);
        assert_eq!(s.class(), StackClass::Short);
    }
}
