use super::situation::Situation;
use super::stack::StackClass;
use crate::SHORT_STACK_RATIO;

/// Strategy deltas from tournament standing.
///
/// Big stacks lean on the field, medium stacks tighten as pressure mounts,
/// short stacks open up in proportion to how far below the short threshold
/// they sit.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize)]
pub struct Posture {
    pub steal_bonus: f32,
    pub aggression_delta: f32,
    pub tightness_delta: f32,
}

impl From<&Situation> for Posture {
    fn from(s: &Situation) -> Self {
        let p = s.pressure;
        match s.class() {
            StackClass::Big => Self {
                steal_bonus: 0.05 + 0.10 * p,
                aggression_delta: 0.15 * p,
                tightness_delta: -0.05 * p,
            },
            StackClass::Medium => Self {
                steal_bonus: 0.0,
                aggression_delta: -0.05 * p,
                tightness_delta: match s.bubble || s.near_bubble {
                    true => 0.05 + 0.15 * p,
                    false => 0.10 * p,
                },
            },
            StackClass::Short => {
                let deficit = crate::unit((SHORT_STACK_RATIO - s.ratio) / SHORT_STACK_RATIO);
                Self {
                    steal_bonus: 0.05 + 0.25 * deficit,
                    aggression_delta: 0.05 + 0.30 * deficit,
                    tightness_delta: -(0.10 + 0.25 * deficit),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icm::Payouts;

    fn bubble(hero: i32) -> Posture {
        let payouts = Payouts::from(vec![50, 30, 20]);
        Posture::from(&Situation::new(0, &[hero, 1000, 1000, 1000], &payouts))
    }

    #[test]
    fn short_on_bubble_pushes() {
        let posture = bubble(300);
        assert!(posture.steal_bonus > 0.0);
        assert!(posture.aggression_delta > 0.0);
        assert!(posture.tightness_delta < 0.0);
    }

    #[test]
    fn shorter_pushes_harder() {
        let short = bubble(400);
        let shorter = bubble(100);
        assert!(shorter.steal_bonus > short.steal_bonus);
        assert!(shorter.aggression_delta > short.aggression_delta);
    }

    #[test]
    fn medium_tightens_on_bubble() {
        let posture = bubble(1000);
        assert_eq!(posture.steal_bonus, 0.0);
        assert!(posture.tightness_delta > 0.10);
        assert!(posture.aggression_delta < 0.0);
    }

    #[test]
    fn big_stack_steals() {
        let posture = bubble(4000);
        assert!(posture.steal_bonus > 0.05);
        assert!(posture.aggression_delta > 0.0);
    }
}
