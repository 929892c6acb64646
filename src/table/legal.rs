use super::action::Action;
use super::snapshot::TableSnapshot;
use crate::Chips;

/// Betting constraints on the actor.
///
/// Built from a snapshot once per decision, then used to snap whatever the
/// procedures propose onto exactly one legal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legal {
    to_call: Chips,
    to_shove: Chips,
    to_raise: Chips,
    to_bet: Chips,
    facing: bool,
}

impl From<&TableSnapshot> for Legal {
    fn from(table: &TableSnapshot) -> Self {
        let increment = table.min_raise.max(table.big_blind);
        Self {
            to_call: table.to_call(),
            to_shove: table.stack(),
            to_raise: table.to_call() + increment,
            to_bet: table.big_blind,
            facing: table.current_bet > 0,
        }
    }
}

impl Legal {
    /// Chips needed to call the current bet.
    pub fn to_call(&self) -> Chips {
        self.to_call
    }
    /// All remaining chips.
    pub fn to_shove(&self) -> Chips {
        self.to_shove
    }
    /// Minimum legal raise, in chips added.
    pub fn to_raise(&self) -> Chips {
        self.to_raise
    }
    pub fn may_check(&self) -> bool {
        self.to_call == 0
    }
    pub fn may_call(&self) -> bool {
        self.to_call > 0 && self.to_call < self.to_shove
    }
    pub fn may_bet(&self) -> bool {
        !self.facing && self.to_bet < self.to_shove
    }
    pub fn may_raise(&self) -> bool {
        self.facing && self.to_raise < self.to_shove
    }

    /// Snap a proposal onto one legal action.
    ///
    /// Sizes below the minimum round up, sizes at or above the stack become
    /// a shove, and bets and raises swap according to whether a bet is
    /// already in. A fold with nothing to call is a check.
    pub fn clamp(&self, action: Action) -> Action {
        match action {
            Action::Fold if self.may_check() => Action::Check,
            Action::Fold => Action::Fold,
            Action::Check | Action::Call(_) => self.passive(),
            Action::AllIn(_) => Action::AllIn(self.to_shove),
            Action::Bet(n) | Action::Raise(n) if self.facing => self.raise(n),
            Action::Bet(n) | Action::Raise(n) => self.bet(n),
        }
    }
    /// Check when free, call when covered, shove otherwise.
    fn passive(&self) -> Action {
        match self.to_call {
            0 => Action::Check,
            c if c >= self.to_shove => Action::AllIn(self.to_shove),
            c => Action::Call(c),
        }
    }
    fn raise(&self, chips: Chips) -> Action {
        match chips.max(self.to_raise) {
            _ if self.to_call >= self.to_shove => Action::AllIn(self.to_shove),
            n if n >= self.to_shove => Action::AllIn(self.to_shove),
            n => Action::Raise(n),
        }
    }
    fn bet(&self, chips: Chips) -> Action {
        match chips.max(self.to_bet) {
            n if n >= self.to_shove => Action::AllIn(self.to_shove),
            n => Action::Bet(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facing(to_call: Chips, stack: Chips) -> Legal {
        Legal {
            to_call,
            to_shove: stack,
            to_raise: to_call + 20,
            to_bet: 10,
            facing: true,
        }
    }
    fn unopened(stack: Chips) -> Legal {
        Legal {
            to_call: 0,
            to_shove: stack,
            to_raise: 20,
            to_bet: 10,
            facing: false,
        }
    }

    #[test]
    fn raise_below_minimum_rounds_up() {
        assert_eq!(facing(20, 500).clamp(Action::Raise(25)), Action::Raise(40));
    }

    #[test]
    fn oversized_raise_is_shove() {
        assert_eq!(facing(20, 500).clamp(Action::Raise(900)), Action::AllIn(500));
    }

    #[test]
    fn bet_facing_bet_is_raise() {
        assert_eq!(facing(20, 500).clamp(Action::Bet(100)), Action::Raise(100));
    }

    #[test]
    fn raise_unopened_is_bet() {
        assert_eq!(unopened(500).clamp(Action::Raise(60)), Action::Bet(60));
    }

    #[test]
    fn check_facing_bet_is_call() {
        assert_eq!(facing(20, 500).clamp(Action::Check), Action::Call(20));
    }

    #[test]
    fn call_for_stack_is_shove() {
        assert_eq!(facing(600, 500).clamp(Action::Call(600)), Action::AllIn(500));
        assert_eq!(facing(600, 500).clamp(Action::Raise(900)), Action::AllIn(500));
    }

    #[test]
    fn free_fold_is_check() {
        assert_eq!(unopened(500).clamp(Action::Fold), Action::Check);
        assert_eq!(unopened(500).clamp(Action::Call(0)), Action::Check);
    }
}
