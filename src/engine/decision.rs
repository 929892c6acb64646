use super::explain::Explanation;
use crate::table::Action;

/// The one action taken, with its explanation.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct Decision {
    pub action: Action,
    pub explanation: Explanation,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}\n{}", self.action, self.explanation)
    }
}
