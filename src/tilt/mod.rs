pub mod ledger;
pub use ledger::*;

pub mod level;
pub use level::*;

pub mod state;
pub use state::*;

pub mod trigger;
pub use trigger::*;
