pub mod cache;
pub use cache::*;

pub mod ranker;
pub use ranker::*;

pub mod simulator;
pub use simulator::*;

pub mod tally;
pub use tally::*;
