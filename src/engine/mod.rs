pub mod decision;
pub use decision::*;

pub mod dice;
pub use dice::*;

pub mod engine;
pub use engine::*;

pub mod explain;
pub use explain::*;

pub mod gto;
pub use gto::*;

pub mod postflop;
pub use postflop::*;

pub mod preflop;
pub use preflop::*;

pub mod session;
pub use session::*;

pub mod sizing;
pub use sizing::*;

pub mod spot;
pub use spot::*;

#[cfg(test)]
mod tests;
