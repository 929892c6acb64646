pub mod features;
pub use features::*;

pub mod mistake;
pub use mistake::*;

pub mod tier;
pub use tier::*;
