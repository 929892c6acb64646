pub mod archetype;
pub use archetype::*;

pub mod effective;
pub use effective::*;

pub mod base;
pub use base::*;
