pub mod draws;
pub use draws::*;

pub mod wetness;
pub use wetness::*;
