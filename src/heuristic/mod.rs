pub mod chen;
pub use chen::*;

pub mod threshold;
pub use threshold::*;
