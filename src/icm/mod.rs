pub mod equity;
pub use equity::*;

pub mod payouts;
pub use payouts::*;

pub mod posture;
pub use posture::*;

pub mod situation;
pub use situation::*;

pub mod stack;
pub use stack::*;
