pub mod action;
pub use action::*;

pub mod format;
pub use format::*;

pub mod legal;
pub use legal::*;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;

pub mod seat;
pub use seat::*;

pub mod snapshot;
pub use snapshot::*;
