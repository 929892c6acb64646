pub mod action;
pub use action::*;

pub mod estimator;
pub use estimator::*;

pub mod width;
pub use width::*;
