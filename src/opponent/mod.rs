pub mod exploit;
pub use exploit::*;

pub mod model;
pub use model::*;

pub mod registry;
pub use registry::*;

pub mod stats;
pub use stats::*;

pub mod store;
pub use store::*;

pub mod style;
pub use style::*;
