pub mod calendar;
pub mod phase;
pub mod solstice;

pub use calendar::*;
pub use phase::*;
pub use solstice::*;
