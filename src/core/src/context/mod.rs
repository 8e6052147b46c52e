pub mod calendar;
pub mod decision;

pub use calendar::*;
pub use decision::*;
