pub mod events;
pub mod sinks;

pub use events::*;
pub use sinks::*;
