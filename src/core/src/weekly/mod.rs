pub mod activity;
pub mod input;
pub mod league;
pub mod orchestrator;

pub use activity::*;
pub use input::*;
pub use league::*;
pub use orchestrator::*;
