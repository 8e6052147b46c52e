pub mod aging;
pub mod analyzer;

pub use aging::*;
pub use analyzer::*;
