pub mod evaluator;
pub mod perceived;
pub mod strength;

pub use evaluator::*;
pub use perceived::*;
pub use strength::*;
