pub mod player;
pub mod positions;
pub mod ratings;
pub mod skills;

pub use player::*;
pub use positions::*;
pub use ratings::*;
pub use skills::*;
