pub mod config;
pub mod context;
pub mod error;
pub mod evaluation;
pub mod needs;
pub mod observer;
pub mod personality;
pub mod player;
pub mod random;
pub mod transfers;
pub mod utils;
pub mod weekly;

pub use config::*;
pub use context::*;
pub use error::*;
pub use evaluation::*;
pub use needs::*;
pub use observer::*;
pub use personality::*;
pub use player::*;
pub use random::*;
pub use transfers::*;
pub use utils::*;
pub use weekly::*;
