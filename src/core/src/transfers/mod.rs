pub mod bidding;
pub mod listing;
pub mod negotiation;
pub mod offer;
pub mod release;
pub mod seller;
pub mod signing;
pub mod target;

pub use bidding::*;
pub use listing::*;
pub use negotiation::*;
pub use offer::*;
pub use release::*;
pub use seller::*;
pub use signing::*;
pub use target::*;
