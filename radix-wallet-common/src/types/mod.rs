mod addresses;
mod epoch;
mod nonce;

pub use addresses::*;
pub use epoch::*;
pub use nonce::*;
