mod constants;
mod customization;
mod fee_summary;
mod transaction_fee;

pub use constants::*;
pub use customization::*;
pub use fee_summary::*;
pub use transaction_fee::*;
