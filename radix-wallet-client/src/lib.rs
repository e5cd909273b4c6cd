pub mod analysis;
pub mod error;
pub mod fee;
pub mod fee_payer;
pub mod intent;
pub mod ports;
pub mod preview;
pub mod review;
pub mod signers;

pub mod prelude {
    pub use radix_wallet_transactions::prelude::*;

    pub use crate::analysis::*;
    pub use crate::error::*;
    pub use crate::fee::*;
    pub use crate::fee_payer::*;
    pub use crate::intent::*;
    pub use crate::ports::*;
    pub use crate::preview::*;
    pub use crate::review::*;
    pub use crate::signers::*;
}

pub(crate) mod internal_prelude {
    pub use crate::prelude::*;

    pub use std::sync::Arc;
}
