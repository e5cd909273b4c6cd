/// Wallet crypto library: hashing, key pairs and signatures.
pub mod crypto;
/// Wallet-controlled entities and the factors that secure them.
pub mod entities;
/// Decimal math used for balances and fees.
pub mod math;
/// Network identifier model.
pub mod network;
/// Addresses and small ledger scalar types.
pub mod types;

mod macros;
mod sample_values;

pub use sample_values::HasSampleValues;

// extern crate self as X; in lib.rs allows ::X and X to resolve to this crate inside this crate,
// so macros expanding $crate paths behave the same inside and outside.
extern crate self as radix_wallet_common;

/// Each crate in this workspace has its own prelude which re-exports the prelude of upstream
/// workspace crates plus this crate's public types. Downstream code imports one prelude
/// instead of juggling individual paths.
pub mod prelude {
    // Exports from upstream libraries
    pub use indexmap::{indexmap, indexset, IndexMap, IndexSet};

    // Exports from this crate
    pub use super::crypto::*;
    pub use super::entities::*;
    pub use super::math::*;
    pub use super::network::*;
    pub use super::types::*;
    pub use super::HasSampleValues;
    pub use crate::dec;
}

pub(crate) mod internal_prelude {
    pub use super::prelude::*;
    pub use core::fmt;
    pub use core::str::FromStr;
}
