/// Transaction manifests: instructions, builder and static analysis.
pub mod manifest;
/// Transaction model: header, intent, signatures, notarization and hashes.
pub mod model;
/// Private keys and the `Signer` abstraction over both supported curves.
pub mod signing;

pub mod prelude {
    pub use radix_wallet_common::prelude::*;

    pub use super::manifest::*;
    pub use super::model::*;
    pub use super::signing::*;
}

pub(crate) mod internal_prelude {
    pub use super::prelude::*;
    pub use core::fmt;
}
