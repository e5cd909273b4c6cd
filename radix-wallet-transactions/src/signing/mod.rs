mod signer;

pub use signer::*;
