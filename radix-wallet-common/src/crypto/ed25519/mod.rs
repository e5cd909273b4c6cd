mod private_key;
mod public_key;
mod signature;

pub use private_key::*;
pub use public_key::*;
pub use signature::*;
