mod blake2b;
pub mod ed25519;
mod hash;
mod public_key;
pub mod secp256k1;
mod signature;
mod signature_validator;

pub use self::blake2b::*;
pub use self::ed25519::*;
pub use self::hash::*;
pub use self::public_key::*;
pub use self::secp256k1::*;
pub use self::signature::*;
pub use self::signature_validator::*;
