mod intent_hash;
mod notarized_transaction_hash;
mod signed_intent_hash;

pub use intent_hash::*;
pub use notarized_transaction_hash::*;
pub use signed_intent_hash::*;
