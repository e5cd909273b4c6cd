mod encoding;
mod hashes;
mod header;
mod intent;
mod message;
mod notarized_transaction;
mod signed_intent;

pub use encoding::*;
pub use hashes::*;
pub use header::*;
pub use intent::*;
pub use message::*;
pub use notarized_transaction::*;
pub use signed_intent::*;
