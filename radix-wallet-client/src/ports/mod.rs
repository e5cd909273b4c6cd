//! The seams between this crate and its host wallet.
//!
//! Everything the pipeline needs from the outside world (network reads,
//! profile reads, factor source resolution) enters through these traits, so
//! hosts can bring their own transports and tests can bring fixed data.

mod accounts;
mod factor_sources;
mod gateway;
mod on_ledger;
mod personas;

pub use accounts::*;
pub use factor_sources::*;
pub use gateway::*;
pub use on_ledger::*;
pub use personas::*;
