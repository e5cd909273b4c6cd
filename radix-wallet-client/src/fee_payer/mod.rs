mod candidates;
mod selector;

pub use candidates::*;
pub use selector::*;
