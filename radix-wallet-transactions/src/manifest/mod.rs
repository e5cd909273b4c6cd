mod builder;
mod instruction;
mod manifest;
mod summary;

pub use builder::*;
pub use instruction::*;
pub use manifest::*;
pub use summary::*;
