mod builder;
mod notarizer;

pub use builder::*;
pub use notarizer::*;
