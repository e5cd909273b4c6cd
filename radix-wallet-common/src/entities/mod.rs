mod display_name;
mod entity;
mod factors;
mod security_state;

pub use display_name::*;
pub use entity::*;
pub use factors::*;
pub use security_state::*;
