mod execution_summary;
mod receipt;
mod request;

pub use execution_summary::*;
pub use receipt::*;
pub use request::*;
