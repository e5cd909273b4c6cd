use crate::internal_prelude::*;

/// A transaction nonce. Not a sequence number: it only makes otherwise
/// identical intents distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce(u32);

impl Nonce {
    /// Creates a nonce of the given value.
    pub fn of(value: u32) -> Self {
        Self(value)
    }

    /// Creates a random nonce.
    pub fn random() -> Self {
        Self(rand::random::<u32>())
    }

    /// Returns the raw nonce value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
