use crate::internal_prelude::*;

/// A type-safe epoch number, as reported by the network gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    /// Creates a zero epoch (i.e. pre-genesis).
    pub fn zero() -> Self {
        Self::of(0)
    }

    /// Creates an epoch of the given number.
    pub fn of(number: u64) -> Self {
        Self(number)
    }

    /// Returns a raw epoch number.
    pub fn number(&self) -> u64 {
        self.0
    }

    /// Creates an epoch following this one after the given number of epochs.
    /// Panics on overflow.
    pub fn after(&self, epoch_count: u64) -> Self {
        Self(
            self.0
                .checked_add(epoch_count)
                .expect("epoch window overflowed u64"),
        )
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_window() {
        let current = Epoch::of(1000);
        assert_eq!(current.after(10), Epoch::of(1010));
        assert_eq!(Epoch::zero().number(), 0);
    }
}
