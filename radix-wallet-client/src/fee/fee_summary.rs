use crate::internal_prelude::*;

/// Full cost breakdown of a transaction under preparation.
///
/// The first four components come from the preview receipt; the rest are the
/// wallet-added costs priced by [`FeeConstants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSummary {
    pub execution_cost: Decimal,
    pub finalization_cost: Decimal,
    pub storage_expansion_cost: Decimal,
    pub royalty_cost: Decimal,
    pub guarantees_cost: Decimal,
    pub signatures_cost: Decimal,
    pub lock_fee_cost: Decimal,
    pub notarizing_cost: Decimal,
}

impl FeeSummary {
    /// Everything priced in execution terms, wallet-added costs included.
    pub fn total_execution_cost(&self) -> Decimal {
        self.execution_cost
            + self.guarantees_cost
            + self.signatures_cost
            + self.lock_fee_cost
            + self.notarizing_cost
    }

    pub fn total(&self) -> Decimal {
        self.total_execution_cost()
            + self.finalization_cost
            + self.storage_expansion_cost
            + self.royalty_cost
    }
}

/// XRD already locked for fees by the manifest itself.
///
/// A contingent lock is only charged if the transaction succeeds, so it can
/// lower the worst case fee but never the guaranteed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeLocks {
    pub lock: Decimal,
    pub contingent_lock: Decimal,
}

impl FeeLocks {
    pub fn new(lock: Decimal, contingent_lock: Decimal) -> Self {
        Self {
            lock,
            contingent_lock,
        }
    }

    pub fn none() -> Self {
        Self::new(Decimal::zero(), Decimal::zero())
    }
}

impl HasSampleValues for FeeSummary {
    fn sample() -> Self {
        Self {
            execution_cost: dec!("0.3"),
            finalization_cost: dec!("0.1"),
            storage_expansion_cost: dec!("0.05"),
            royalty_cost: Decimal::zero(),
            guarantees_cost: Decimal::zero(),
            signatures_cost: Decimal::zero(),
            lock_fee_cost: Decimal::zero(),
            notarizing_cost: Decimal::zero(),
        }
    }

    fn sample_other() -> Self {
        Self {
            execution_cost: dec!("5"),
            finalization_cost: dec!("5"),
            storage_expansion_cost: dec!("5"),
            royalty_cost: dec!("10"),
            guarantees_cost: dec!("5"),
            signatures_cost: dec!("5"),
            lock_fee_cost: dec!("5"),
            notarizing_cost: dec!("5"),
        }
    }
}

impl HasSampleValues for FeeLocks {
    fn sample() -> Self {
        Self::none()
    }

    fn sample_other() -> Self {
        Self::new(dec!("25"), Decimal::zero())
    }
}
