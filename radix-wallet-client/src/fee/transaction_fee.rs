use crate::internal_prelude::*;

/// The fee of a transaction under preparation.
///
/// Immutable. Every adjustment returns a new value with the active mode's
/// customization recomputed from the adjusted summary, so a fee handed to
/// the UI or to fee payer selection can never be observed mid update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFee {
    pub fee_summary: FeeSummary,
    pub fee_locks: FeeLocks,
    pub mode: FeeMode,
}

impl TransactionFee {
    /// Starts out in normal mode.
    pub fn new(fee_summary: FeeSummary, fee_locks: FeeLocks) -> Self {
        Self {
            fee_summary,
            fee_locks,
            mode: FeeMode::Normal(NormalFeeCustomization::new(&fee_summary, &fee_locks)),
        }
    }

    /// Prices a previewed transaction, adding the wallet side costs the
    /// receipt cannot know about.
    pub fn from_execution_summary(
        execution_summary: &ExecutionSummary,
        signatures_count: usize,
        notary_is_signatory: bool,
        include_lock_fee: bool,
    ) -> Self {
        let fee_summary = FeeSummary {
            execution_cost: execution_summary.execution_cost,
            finalization_cost: execution_summary.finalization_cost,
            storage_expansion_cost: execution_summary.storage_expansion_cost,
            royalty_cost: execution_summary.royalty_cost,
            guarantees_cost: execution_summary.guarantees_cost(),
            signatures_cost: FeeConstants::signatures_cost(signatures_count),
            lock_fee_cost: if include_lock_fee {
                FeeConstants::lock_fee_instruction_cost()
            } else {
                Decimal::zero()
            },
            notarizing_cost: FeeConstants::notarizing_cost_for(notary_is_signatory),
        };
        Self::new(fee_summary, execution_summary.fee_locks)
    }

    pub fn with_lock_fee_cost(&self) -> Self {
        let mut fee_summary = self.fee_summary;
        fee_summary.lock_fee_cost = FeeConstants::lock_fee_instruction_cost();
        self.rebuilt(fee_summary)
    }

    pub fn with_notarizing_cost(&self, notary_is_signatory: bool) -> Self {
        let mut fee_summary = self.fee_summary;
        fee_summary.notarizing_cost = FeeConstants::notarizing_cost_for(notary_is_signatory);
        self.rebuilt(fee_summary)
    }

    pub fn with_signatures_cost(&self, signatures_count: usize) -> Self {
        let mut fee_summary = self.fee_summary;
        fee_summary.signatures_cost = FeeConstants::signatures_cost(signatures_count);
        self.rebuilt(fee_summary)
    }

    /// Switches between the normal and advanced presentation. Advanced mode
    /// starts over from the current summary with no tip.
    pub fn with_mode_toggled(&self) -> Self {
        let mode = match self.mode {
            FeeMode::Normal(_) => FeeMode::Advanced(AdvancedFeeCustomization::new(
                self.fee_summary,
                self.fee_locks,
            )),
            FeeMode::Advanced(_) => FeeMode::Normal(NormalFeeCustomization::new(
                &self.fee_summary,
                &self.fee_locks,
            )),
        };
        Self { mode, ..*self }
    }

    pub fn total_fee(&self) -> TotalFee {
        match &self.mode {
            FeeMode::Normal(customization) => {
                let max = customization.total;
                let min = (max - self.fee_locks.contingent_lock).clamped_to_zero();
                TotalFee::new(min, max)
            }
            FeeMode::Advanced(customization) => {
                let total = customization.total();
                TotalFee::new(total, total)
            }
        }
    }

    /// Recomputes the active mode's customization for an adjusted summary,
    /// keeping a chosen tip in place.
    fn rebuilt(&self, fee_summary: FeeSummary) -> Self {
        let mode = match &self.mode {
            FeeMode::Normal(_) => {
                FeeMode::Normal(NormalFeeCustomization::new(&fee_summary, &self.fee_locks))
            }
            FeeMode::Advanced(customization) => FeeMode::Advanced(
                AdvancedFeeCustomization::new(fee_summary, self.fee_locks)
                    .with_tip_percentage(customization.tip_percentage),
            ),
        };
        Self {
            fee_summary,
            fee_locks: self.fee_locks,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn previewed() -> ExecutionSummary {
        ExecutionSummary {
            manifest_class: ManifestClass::Transfer,
            execution_cost: dec!("0.3"),
            finalization_cost: dec!("0.1"),
            storage_expansion_cost: dec!("0.05"),
            royalty_cost: Decimal::zero(),
            fee_locks: FeeLocks::none(),
            deposits: vec![AccountDeposit {
                account_address: AccountAddress::sample(),
                resource_address: ResourceAddress::sample(),
                amount: dec!("100"),
                certainty: DepositCertainty::Predicted,
            }],
            reserved_instructions: IndexSet::new(),
        }
    }

    #[test]
    fn from_execution_summary_prices_wallet_costs() {
        let fee = TransactionFee::from_execution_summary(&previewed(), 2, false, true);
        assert_eq!(fee.fee_summary.execution_cost, dec!("0.3"));
        assert_eq!(fee.fee_summary.guarantees_cost, dec!("0.00908532837"));
        assert_eq!(fee.fee_summary.signatures_cost, dec!("0.02219949516"));
        assert_eq!(fee.fee_summary.lock_fee_cost, dec!("0.08581566997"));
        assert_eq!(fee.fee_summary.notarizing_cost, dec!("0.0081393944"));
        assert!(matches!(fee.mode, FeeMode::Normal(_)));
    }

    #[test]
    fn excluded_lock_fee_costs_nothing() {
        let fee = TransactionFee::from_execution_summary(&previewed(), 1, true, false);
        assert_eq!(fee.fee_summary.lock_fee_cost, Decimal::zero());
        assert_eq!(fee.fee_summary.notarizing_cost, dec!("0.0084273944"));
    }

    #[test]
    fn lock_fee_and_notarizing_costs_can_be_repriced() {
        let fee = TransactionFee::from_execution_summary(&previewed(), 1, false, false);
        let locked = fee.with_lock_fee_cost();
        assert_eq!(
            locked.fee_summary.lock_fee_cost,
            FeeConstants::lock_fee_instruction_cost()
        );
        let notarized = locked.with_notarizing_cost(true);
        assert_eq!(notarized.fee_summary.notarizing_cost, dec!("0.0084273944"));
        // repricing is idempotent
        assert_eq!(
            notarized.with_lock_fee_cost().with_notarizing_cost(true),
            notarized
        );
    }

    #[test]
    fn signature_cost_update_is_pure() {
        let fee = TransactionFee::from_execution_summary(&previewed(), 1, false, false);
        let updated = fee.with_signatures_cost(2);
        assert_eq!(
            fee.fee_summary.signatures_cost,
            FeeConstants::signatures_cost(1)
        );
        assert_eq!(
            updated.fee_summary.signatures_cost,
            FeeConstants::signatures_cost(2)
        );
        assert!(updated.total_fee().max > fee.total_fee().max);
    }

    #[test]
    fn normal_mode_total_reflects_contingent_lock() {
        let fee = TransactionFee::new(
            FeeSummary::sample_other(),
            FeeLocks::new(Decimal::zero(), dec!("2")),
        );
        let total = fee.total_fee();
        assert_eq!(total.max, dec!("50.25"));
        assert_eq!(total.min, dec!("48.25"));
        assert_eq!(total.lock_fee(), dec!("50.25"));
    }

    #[test]
    fn advanced_mode_has_a_fixed_total() {
        let fee = TransactionFee::new(FeeSummary::sample_other(), FeeLocks::none())
            .with_mode_toggled();
        let total = fee.total_fee();
        assert_eq!(total.min, total.max);
        assert_eq!(total.max, dec!("50.25"));
    }

    #[test]
    fn toggling_twice_lands_back_in_normal_mode() {
        let fee = TransactionFee::new(FeeSummary::sample_other(), FeeLocks::none());
        let toggled = fee.with_mode_toggled().with_mode_toggled();
        assert_eq!(toggled, fee);
    }

    #[test]
    fn adjustments_preserve_an_advanced_tip() {
        let fee = TransactionFee::from_execution_summary(&previewed(), 1, false, false)
            .with_mode_toggled();
        let fee = match fee.mode {
            FeeMode::Advanced(customization) => TransactionFee {
                mode: FeeMode::Advanced(customization.with_tip_percentage(10)),
                ..fee
            },
            FeeMode::Normal(_) => unreachable!(),
        };
        let updated = fee.with_signatures_cost(3);
        match updated.mode {
            FeeMode::Advanced(customization) => {
                assert_eq!(customization.tip_percentage, 10)
            }
            FeeMode::Normal(_) => unreachable!(),
        }
    }
}
