use crate::internal_prelude::*;

/// The fee as presented in normal mode: a padded network fee and the
/// royalties, with manifest fee locks already credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalFeeCustomization {
    pub network_fee: Decimal,
    pub royalty_fee: Decimal,
    pub total: Decimal,
}

impl NormalFeeCustomization {
    pub fn new(fee_summary: &FeeSummary, fee_locks: &FeeLocks) -> Self {
        let network_fee = (fee_summary.total_execution_cost()
            + fee_summary.finalization_cost
            + fee_summary.storage_expansion_cost)
            * (Decimal::one() + FeeConstants::network_fee_multiplier());
        // The non contingent lock pays the network fee first; whatever is
        // left over goes towards royalties.
        let remaining_lock = (fee_locks.lock - network_fee).clamped_to_zero();
        let network_fee = (network_fee - fee_locks.lock).clamped_to_zero();
        let royalty_fee = (fee_summary.royalty_cost - remaining_lock).clamped_to_zero();
        Self {
            network_fee,
            royalty_fee,
            total: network_fee + royalty_fee,
        }
    }
}

/// The fee as presented in advanced mode: the raw previewed total plus an
/// explicit padding and a user chosen tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedFeeCustomization {
    fee_summary: FeeSummary,
    fee_locks: FeeLocks,
    pub padding_fee: Decimal,
    pub tip_percentage: u16,
}

impl AdvancedFeeCustomization {
    pub fn new(fee_summary: FeeSummary, fee_locks: FeeLocks) -> Self {
        let padding_fee = (fee_summary.total_execution_cost()
            + fee_summary.finalization_cost
            + fee_summary.storage_expansion_cost)
            * FeeConstants::network_fee_multiplier();
        Self {
            fee_summary,
            fee_locks,
            padding_fee,
            tip_percentage: 0,
        }
    }

    pub fn with_tip_percentage(mut self, tip_percentage: u16) -> Self {
        self.tip_percentage = tip_percentage;
        self
    }

    /// The tip applies to execution and finalization only; storage and
    /// royalties earn validators nothing extra.
    pub fn tip_amount(&self) -> Decimal {
        (self.fee_summary.total_execution_cost() + self.fee_summary.finalization_cost)
            * Decimal::from(self.tip_percentage)
            / 100
    }

    /// Negative: locks in the manifest were paid for by someone else.
    pub fn paid_by_dapps(&self) -> Decimal {
        -self.fee_locks.lock
    }

    pub fn total(&self) -> Decimal {
        (self.fee_summary.total() + self.padding_fee + self.tip_amount() + self.paid_by_dapps())
            .clamped_to_zero()
    }
}

/// Which of the two fee presentations the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeMode {
    Normal(NormalFeeCustomization),
    Advanced(AdvancedFeeCustomization),
}

/// The fee range to display and to lock.
///
/// `min` and `max` differ only in normal mode with contingent locks in
/// play, since a contingent lock is returned when the transaction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalFee {
    pub min: Decimal,
    pub max: Decimal,
}

impl TotalFee {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// The amount the fee payer must be able to lock.
    pub fn lock_fee(&self) -> Decimal {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_mode_pads_network_costs() {
        let customization =
            NormalFeeCustomization::new(&FeeSummary::sample_other(), &FeeLocks::none());
        assert_eq!(customization.network_fee, dec!("40.25"));
        assert_eq!(customization.royalty_fee, dec!("10"));
        assert_eq!(customization.total, dec!("50.25"));
    }

    #[test]
    fn normal_mode_credits_the_lock_against_the_network_fee() {
        let customization = NormalFeeCustomization::new(
            &FeeSummary::sample_other(),
            &FeeLocks::new(dec!("10"), Decimal::zero()),
        );
        assert_eq!(customization.network_fee, dec!("30.25"));
        assert_eq!(customization.royalty_fee, dec!("10"));
        assert_eq!(customization.total, dec!("40.25"));
    }

    #[test]
    fn normal_mode_lock_surplus_goes_to_royalties() {
        let customization = NormalFeeCustomization::new(
            &FeeSummary::sample_other(),
            &FeeLocks::new(dec!("41"), Decimal::zero()),
        );
        assert_eq!(customization.network_fee, Decimal::zero());
        assert_eq!(customization.royalty_fee, dec!("9.25"));
        assert_eq!(customization.total, dec!("9.25"));
    }

    #[test]
    fn advanced_mode_exposes_padding_and_tip() {
        let customization =
            AdvancedFeeCustomization::new(FeeSummary::sample_other(), FeeLocks::none());
        assert_eq!(customization.padding_fee, dec!("5.25"));
        assert_eq!(customization.tip_amount(), Decimal::zero());
        assert_eq!(customization.total(), dec!("50.25"));
    }

    #[test]
    fn advanced_mode_tip_and_dapp_locks() {
        let customization = AdvancedFeeCustomization::new(
            FeeSummary::sample_other(),
            FeeLocks::new(dec!("7"), Decimal::zero()),
        )
        .with_tip_percentage(10);
        assert_eq!(customization.tip_amount(), dec!("3"));
        assert_eq!(customization.paid_by_dapps(), dec!("-7"));
        assert_eq!(customization.total(), dec!("46.25"));
    }

    #[test]
    fn advanced_mode_total_never_goes_negative() {
        let customization = AdvancedFeeCustomization::new(
            FeeSummary::sample(),
            FeeLocks::new(dec!("1000"), Decimal::zero()),
        );
        assert_eq!(customization.total(), Decimal::zero());
    }
}
