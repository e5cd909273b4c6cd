use crate::internal_prelude::*;

/// Fixed costs of the wallet-added parts of a transaction.
///
/// The preview runs against a manifest that has no lock fee instruction, no
/// guarantees and no signatures yet, so the receipt cannot price them. These
/// constants mirror what the network charges for each and are added on top
/// of the previewed costs.
pub struct FeeConstants;

impl FeeConstants {
    /// Multiplier padding the network fee against execution cost variance
    /// between preview and submission.
    pub fn network_fee_multiplier() -> Decimal {
        dec!("0.15")
    }

    pub fn lock_fee_instruction_cost() -> Decimal {
        dec!("0.08581566997")
    }

    pub fn fungible_guarantee_instruction_cost() -> Decimal {
        dec!("0.00908532837")
    }

    pub fn non_fungible_guarantee_instruction_cost() -> Decimal {
        dec!("0.00954602837")
    }

    pub fn signature_cost() -> Decimal {
        dec!("0.01109974758")
    }

    fn notarizing_cost() -> Decimal {
        dec!("0.0081393944")
    }

    /// Notarizing is slightly more expensive when the notary signature also
    /// counts as an intent signature.
    fn notarizing_cost_when_notary_is_signatory() -> Decimal {
        dec!("0.0084273944")
    }

    pub fn notarizing_cost_for(notary_is_signatory: bool) -> Decimal {
        if notary_is_signatory {
            Self::notarizing_cost_when_notary_is_signatory()
        } else {
            Self::notarizing_cost()
        }
    }

    pub fn signatures_cost(signatures_count: usize) -> Decimal {
        Decimal::from(signatures_count as u64) * Self::signature_cost()
    }
}
