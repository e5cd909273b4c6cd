use crate::internal_prelude::*;

/// What kind of transaction the preview engine recognized the manifest as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestClass {
    /// Anything without a more specific classification.
    General,
    /// Moves resources between accounts and does nothing else.
    Transfer,
    PoolContribution,
    PoolRedemption,
    ValidatorStake,
    ValidatorUnstake,
    AccountDepositSettingsUpdate,
}

impl ManifestClass {
    /// Deposit guarantees are only offered for transfers and general
    /// manifests; the other classes have fully determined outputs.
    pub fn supports_guarantees(&self) -> bool {
        matches!(self, Self::General | Self::Transfer)
    }
}

/// Whether a deposited amount is fixed by the manifest or an estimate the
/// wallet will back with a guarantee instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepositCertainty {
    Guaranteed,
    Predicted,
}

/// One deposit the simulation observed into an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDeposit {
    pub account_address: AccountAddress,
    pub resource_address: ResourceAddress,
    pub amount: Decimal,
    pub certainty: DepositCertainty,
}

/// Instructions only the wallet itself is allowed to add to a manifest.
///
/// Finding one of these in a manifest that came from a dApp means the dApp
/// is trying to impersonate the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedInstruction {
    AccountLockFee,
    AccountSecurify,
    IdentitySecurify,
    AccessControllerMethod,
}

/// Distilled result of simulating the manifest against the current ledger
/// state: what it costs, what it moves and what it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    pub manifest_class: ManifestClass,
    pub execution_cost: Decimal,
    pub finalization_cost: Decimal,
    pub storage_expansion_cost: Decimal,
    pub royalty_cost: Decimal,
    pub fee_locks: FeeLocks,
    pub deposits: Vec<AccountDeposit>,
    pub reserved_instructions: IndexSet<ReservedInstruction>,
}

impl ExecutionSummary {
    /// Cost of the guarantee instructions the wallet will add, one per
    /// predicted deposit.
    pub fn guarantees_cost(&self) -> Decimal {
        if !self.manifest_class.supports_guarantees() {
            return Decimal::zero();
        }
        self.deposits
            .iter()
            .filter(|deposit| deposit.certainty == DepositCertainty::Predicted)
            .fold(Decimal::zero(), |cost, _| {
                cost + FeeConstants::fungible_guarantee_instruction_cost()
            })
    }
}

impl HasSampleValues for ExecutionSummary {
    fn sample() -> Self {
        Self {
            manifest_class: ManifestClass::Transfer,
            execution_cost: dec!("0.3"),
            finalization_cost: dec!("0.1"),
            storage_expansion_cost: dec!("0.05"),
            royalty_cost: Decimal::zero(),
            fee_locks: FeeLocks::none(),
            deposits: vec![AccountDeposit {
                account_address: AccountAddress::sample_other(),
                resource_address: ResourceAddress::sample(),
                amount: dec!("330"),
                certainty: DepositCertainty::Predicted,
            }],
            reserved_instructions: IndexSet::new(),
        }
    }

    fn sample_other() -> Self {
        Self {
            manifest_class: ManifestClass::General,
            execution_cost: dec!("1.2"),
            finalization_cost: dec!("0.4"),
            storage_expansion_cost: dec!("0.1"),
            royalty_cost: dec!("2"),
            fee_locks: FeeLocks::new(dec!("5"), Decimal::zero()),
            deposits: Vec::new(),
            reserved_instructions: indexset![ReservedInstruction::AccountLockFee],
        }
    }
}
