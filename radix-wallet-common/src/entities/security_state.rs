use crate::internal_prelude::*;

/// How an entity is currently protected on ledger.
///
/// Unsecured entities are controlled by a single transaction signing key;
/// the variant is open for extension with multi-factor control.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntitySecurityState {
    Unsecured {
        transaction_signing: HierarchicalDeterministicFactorInstance,
    },
}

impl EntitySecurityState {
    pub fn unsecured(transaction_signing: HierarchicalDeterministicFactorInstance) -> Self {
        Self::Unsecured {
            transaction_signing,
        }
    }

    /// All factor instances able to sign transactions for the entity.
    pub fn transaction_signing_factor_instances(
        &self,
    ) -> IndexSet<HierarchicalDeterministicFactorInstance> {
        match self {
            Self::Unsecured {
                transaction_signing,
            } => IndexSet::from_iter([transaction_signing.clone()]),
        }
    }
}

impl HasSampleValues for EntitySecurityState {
    fn sample() -> Self {
        Self::unsecured(HierarchicalDeterministicFactorInstance::sample())
    }

    fn sample_other() -> Self {
        Self::unsecured(HierarchicalDeterministicFactorInstance::sample_other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsecured_exposes_single_signing_instance() {
        let instance = HierarchicalDeterministicFactorInstance::sample();
        let state = EntitySecurityState::unsecured(instance.clone());
        assert_eq!(
            state.transaction_signing_factor_instances(),
            IndexSet::<HierarchicalDeterministicFactorInstance>::from_iter([instance])
        );
    }
}
