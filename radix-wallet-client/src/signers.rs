use crate::internal_prelude::*;

/// Whose signatures the intent will carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentSigning {
    /// Nothing in the manifest requires auth, so the notary's signature
    /// stands for the whole transaction.
    NotaryIsSignatory,
    /// The entities whose auth the manifest requires. Never empty.
    IntentSigners(IndexSet<AccountOrPersona>),
}

/// The signing arrangement of a transaction: its notary and, when the
/// manifest requires auth, the entities that must sign the intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSigners {
    pub notary_public_key: PublicKey,
    pub intent_signing: IntentSigning,
}

impl TransactionSigners {
    /// An empty entity set resolves to the notary acting as signatory.
    pub fn new(notary_public_key: PublicKey, entities: IndexSet<AccountOrPersona>) -> Self {
        let intent_signing = if entities.is_empty() {
            IntentSigning::NotaryIsSignatory
        } else {
            IntentSigning::IntentSigners(entities)
        };
        Self {
            notary_public_key,
            intent_signing,
        }
    }

    pub fn resolving(entities_involved: &EntitiesInvolved, notary_public_key: PublicKey) -> Self {
        Self::new(notary_public_key, entities_involved.entities_requiring_auth())
    }

    pub fn notary_is_signatory(&self) -> bool {
        matches!(self.intent_signing, IntentSigning::NotaryIsSignatory)
    }

    /// The entities that will sign the intent; empty when the notary is the
    /// signatory.
    pub fn intent_signer_entities(&self) -> IndexSet<AccountOrPersona> {
        match &self.intent_signing {
            IntentSigning::NotaryIsSignatory => IndexSet::new(),
            IntentSigning::IntentSigners(entities) => entities.clone(),
        }
    }

    pub fn contains(&self, entity: &AccountOrPersona) -> bool {
        match &self.intent_signing {
            IntentSigning::NotaryIsSignatory => false,
            IntentSigning::IntentSigners(entities) => entities.contains(entity),
        }
    }

    /// Returns a copy that also collects `entity`'s signature. Used when the
    /// chosen fee payer is not already a signer. The notary stops being the
    /// signatory the moment any entity signs.
    pub fn with_added_signer(&self, entity: AccountOrPersona) -> Self {
        let mut entities = self.intent_signer_entities();
        entities.insert(entity);
        Self::new(self.notary_public_key, entities)
    }

    /// The keys whose signatures the preview should assume, one per factor
    /// instance of each signer.
    pub fn signer_public_keys(&self) -> Vec<PublicKey> {
        match &self.intent_signing {
            IntentSigning::NotaryIsSignatory => Vec::new(),
            IntentSigning::IntentSigners(entities) => entities
                .iter()
                .flat_map(|entity| {
                    entity
                        .transaction_signing_factor_instances()
                        .into_iter()
                        .map(|instance| *instance.public_key())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notary() -> PublicKey {
        Ed25519PrivateKey::from_u64(1000)
            .expect("hardcoded key is valid")
            .public_key()
            .into()
    }

    #[test]
    fn no_auth_means_notary_is_signatory() {
        let signers = TransactionSigners::new(notary(), IndexSet::new());
        assert!(signers.notary_is_signatory());
        assert!(signers.intent_signer_entities().is_empty());
        assert!(signers.signer_public_keys().is_empty());
    }

    #[test]
    fn entities_become_intent_signers() {
        let alice = AccountOrPersona::from(Account::sample());
        let signers = TransactionSigners::new(notary(), indexset![alice.clone()]);
        assert!(!signers.notary_is_signatory());
        assert!(signers.contains(&alice));
        assert_eq!(signers.signer_public_keys().len(), 1);
    }

    #[test]
    fn adding_a_signer_displaces_the_notary() {
        let signers = TransactionSigners::new(notary(), IndexSet::new());
        let added = signers.with_added_signer(Account::sample().into());
        assert!(!added.notary_is_signatory());
        assert_eq!(added.intent_signer_entities().len(), 1);
        // the original is untouched
        assert!(signers.notary_is_signatory());
    }

    #[test]
    fn adding_an_existing_signer_changes_nothing() {
        let alice = AccountOrPersona::from(Account::sample());
        let signers = TransactionSigners::new(notary(), indexset![alice.clone()]);
        assert_eq!(signers.with_added_signer(alice), signers);
    }

    #[test]
    fn signer_order_is_preserved() {
        let alice = AccountOrPersona::from(Account::sample());
        let bob = AccountOrPersona::from(Account::sample_other());
        let signers =
            TransactionSigners::new(notary(), indexset![bob.clone(), alice.clone()]);
        assert_eq!(
            signers.intent_signer_entities().into_iter().collect::<Vec<_>>(),
            vec![bob, alice]
        );
    }
}
