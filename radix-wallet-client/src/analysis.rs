use crate::internal_prelude::*;

/// The profile entities a manifest touches, partitioned by how it touches
/// them. An account can appear in several partitions at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitiesInvolved {
    pub accounts_withdrawn_from: IndexSet<Account>,
    pub accounts_deposited_into: IndexSet<Account>,
    pub accounts_requiring_auth: IndexSet<Account>,
    pub personas_requiring_auth: IndexSet<Persona>,
}

impl EntitiesInvolved {
    /// Accounts first, then personas; signature collection and signer
    /// resolution both follow this order.
    pub fn entities_requiring_auth(&self) -> IndexSet<AccountOrPersona> {
        self.accounts_requiring_auth
            .iter()
            .cloned()
            .map(AccountOrPersona::from)
            .chain(
                self.personas_requiring_auth
                    .iter()
                    .cloned()
                    .map(AccountOrPersona::from),
            )
            .collect()
    }
}

/// Resolves the addresses a manifest references against the profile.
///
/// Addresses of accounts the profile does not own are dropped; they belong
/// to other parties and the wallet can neither sign for them nor pay fees
/// from them. A persona address the profile does not own is an error, since
/// personas never appear in a manifest unless the dApp got them from us.
pub struct EntityInvolvementAnalyzer {
    accounts_client: Arc<dyn AccountsClient>,
    personas_client: Arc<dyn PersonasClient>,
}

impl EntityInvolvementAnalyzer {
    pub fn new(
        accounts_client: Arc<dyn AccountsClient>,
        personas_client: Arc<dyn PersonasClient>,
    ) -> Self {
        Self {
            accounts_client,
            personas_client,
        }
    }

    pub async fn entities_involved(
        &self,
        manifest: &TransactionManifest,
    ) -> Result<EntitiesInvolved> {
        let summary = manifest.summary();
        let owned_accounts = self
            .accounts_client
            .accounts_on_network(manifest.network_id)
            .await?;
        let owned_personas = self
            .personas_client
            .personas_on_network(manifest.network_id)
            .await?;

        let owned = |addresses: &IndexSet<AccountAddress>| -> IndexSet<Account> {
            addresses
                .iter()
                .filter_map(|address| {
                    owned_accounts
                        .iter()
                        .find(|account| account.address == *address)
                        .cloned()
                })
                .collect()
        };

        let mut personas_requiring_auth = IndexSet::new();
        for address in &summary.addresses_of_personas_requiring_auth {
            let persona = owned_personas
                .iter()
                .find(|persona| persona.address == *address)
                .cloned()
                .ok_or(TransactionFailure::UnknownPersona { address: *address })?;
            personas_requiring_auth.insert(persona);
        }

        Ok(EntitiesInvolved {
            accounts_withdrawn_from: owned(&summary.addresses_of_accounts_withdrawn_from),
            accounts_deposited_into: owned(&summary.addresses_of_accounts_deposited_into),
            accounts_requiring_auth: owned(&summary.addresses_of_accounts_requiring_auth),
            personas_requiring_auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedAccounts(Vec<Account>);

    #[async_trait]
    impl AccountsClient for FixedAccounts {
        async fn accounts_on_network(
            &self,
            _network_id: NetworkId,
        ) -> Result<Vec<Account>, PortError> {
            Ok(self.0.clone())
        }
    }

    struct FixedPersonas(Vec<Persona>);

    #[async_trait]
    impl PersonasClient for FixedPersonas {
        async fn personas_on_network(
            &self,
            _network_id: NetworkId,
        ) -> Result<Vec<Persona>, PortError> {
            Ok(self.0.clone())
        }
    }

    fn analyzer(accounts: Vec<Account>, personas: Vec<Persona>) -> EntityInvolvementAnalyzer {
        EntityInvolvementAnalyzer::new(
            Arc::new(FixedAccounts(accounts)),
            Arc::new(FixedPersonas(personas)),
        )
    }

    fn transfer(from: &Account, to: &Account) -> TransactionManifest {
        let xrd = ResourceAddress::xrd(NetworkId::Mainnet);
        TransactionManifest::new(
            NetworkId::Mainnet,
            vec![
                Instruction::WithdrawFromAccount {
                    account_address: from.address,
                    resource_address: xrd,
                    amount: dec!("10"),
                },
                Instruction::DepositFromWorktop {
                    account_address: to.address,
                    resource_address: xrd,
                    amount: dec!("10"),
                },
            ],
        )
    }

    #[tokio::test]
    async fn partitions_owned_accounts() {
        let alice = Account::sample();
        let bob = Account::sample_other();
        let analyzer = analyzer(vec![alice.clone(), bob.clone()], Vec::new());

        let involved = analyzer
            .entities_involved(&transfer(&alice, &bob))
            .await
            .unwrap();

        assert_eq!(involved.accounts_withdrawn_from, indexset![alice.clone()]);
        assert_eq!(involved.accounts_deposited_into, indexset![bob]);
        assert_eq!(involved.accounts_requiring_auth, indexset![alice.clone()]);
        assert_eq!(
            involved.entities_requiring_auth(),
            indexset![AccountOrPersona::from(alice)]
        );
    }

    #[tokio::test]
    async fn unowned_accounts_are_dropped() {
        let alice = Account::sample();
        let stranger = Account::sample_other();
        // only alice is in the profile
        let analyzer = analyzer(vec![alice.clone()], Vec::new());

        let involved = analyzer
            .entities_involved(&transfer(&alice, &stranger))
            .await
            .unwrap();

        assert!(involved.accounts_deposited_into.is_empty());
        assert_eq!(involved.accounts_withdrawn_from, indexset![alice]);
    }

    #[tokio::test]
    async fn unknown_persona_is_an_error() {
        let satoshi = Persona::sample();
        let manifest = TransactionManifest::new(
            NetworkId::Mainnet,
            vec![Instruction::SetMetadata {
                address: satoshi.address.into(),
                key: "name".to_owned(),
                value: "Satoshi".to_owned(),
            }],
        );
        let analyzer = analyzer(Vec::new(), Vec::new());

        let result = analyzer.entities_involved(&manifest).await;
        assert!(matches!(
            result,
            Err(TransactionFailure::UnknownPersona { address }) if address == satoshi.address
        ));
    }

    #[tokio::test]
    async fn owned_persona_requires_auth() {
        let satoshi = Persona::sample();
        let manifest = TransactionManifest::new(
            NetworkId::Mainnet,
            vec![Instruction::SetMetadata {
                address: satoshi.address.into(),
                key: "name".to_owned(),
                value: "Satoshi".to_owned(),
            }],
        );
        let analyzer = analyzer(Vec::new(), vec![satoshi.clone()]);

        let involved = analyzer.entities_involved(&manifest).await.unwrap();
        assert_eq!(involved.personas_requiring_auth, indexset![satoshi.clone()]);
        assert_eq!(
            involved.entities_requiring_auth(),
            indexset![AccountOrPersona::from(satoshi)]
        );
    }
}
