#![allow(dead_code)]

use async_trait::async_trait;
use radix_wallet_client::prelude::*;
use std::sync::{Arc, Mutex};

/// Gateway double: fixed epoch, fixed preview response, and a log of every
/// preview request for assertions.
pub struct StubGateway {
    pub epoch: u64,
    pub response: TransactionPreviewResponse,
    pub seen_requests: Mutex<Vec<TransactionPreviewRequest>>,
}

impl StubGateway {
    pub fn new(epoch: u64, response: TransactionPreviewResponse) -> Self {
        Self {
            epoch,
            response,
            seen_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<TransactionPreviewRequest> {
        self.seen_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GatewayClient for StubGateway {
    async fn current_epoch(&self) -> Result<Epoch, PortError> {
        Ok(Epoch::of(self.epoch))
    }

    async fn preview_transaction(
        &self,
        request: TransactionPreviewRequest,
    ) -> Result<TransactionPreviewResponse, PortError> {
        self.seen_requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

pub struct StubAccounts(pub Vec<Account>);

#[async_trait]
impl AccountsClient for StubAccounts {
    async fn accounts_on_network(
        &self,
        _network_id: NetworkId,
    ) -> Result<Vec<Account>, PortError> {
        Ok(self.0.clone())
    }
}

pub struct StubPersonas(pub Vec<Persona>);

#[async_trait]
impl PersonasClient for StubPersonas {
    async fn personas_on_network(
        &self,
        _network_id: NetworkId,
    ) -> Result<Vec<Persona>, PortError> {
        Ok(self.0.clone())
    }
}

/// Serves balances from a fixed table; accounts absent from the table have
/// no XRD vault.
pub struct StubBalances(pub IndexMap<AccountAddress, Decimal>);

#[async_trait]
impl OnLedgerEntitiesClient for StubBalances {
    async fn xrd_balances(
        &self,
        _network_id: NetworkId,
        addresses: IndexSet<AccountAddress>,
        _caching: CachingStrategy,
    ) -> Result<IndexMap<AccountAddress, Decimal>, PortError> {
        Ok(addresses
            .into_iter()
            .filter_map(|address| self.0.get(&address).map(|balance| (address, *balance)))
            .collect())
    }
}

/// Resolves each signer to one signing factor under its own factor source.
pub struct StubFactorSources;

#[async_trait]
impl FactorSourcesClient for StubFactorSources {
    async fn signing_factors(
        &self,
        _network_id: NetworkId,
        signers: IndexSet<AccountOrPersona>,
        _purpose: SigningPurpose,
    ) -> Result<SigningFactors, PortError> {
        let factors = signers.into_iter().map(|entity| {
            let factor_instances = entity.transaction_signing_factor_instances();
            let id = factor_instances
                .first()
                .expect("test entities have a signing factor")
                .factor_source_id;
            SigningFactor::new(
                FactorSource::new(id, "Test Device"),
                vec![EntitySigner::new(entity, factor_instances)],
            )
        });
        Ok(SigningFactors::grouping(factors))
    }
}

/// What [`StubFactorSources`] would resolve for these entities, for building
/// request values without going through the port.
pub fn signing_factors_for(
    entities: impl IntoIterator<Item = AccountOrPersona>,
) -> SigningFactors {
    SigningFactors::grouping(entities.into_iter().map(|entity| {
        let factor_instances = entity.transaction_signing_factor_instances();
        let id = factor_instances
            .first()
            .expect("test entities have a signing factor")
            .factor_source_id;
        SigningFactor::new(
            FactorSource::new(id, "Test Device"),
            vec![EntitySigner::new(entity, factor_instances)],
        )
    }))
}

/// A mainnet account with a device-backed signing key derived from `key`.
pub fn account(name: &str, key: u64) -> Account {
    let private_key = Ed25519PrivateKey::from_u64(key).expect("hardcoded key is valid");
    let device_key = Ed25519PrivateKey::from_u64(999)
        .expect("hardcoded key is valid")
        .public_key()
        .into();
    let instance = HierarchicalDeterministicFactorInstance::new(
        FactorSourceId::from_public_key(FactorSourceKind::Device, &device_key),
        HierarchicalDeterministicPublicKey::new(
            private_key.public_key().into(),
            DerivationPath::for_account_transaction_signing(NetworkId::Mainnet, key as u32),
        ),
    );
    Account::new(
        DisplayName::new(name).expect("test name is valid"),
        instance,
        NetworkId::Mainnet,
    )
}

pub fn notary_public_key() -> PublicKey {
    Ed25519PrivateKey::from_u64(1000)
        .expect("hardcoded key is valid")
        .public_key()
        .into()
}

/// An account the profile does not own, only its address.
pub fn external_account_address(key: u64) -> AccountAddress {
    account("External", key).address
}

pub fn withdraw(from: &Account, amount: Decimal) -> Instruction {
    Instruction::WithdrawFromAccount {
        account_address: from.address,
        resource_address: ResourceAddress::xrd(NetworkId::Mainnet),
        amount,
    }
}

pub fn deposit(to_address: AccountAddress, amount: Decimal) -> Instruction {
    Instruction::DepositFromWorktop {
        account_address: to_address,
        resource_address: ResourceAddress::xrd(NetworkId::Mainnet),
        amount,
    }
}

pub fn create_proof(account: &Account) -> Instruction {
    Instruction::CreateProofFromAccount {
        account_address: account.address,
        resource_address: ResourceAddress::xrd(NetworkId::Mainnet),
        amount: dec!("1"),
    }
}

pub fn manifest(instructions: Vec<Instruction>) -> TransactionManifest {
    TransactionManifest::new(NetworkId::Mainnet, instructions)
}

/// A previewed transfer costing a fixed, easily recognizable amount.
pub fn transfer_execution_summary() -> ExecutionSummary {
    ExecutionSummary {
        manifest_class: ManifestClass::Transfer,
        execution_cost: dec!("0.3"),
        finalization_cost: dec!("0.1"),
        storage_expansion_cost: dec!("0.05"),
        royalty_cost: Decimal::zero(),
        fee_locks: FeeLocks::none(),
        deposits: Vec::new(),
        reserved_instructions: IndexSet::new(),
    }
}

pub fn client(
    gateway: Arc<StubGateway>,
    accounts: Vec<Account>,
    personas: Vec<Persona>,
    balances: IndexMap<AccountAddress, Decimal>,
) -> TransactionClient {
    TransactionClient::new(
        gateway,
        Arc::new(StubAccounts(accounts)),
        Arc::new(StubPersonas(personas)),
        Arc::new(StubBalances(balances)),
        Arc::new(StubFactorSources),
    )
}
