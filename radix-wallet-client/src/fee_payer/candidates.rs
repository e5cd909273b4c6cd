use crate::internal_prelude::*;

/// An account able to pay fees, with the XRD balance backing that claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeePayerCandidate {
    pub account: Account,
    pub xrd_balance: Decimal,
}

impl FeePayerCandidate {
    pub fn new(account: Account, xrd_balance: Decimal) -> Self {
        Self {
            account,
            xrd_balance,
        }
    }
}

/// Loads every account that could pay fees, with balances read fresh from
/// ledger. Stale cached balances must not gate real spending.
pub struct FeePayerCandidatesProvider {
    accounts_client: Arc<dyn AccountsClient>,
    on_ledger_client: Arc<dyn OnLedgerEntitiesClient>,
}

impl FeePayerCandidatesProvider {
    pub fn new(
        accounts_client: Arc<dyn AccountsClient>,
        on_ledger_client: Arc<dyn OnLedgerEntitiesClient>,
    ) -> Self {
        Self {
            accounts_client,
            on_ledger_client,
        }
    }

    /// All accounts on the network holding any XRD, in profile order.
    /// Accounts without an XRD vault are skipped. A wallet with no XRD
    /// holding account at all cannot pay any fee, which is an error.
    pub async fn candidates(&self, network_id: NetworkId) -> Result<Vec<FeePayerCandidate>> {
        let accounts = self.accounts_client.accounts_on_network(network_id).await?;
        let balances = self
            .on_ledger_client
            .xrd_balances(
                network_id,
                accounts.iter().map(|account| account.address).collect(),
                CachingStrategy::ForceRefresh,
            )
            .await?;

        let candidates: Vec<FeePayerCandidate> = accounts
            .into_iter()
            .filter_map(|account| {
                balances
                    .get(&account.address)
                    .map(|balance| FeePayerCandidate::new(account, *balance))
            })
            .collect();

        if candidates.is_empty() {
            return Err(TransactionFailure::NoFeePayerCandidate);
        }
        Ok(candidates)
    }
}
