use crate::internal_prelude::*;
use async_trait::async_trait;

/// How an on-ledger read may use the local entity cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachingStrategy {
    /// Serve from the cache when it holds a fresh enough answer.
    UseCache,
    /// Bypass the cache and overwrite it with the fetched state. Balance
    /// checks that gate real spending use this.
    ForceRefresh,
}

/// On-ledger entity state reads.
#[async_trait]
pub trait OnLedgerEntitiesClient: Send + Sync {
    /// XRD balance per account. Accounts without an XRD vault are absent
    /// from the result rather than reported as zero.
    async fn xrd_balances(
        &self,
        network_id: NetworkId,
        addresses: IndexSet<AccountAddress>,
        caching: CachingStrategy,
    ) -> Result<IndexMap<AccountAddress, Decimal>, PortError>;
}
