use crate::internal_prelude::*;
use async_trait::async_trait;

/// Read access to the accounts of the active profile.
#[async_trait]
pub trait AccountsClient: Send + Sync {
    /// All accounts on the given network, in profile order. Fee payer
    /// candidates inherit this order.
    async fn accounts_on_network(&self, network_id: NetworkId) -> Result<Vec<Account>, PortError>;
}
