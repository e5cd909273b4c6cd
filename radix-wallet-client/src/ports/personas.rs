use crate::internal_prelude::*;
use async_trait::async_trait;

/// Read access to the personas of the active profile.
#[async_trait]
pub trait PersonasClient: Send + Sync {
    /// All personas on the given network, in profile order.
    async fn personas_on_network(&self, network_id: NetworkId)
        -> Result<Vec<Persona>, PortError>;
}
