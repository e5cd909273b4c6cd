use crate::internal_prelude::*;
use async_trait::async_trait;

/// Network reads served by a Radix gateway.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    /// The network's current epoch, used to anchor intent validity windows.
    async fn current_epoch(&self) -> Result<Epoch, PortError>;

    /// Runs the intent through the preview endpoint without submitting it.
    async fn preview_transaction(
        &self,
        request: TransactionPreviewRequest,
    ) -> Result<TransactionPreviewResponse, PortError>;
}
