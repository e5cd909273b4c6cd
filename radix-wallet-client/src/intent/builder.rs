use crate::internal_prelude::*;
use tracing::debug;

/// Caller tunable parts of the intent header. Everything else is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeTransactionHeaderInput {
    /// How many epochs the intent stays valid for, starting at the current
    /// one. An epoch lasts a few minutes, so the default gives the user
    /// roughly half an hour to approve.
    pub epoch_window: u64,
    pub tip_percentage: u16,
}

impl Default for MakeTransactionHeaderInput {
    fn default() -> Self {
        Self {
            epoch_window: 10,
            tip_percentage: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTransactionIntentRequest {
    pub network_id: NetworkId,
    pub manifest: TransactionManifest,
    pub message: TransactionMessage,
    pub nonce: Nonce,
    pub notary_public_key: PublicKey,
    pub notary_is_signatory: bool,
    pub header_input: MakeTransactionHeaderInput,
}

/// Assembles signable intents, anchoring their validity window at the
/// network's current epoch.
pub struct TransactionIntentBuilder {
    gateway_client: Arc<dyn GatewayClient>,
}

impl TransactionIntentBuilder {
    pub fn new(gateway_client: Arc<dyn GatewayClient>) -> Self {
        Self { gateway_client }
    }

    pub async fn build_transaction_intent(
        &self,
        request: BuildTransactionIntentRequest,
    ) -> Result<TransactionIntent> {
        let current_epoch = self.gateway_client.current_epoch().await?;
        debug!(epoch = current_epoch.number(), "anchoring intent validity");
        let header = TransactionHeader {
            network_id: request.network_id,
            start_epoch_inclusive: current_epoch,
            end_epoch_exclusive: current_epoch.after(request.header_input.epoch_window),
            nonce: request.nonce,
            notary_public_key: request.notary_public_key,
            notary_is_signatory: request.notary_is_signatory,
            tip_percentage: request.header_input.tip_percentage,
        };
        Ok(TransactionIntent::new(
            header,
            request.manifest,
            request.message,
        )?)
    }
}
