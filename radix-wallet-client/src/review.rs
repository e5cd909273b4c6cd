use crate::internal_prelude::*;
use tracing::debug;

/// A manifest to prepare for user review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReviewRequest {
    pub manifest: TransactionManifest,
    pub message: TransactionMessage,
    pub nonce: Nonce,
    pub notary_public_key: PublicKey,
    /// Manifests built by the wallet itself may carry reserved instructions
    /// such as lock fee; manifests handed over by a dApp may not.
    pub is_wallet_transaction: bool,
}

/// Everything the approval screen needs: what the transaction does, what it
/// costs and who has to sign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionToReview {
    pub transaction_manifest: TransactionManifest,
    pub execution_summary: ExecutionSummary,
    pub network_id: NetworkId,
    pub transaction_fee: TransactionFee,
    pub transaction_signers: TransactionSigners,
    pub signing_factors: SigningFactors,
    pub entities_involved: EntitiesInvolved,
}

/// State carried from a reviewed transaction into fee payer selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetermineFeePayerRequest {
    pub network_id: NetworkId,
    pub transaction_fee: TransactionFee,
    pub transaction_signers: TransactionSigners,
    pub signing_factors: SigningFactors,
    pub entities_involved: EntitiesInvolved,
}

/// The transaction preparation pipeline.
///
/// Stateless apart from the injected ports; every call carries its whole
/// context in and out as values.
pub struct TransactionClient {
    gateway_client: Arc<dyn GatewayClient>,
    factor_sources_client: Arc<dyn FactorSourcesClient>,
    analyzer: EntityInvolvementAnalyzer,
    intent_builder: TransactionIntentBuilder,
    candidates_provider: FeePayerCandidatesProvider,
    selector: FeePayerSelector,
}

impl TransactionClient {
    pub fn new(
        gateway_client: Arc<dyn GatewayClient>,
        accounts_client: Arc<dyn AccountsClient>,
        personas_client: Arc<dyn PersonasClient>,
        on_ledger_client: Arc<dyn OnLedgerEntitiesClient>,
        factor_sources_client: Arc<dyn FactorSourcesClient>,
    ) -> Self {
        Self {
            analyzer: EntityInvolvementAnalyzer::new(
                accounts_client.clone(),
                personas_client,
            ),
            intent_builder: TransactionIntentBuilder::new(gateway_client.clone()),
            candidates_provider: FeePayerCandidatesProvider::new(
                accounts_client,
                on_ledger_client,
            ),
            selector: FeePayerSelector::new(factor_sources_client.clone()),
            gateway_client,
            factor_sources_client,
        }
    }

    /// Simulates the manifest and prices it.
    ///
    /// The signing arrangement is resolved before the preview so that the
    /// simulated intent matches the one that will eventually be submitted.
    /// The fee starts without a lock fee instruction; as soon as it turns
    /// out positive, one will be needed and the fee is rebuilt to include
    /// it, at which point the notary also stops being the signatory since
    /// the fee payer has to sign.
    pub async fn get_transaction_review(
        &self,
        request: TransactionReviewRequest,
    ) -> Result<TransactionToReview> {
        let network_id = request.manifest.network_id;
        let entities_involved = self.analyzer.entities_involved(&request.manifest).await?;
        let transaction_signers =
            TransactionSigners::resolving(&entities_involved, request.notary_public_key);

        let intent = self
            .intent_builder
            .build_transaction_intent(BuildTransactionIntentRequest {
                network_id,
                manifest: request.manifest.clone(),
                message: request.message.clone(),
                nonce: request.nonce,
                notary_public_key: request.notary_public_key,
                notary_is_signatory: transaction_signers.notary_is_signatory(),
                header_input: MakeTransactionHeaderInput::default(),
            })
            .await?;

        debug!(?network_id, "simulating manifest for review");
        let preview_request =
            TransactionPreviewRequest::new(intent, &transaction_signers, PreviewFlags::default())?;
        let response = self.gateway_client.preview_transaction(preview_request).await?;
        if let Some(failure) = response.receipt.failure() {
            return Err(failure);
        }
        let execution_summary = response
            .execution_summary
            .ok_or(TransactionFailure::ReceiptExtractionFailed)?;

        if !request.is_wallet_transaction
            && !execution_summary.reserved_instructions.is_empty()
        {
            return Err(TransactionFailure::ReservedInstructionsNotAllowed);
        }

        let signing_factors = match &transaction_signers.intent_signing {
            IntentSigning::NotaryIsSignatory => SigningFactors::empty(),
            IntentSigning::IntentSigners(entities) => {
                self.factor_sources_client
                    .signing_factors(network_id, entities.clone(), SigningPurpose::SignTransaction)
                    .await?
            }
        };

        // The notary's own signature is the only one when no entity signs.
        let signatures_count = if transaction_signers.notary_is_signatory() {
            1
        } else {
            signing_factors.expected_signature_count()
        };

        let mut transaction_fee = TransactionFee::from_execution_summary(
            &execution_summary,
            signatures_count,
            transaction_signers.notary_is_signatory(),
            false,
        );
        if transaction_fee.total_fee().lock_fee().is_positive() {
            transaction_fee = TransactionFee::from_execution_summary(
                &execution_summary,
                signatures_count,
                false,
                true,
            );
        }

        Ok(TransactionToReview {
            transaction_manifest: request.manifest,
            execution_summary,
            network_id,
            transaction_fee,
            transaction_signers,
            signing_factors,
            entities_involved,
        })
    }

    /// Tries to pick a fee payer among the involved accounts, reading every
    /// candidate's balance fresh. `selection` stays `None` when no involved
    /// account can cover the fee; the caller then asks the user to choose
    /// from `candidates`.
    pub async fn determine_fee_payer(
        &self,
        request: DetermineFeePayerRequest,
    ) -> Result<DetermineFeePayerResponse> {
        let candidates = self
            .candidates_provider
            .candidates(request.network_id)
            .await?;
        let selection = self
            .selector
            .select(
                request.network_id,
                &request.transaction_fee,
                &request.transaction_signers,
                &request.signing_factors,
                &candidates,
                &request.entities_involved,
            )
            .await?;
        Ok(DetermineFeePayerResponse {
            candidates,
            selection,
        })
    }

    pub async fn entities_involved(
        &self,
        manifest: &TransactionManifest,
    ) -> Result<EntitiesInvolved> {
        self.analyzer.entities_involved(manifest).await
    }

    pub async fn fee_payer_candidates(
        &self,
        network_id: NetworkId,
    ) -> Result<Vec<FeePayerCandidate>> {
        self.candidates_provider.candidates(network_id).await
    }

    pub async fn build_transaction_intent(
        &self,
        request: BuildTransactionIntentRequest,
    ) -> Result<TransactionIntent> {
        self.intent_builder.build_transaction_intent(request).await
    }

    pub fn notarize_transaction(
        &self,
        request: NotarizeTransactionRequest,
    ) -> NotarizeTransactionResponse {
        notarize_transaction(request)
    }
}
