use crate::internal_prelude::*;
use tracing::{debug, info};

/// A selected fee payer together with everything that changed to make the
/// selection hold. Taken together or not at all: the fee already prices the
/// payer's signature and the signers already collect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeePayerSelection {
    pub payer: Account,
    pub updated_fee: TransactionFee,
    pub updated_signers: TransactionSigners,
    pub updated_signing_factors: SigningFactors,
}

/// The candidates considered and, when one of the involved accounts could
/// cover the fee, the selection. `selection` is `None` when the wallet has
/// XRD but none of the involved accounts has enough; the user then picks a
/// payer from `candidates` themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetermineFeePayerResponse {
    pub candidates: Vec<FeePayerCandidate>,
    pub selection: Option<FeePayerSelection>,
}

/// Accounts involved in the transaction, tried as payers in order of how
/// natural it is for them to pay: spenders first, then receivers, then
/// accounts that merely have to sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CandidateTier {
    WithdrawnFrom,
    DepositedInto,
    RequiringAuth,
}

impl CandidateTier {
    const ALL: [Self; 3] = [Self::WithdrawnFrom, Self::DepositedInto, Self::RequiringAuth];

    fn members(&self, entities: &EntitiesInvolved) -> IndexSet<AccountAddress> {
        let accounts = match self {
            Self::WithdrawnFrom => &entities.accounts_withdrawn_from,
            Self::DepositedInto => &entities.accounts_deposited_into,
            Self::RequiringAuth => &entities.accounts_requiring_auth,
        };
        accounts.iter().map(|account| account.address).collect()
    }
}

/// Picks a fee payer among the accounts involved in the transaction.
pub struct FeePayerSelector {
    factor_sources_client: Arc<dyn FactorSourcesClient>,
}

impl FeePayerSelector {
    pub fn new(factor_sources_client: Arc<dyn FactorSourcesClient>) -> Self {
        Self {
            factor_sources_client,
        }
    }

    /// Walks the tiers strictly in order and takes the first candidate that
    /// can cover the fee, never reordering candidates within a tier.
    ///
    /// A candidate that already signs is checked against the fee as it
    /// stands. A candidate that does not must be added as a signer, which
    /// itself raises the fee, so the check runs against the re-estimated
    /// fee. Exhausting all tiers is not an error.
    pub async fn select(
        &self,
        network_id: NetworkId,
        fee: &TransactionFee,
        signers: &TransactionSigners,
        signing_factors: &SigningFactors,
        candidates: &[FeePayerCandidate],
        entities: &EntitiesInvolved,
    ) -> Result<Option<FeePayerSelection>> {
        for tier in CandidateTier::ALL {
            debug!(?tier, "searching fee payer tier");
            let members = tier.members(entities);
            for candidate in candidates
                .iter()
                .filter(|candidate| members.contains(&candidate.account.address))
            {
                if let Some(selection) = self
                    .try_candidate(network_id, fee, signers, signing_factors, candidate)
                    .await?
                {
                    info!(payer = %selection.payer.address, ?tier, "fee payer selected");
                    return Ok(Some(selection));
                }
            }
        }
        debug!("no involved account can cover the fee");
        Ok(None)
    }

    async fn try_candidate(
        &self,
        network_id: NetworkId,
        fee: &TransactionFee,
        signers: &TransactionSigners,
        signing_factors: &SigningFactors,
        candidate: &FeePayerCandidate,
    ) -> Result<Option<FeePayerSelection>> {
        let entity = AccountOrPersona::from(candidate.account.clone());

        if signers.contains(&entity) {
            if candidate.xrd_balance >= fee.total_fee().lock_fee() {
                return Ok(Some(FeePayerSelection {
                    payer: candidate.account.clone(),
                    updated_fee: *fee,
                    updated_signers: signers.clone(),
                    updated_signing_factors: signing_factors.clone(),
                }));
            }
            return Ok(None);
        }

        let updated_signers = signers.with_added_signer(entity);
        let updated_signing_factors = self
            .factor_sources_client
            .signing_factors(
                network_id,
                updated_signers.intent_signer_entities(),
                SigningPurpose::SignTransaction,
            )
            .await?;
        let updated_fee =
            fee.with_signatures_cost(updated_signing_factors.expected_signature_count());

        if candidate.xrd_balance >= updated_fee.total_fee().lock_fee() {
            return Ok(Some(FeePayerSelection {
                payer: candidate.account.clone(),
                updated_fee,
                updated_signers,
                updated_signing_factors,
            }));
        }
        Ok(None)
    }
}
