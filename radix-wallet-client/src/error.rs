use crate::internal_prelude::*;

/// Failure inside one of the ports the pipeline consumes, such as a gateway
/// request that timed out or a profile read that could not be served.
///
/// Adapters wrap their native error in here so the pipeline can surface it
/// without knowing anything about transports.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct PortError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PortError {
    pub fn new(message: impl AsRef<str>) -> Self {
        Self {
            message: message.as_ref().to_owned(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl AsRef<str>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.as_ref().to_owned(),
            source: Some(Box::new(source)),
        }
    }
}

/// Why a transaction could not be prepared for review or submission.
///
/// Note that an exhausted fee payer search is not represented here. Finding
/// no suitable payer among the involved accounts is an expected outcome that
/// asks the user to choose, so `determine_fee_payer` reports it as
/// `Ok(None)`; only a wallet without a single XRD holding account is an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum TransactionFailure {
    /// The manifest came from outside the wallet yet contains instructions
    /// only the wallet itself may add, such as a lock fee.
    #[error("manifest contains instructions reserved for the wallet")]
    ReservedInstructionsNotAllowed,

    #[error("one of the receiving accounts does not accept the deposit")]
    ReceivingAccountDisallowsDeposits,

    /// The preview engine rejected or failed the transaction for a reason
    /// the wallet has no dedicated handling for.
    #[error("transaction preview failed: {message}")]
    PreviewFailed { message: String },

    #[error("transaction preview produced no usable execution summary")]
    ReceiptExtractionFailed,

    /// No account on the network holds any XRD at all.
    #[error("no account holds XRD to pay the transaction fee")]
    NoFeePayerCandidate,

    /// The manifest requires auth from a persona this wallet does not own.
    #[error("persona {address} is not part of this wallet")]
    UnknownPersona { address: IdentityAddress },

    #[error("signers and intent header disagree on whether the notary is a signatory")]
    NotaryIsSignatoryDiscrepancy,

    #[error(transparent)]
    IntentCreation(#[from] IntentCreationError),

    #[error("a collaborating service failed")]
    Port(#[from] PortError),
}

pub type Result<T, E = TransactionFailure> = core::result::Result<T, E>;
