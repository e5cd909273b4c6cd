use crate::internal_prelude::*;

/// Switches the preview engine accepts.
///
/// The wallet previews with free credit so that costing works even before a
/// fee payer is known, and with real signature proofs so that auth failures
/// show up during review rather than at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFlags {
    pub use_free_credit: bool,
    pub assume_all_signature_proofs: bool,
    pub skip_epoch_check: bool,
}

impl Default for PreviewFlags {
    fn default() -> Self {
        Self {
            use_free_credit: true,
            assume_all_signature_proofs: false,
            skip_epoch_check: false,
        }
    }
}

/// A simulation request for the gateway's preview endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPreviewRequest {
    pub intent: TransactionIntent,
    pub signer_public_keys: Vec<PublicKey>,
    pub flags: PreviewFlags,
}

impl TransactionPreviewRequest {
    /// The header was built from the same signers, so a mismatch here means
    /// the caller mixed up two preparations.
    pub fn new(
        intent: TransactionIntent,
        signers: &TransactionSigners,
        flags: PreviewFlags,
    ) -> Result<Self> {
        if intent.header.notary_is_signatory != signers.notary_is_signatory() {
            return Err(TransactionFailure::NotaryIsSignatoryDiscrepancy);
        }
        Ok(Self {
            signer_public_keys: signers.signer_public_keys(),
            intent,
            flags,
        })
    }
}
