use crate::internal_prelude::*;

/// A fully signed intent and the notary key that seals it.
pub struct NotarizeTransactionRequest {
    pub intent: TransactionIntent,
    pub intent_signatures: Vec<SignatureWithPublicKey>,
    pub notary_private_key: PrivateKey,
}

/// The sealed transaction in every shape submission needs: the model, the
/// raw payload for the gateway, and the id to track it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotarizeTransactionResponse {
    pub notarized_transaction: NotarizedTransaction,
    pub raw: RawNotarizedTransaction,
    pub transaction_id: IntentHash,
}

/// Seals a signed intent with the notary's signature.
///
/// The notary signs the hash of the signed intent, signatures included, so
/// it vouches for the exact signature set. The returned id is the intent
/// hash: it identifies the transaction regardless of who notarized it.
pub fn notarize_transaction(request: NotarizeTransactionRequest) -> NotarizeTransactionResponse {
    let signed_intent =
        SignedTransactionIntent::new(request.intent, request.intent_signatures);
    let notary_signature = request
        .notary_private_key
        .sign_without_public_key(&signed_intent.signed_intent_hash());
    let notarized_transaction = NotarizedTransaction::new(signed_intent, notary_signature);
    let raw = notarized_transaction.to_raw();
    let transaction_id = notarized_transaction.intent_hash();
    NotarizeTransactionResponse {
        notarized_transaction,
        raw,
        transaction_id,
    }
}
