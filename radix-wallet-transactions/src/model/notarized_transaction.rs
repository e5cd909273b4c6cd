use crate::internal_prelude::*;

/// A signed intent sealed by the notary's signature, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotarizedTransaction {
    pub signed_intent: SignedTransactionIntent,
    pub notary_signature: Signature,
}

impl NotarizedTransaction {
    pub fn new(signed_intent: SignedTransactionIntent, notary_signature: Signature) -> Self {
        Self {
            signed_intent,
            notary_signature,
        }
    }

    pub fn to_payload_bytes(&self) -> Vec<u8> {
        let mut encoder = PayloadEncoder::new(TransactionDiscriminator::V1Notarized);
        encoder.write_bytes(&self.signed_intent.to_payload_bytes());
        write_signature(&mut encoder, &self.notary_signature);
        encoder.into_bytes()
    }

    pub fn to_raw(&self) -> RawNotarizedTransaction {
        self.to_payload_bytes().into()
    }
}

impl HasIntentHash for NotarizedTransaction {
    fn intent_hash(&self) -> IntentHash {
        self.signed_intent.intent_hash()
    }
}

impl HasSignedIntentHash for NotarizedTransaction {
    fn signed_intent_hash(&self) -> SignedIntentHash {
        self.signed_intent.signed_intent_hash()
    }
}

impl HasNotarizedTransactionHash for NotarizedTransaction {
    fn notarized_transaction_hash(&self) -> NotarizedTransactionHash {
        NotarizedTransactionHash::from_hash(hash(self.to_payload_bytes()))
    }
}

/// Raw byte form of a notarized transaction, exactly as submitted.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone)]
pub struct RawNotarizedTransaction(pub Vec<u8>);

impl RawNotarizedTransaction {
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for RawNotarizedTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl From<Vec<u8>> for RawNotarizedTransaction {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<RawNotarizedTransaction> for Vec<u8> {
    fn from(value: RawNotarizedTransaction) -> Self {
        value.0
    }
}
