use crate::internal_prelude::*;

/// A transaction intent together with the signatures of all intent signers.
///
/// Signatures are over the intent hash. The notary is deliberately absent
/// here; its signature seals the hash of this whole structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransactionIntent {
    pub intent: TransactionIntent,
    pub intent_signatures: Vec<SignatureWithPublicKey>,
}

impl SignedTransactionIntent {
    pub fn new(
        intent: TransactionIntent,
        intent_signatures: Vec<SignatureWithPublicKey>,
    ) -> Self {
        Self {
            intent,
            intent_signatures,
        }
    }

    pub fn to_payload_bytes(&self) -> Vec<u8> {
        let mut encoder = PayloadEncoder::new(TransactionDiscriminator::V1SignedIntent);
        encoder.write_bytes(&self.intent.to_payload_bytes());
        encoder.write_u32(self.intent_signatures.len() as u32);
        for signature in &self.intent_signatures {
            write_signature_with_public_key(&mut encoder, signature);
        }
        encoder.into_bytes()
    }
}

impl HasIntentHash for SignedTransactionIntent {
    fn intent_hash(&self) -> IntentHash {
        self.intent.intent_hash()
    }
}

impl HasSignedIntentHash for SignedTransactionIntent {
    fn signed_intent_hash(&self) -> SignedIntentHash {
        SignedIntentHash::from_hash(hash(self.to_payload_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::Signer;

    #[test]
    fn signatures_change_the_signed_intent_hash_but_not_the_intent_hash() {
        let intent = TransactionIntent::sample();
        let signer = Ed25519PrivateKey::from_u64(1).unwrap();

        let unsigned = SignedTransactionIntent::new(intent.clone(), Vec::new());
        let signed = SignedTransactionIntent::new(
            intent.clone(),
            vec![signer.sign_with_public_key(&intent.intent_hash())],
        );

        assert_eq!(unsigned.intent_hash(), signed.intent_hash());
        assert_ne!(unsigned.signed_intent_hash(), signed.signed_intent_hash());
    }

    #[test]
    fn signature_order_matters() {
        let intent = TransactionIntent::sample();
        let hash = intent.intent_hash();
        let signature_1 = Ed25519PrivateKey::from_u64(1)
            .unwrap()
            .sign_with_public_key(&hash);
        let signature_2 = Ed25519PrivateKey::from_u64(2)
            .unwrap()
            .sign_with_public_key(&hash);

        let a = SignedTransactionIntent::new(
            intent.clone(),
            vec![signature_1.clone(), signature_2.clone()],
        );
        let b = SignedTransactionIntent::new(intent, vec![signature_2, signature_1]);
        assert_ne!(a.signed_intent_hash(), b.signed_intent_hash());
    }
}
