use crate::internal_prelude::*;

pub enum PrivateKey {
    Secp256k1(Secp256k1PrivateKey),
    Ed25519(Ed25519PrivateKey),
}

impl PrivateKey {
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Secp256k1(key) => key.public_key().into(),
            PrivateKey::Ed25519(key) => key.public_key().into(),
        }
    }
}

impl From<Secp256k1PrivateKey> for PrivateKey {
    fn from(key: Secp256k1PrivateKey) -> Self {
        Self::Secp256k1(key)
    }
}

impl From<Ed25519PrivateKey> for PrivateKey {
    fn from(key: Ed25519PrivateKey) -> Self {
        Self::Ed25519(key)
    }
}

pub trait Signer {
    fn sign_without_public_key(&self, message_hash: &impl IsHash) -> Signature;
    fn sign_with_public_key(&self, message_hash: &impl IsHash) -> SignatureWithPublicKey;
}

impl Signer for Secp256k1PrivateKey {
    fn sign_without_public_key(&self, message_hash: &impl IsHash) -> Signature {
        self.sign(message_hash).into()
    }

    fn sign_with_public_key(&self, message_hash: &impl IsHash) -> SignatureWithPublicKey {
        self.sign(message_hash).into()
    }
}

impl Signer for Ed25519PrivateKey {
    fn sign_without_public_key(&self, message_hash: &impl IsHash) -> Signature {
        self.sign(message_hash).into()
    }

    fn sign_with_public_key(&self, message_hash: &impl IsHash) -> SignatureWithPublicKey {
        (self.public_key(), self.sign(message_hash)).into()
    }
}

impl Signer for PrivateKey {
    fn sign_without_public_key(&self, message_hash: &impl IsHash) -> Signature {
        match self {
            PrivateKey::Secp256k1(key) => key.sign_without_public_key(message_hash),
            PrivateKey::Ed25519(key) => key.sign_without_public_key(message_hash),
        }
    }

    fn sign_with_public_key(&self, message_hash: &impl IsHash) -> SignatureWithPublicKey {
        match self {
            PrivateKey::Secp256k1(key) => key.sign_with_public_key(message_hash),
            PrivateKey::Ed25519(key) => key.sign_with_public_key(message_hash),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_key_enum_dispatches_to_the_curve() {
        let intent_hash = TransactionIntent::sample().intent_hash();

        let ed25519 = PrivateKey::from(Ed25519PrivateKey::from_u64(1).unwrap());
        match ed25519.sign_with_public_key(&intent_hash) {
            SignatureWithPublicKey::Ed25519 {
                public_key,
                signature,
            } => assert!(verify_ed25519(&intent_hash, &public_key, &signature)),
            _ => panic!("expected an Ed25519 signature"),
        }

        let secp256k1 = PrivateKey::from(Secp256k1PrivateKey::from_u64(1).unwrap());
        match secp256k1.sign_without_public_key(&intent_hash) {
            Signature::Secp256k1(signature) => {
                let recovered = verify_and_recover_secp256k1(&intent_hash, &signature)
                    .expect("signature recovers");
                assert_eq!(PublicKey::from(recovered), secp256k1.public_key());
            }
            _ => panic!("expected a secp256k1 signature"),
        }
    }
}
