use crate::internal_prelude::*;

/// Represents any natively supported public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PublicKey {
    Secp256k1(Secp256k1PublicKey),
    Ed25519(Ed25519PublicKey),
}

impl PublicKey {
    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            PublicKey::Secp256k1(key) => key.to_vec(),
            PublicKey::Ed25519(key) => key.to_vec(),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_vec())
    }
}

impl From<Secp256k1PublicKey> for PublicKey {
    fn from(public_key: Secp256k1PublicKey) -> Self {
        Self::Secp256k1(public_key)
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(public_key: Ed25519PublicKey) -> Self {
        Self::Ed25519(public_key)
    }
}
