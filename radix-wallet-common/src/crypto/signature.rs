use crate::internal_prelude::*;

/// Represents any natively supported signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    Secp256k1(Secp256k1Signature),
    Ed25519(Ed25519Signature),
}

impl From<Secp256k1Signature> for Signature {
    fn from(signature: Secp256k1Signature) -> Self {
        Self::Secp256k1(signature)
    }
}

impl From<Ed25519Signature> for Signature {
    fn from(signature: Ed25519Signature) -> Self {
        Self::Ed25519(signature)
    }
}

/// Represents any natively supported signature, including public key.
///
/// Secp256k1 signatures are recoverable, so the public key is carried only
/// for the ED25519 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureWithPublicKey {
    Secp256k1 {
        signature: Secp256k1Signature,
    },
    Ed25519 {
        public_key: Ed25519PublicKey,
        signature: Ed25519Signature,
    },
}

impl SignatureWithPublicKey {
    pub fn signature(&self) -> Signature {
        match &self {
            Self::Secp256k1 { signature } => signature.clone().into(),
            Self::Ed25519 { signature, .. } => signature.clone().into(),
        }
    }
}

impl From<Secp256k1Signature> for SignatureWithPublicKey {
    fn from(signature: Secp256k1Signature) -> Self {
        Self::Secp256k1 { signature }
    }
}

impl From<(Ed25519PublicKey, Ed25519Signature)> for SignatureWithPublicKey {
    fn from((public_key, signature): (Ed25519PublicKey, Ed25519Signature)) -> Self {
        Self::Ed25519 {
            public_key,
            signature,
        }
    }
}
