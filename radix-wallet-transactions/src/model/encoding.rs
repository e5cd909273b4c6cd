use crate::internal_prelude::*;

/// First byte of every hashable transaction payload, `T` for transaction.
pub const TRANSACTION_HASHABLE_PAYLOAD_PREFIX: u8 = 0x54;

/// Discriminates the hashable payload kinds, so the hash of an intent can
/// never collide with the hash of a signed intent or a notarized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionDiscriminator {
    V1Intent = 1,
    V1SignedIntent = 2,
    V1Notarized = 3,
}

/// Writes the canonical byte form of a transaction part.
///
/// Fields are written in declaration order. Variable length fields carry a
/// little endian u32 length prefix, so distinct payloads have distinct bytes.
pub struct PayloadEncoder {
    buf: Vec<u8>,
}

impl PayloadEncoder {
    pub fn new(discriminator: TransactionDiscriminator) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.push(TRANSACTION_HASHABLE_PAYLOAD_PREFIX);
        buf.push(discriminator as u8);
        Self { buf }
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a length prefix followed by the raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.write_u32(bytes.len() as u32);
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_str(&mut self, value: &str) {
        self.write_bytes(value.as_bytes());
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

pub(crate) fn write_signature(encoder: &mut PayloadEncoder, signature: &Signature) {
    match signature {
        Signature::Secp256k1(signature) => {
            encoder.write_u8(0);
            encoder.write_bytes(&signature.to_vec());
        }
        Signature::Ed25519(signature) => {
            encoder.write_u8(1);
            encoder.write_bytes(&signature.to_vec());
        }
    }
}

pub(crate) fn write_signature_with_public_key(
    encoder: &mut PayloadEncoder,
    signature: &SignatureWithPublicKey,
) {
    match signature {
        SignatureWithPublicKey::Secp256k1 { signature } => {
            encoder.write_u8(0);
            encoder.write_bytes(&signature.to_vec());
        }
        SignatureWithPublicKey::Ed25519 {
            public_key,
            signature,
        } => {
            encoder.write_u8(1);
            encoder.write_bytes(&public_key.to_vec());
            encoder.write_bytes(&signature.to_vec());
        }
    }
}
