use super::{Ed25519PublicKey, Ed25519Signature};
use crate::internal_prelude::*;
use ed25519_dalek::{Signer, SigningKey};

pub struct Ed25519PrivateKey(SigningKey);

impl Ed25519PrivateKey {
    pub const LENGTH: usize = 32;

    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.0.verifying_key().to_bytes())
    }

    pub fn sign(&self, msg_hash: &impl IsHash) -> Ed25519Signature {
        Ed25519Signature(self.0.sign(msg_hash.as_ref()).to_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn from_hex(s: &str) -> Result<Self, ()> {
        hex::decode(s)
            .map_err(|_| ())
            .and_then(|v| Self::from_bytes(&v))
    }

    pub fn from_bytes(slice: &[u8]) -> Result<Self, ()> {
        if slice.len() != Ed25519PrivateKey::LENGTH {
            return Err(());
        }
        let bytes: [u8; Self::LENGTH] = slice.try_into().map_err(|_| ())?;
        Ok(Self(SigningKey::from_bytes(&bytes)))
    }

    pub fn from_u64(n: u64) -> Result<Self, ()> {
        let mut bytes = [0u8; Ed25519PrivateKey::LENGTH];
        (&mut bytes[Ed25519PrivateKey::LENGTH - 8..Ed25519PrivateKey::LENGTH])
            .copy_from_slice(&n.to_be_bytes());

        Ok(Self(SigningKey::from_bytes(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{hash, verify_ed25519};

    #[test]
    fn sign_and_verify() {
        let test_sk = "0000000000000000000000000000000000000000000000000000000000000001";
        let test_pk = "4cb5abf6ad79fbf5abbccafcc269d85cd2651ed4b885b5869f241aedf0a5ba29";
        let test_message_hash = hash("Test");
        let sk = Ed25519PrivateKey::from_hex(test_sk).unwrap();
        let pk = Ed25519PublicKey::from_str(test_pk).unwrap();

        assert_eq!(sk.public_key(), pk);
        let sig = sk.sign(&test_message_hash);
        assert!(verify_ed25519(&test_message_hash, &pk, &sig));
    }

    #[test]
    fn from_u64_is_deterministic() {
        let a = Ed25519PrivateKey::from_u64(1).unwrap();
        let b = Ed25519PrivateKey::from_u64(1).unwrap();
        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(
            a.to_bytes(),
            Ed25519PrivateKey::from_hex(
                "0000000000000000000000000000000000000000000000000000000000000001"
            )
            .unwrap()
            .to_bytes()
        );
    }
}
