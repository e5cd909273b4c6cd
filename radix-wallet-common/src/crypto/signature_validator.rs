use crate::crypto::secp256k1::SECP256K1_CTX;
use crate::internal_prelude::*;

pub fn verify_and_recover_secp256k1(
    signed_hash: &impl IsHash,
    signature: &Secp256k1Signature,
) -> Option<Secp256k1PublicKey> {
    let recovery_id = signature.0[0];
    let signature_data = &signature.0[1..];
    if let Ok(id) = ::secp256k1::ecdsa::RecoveryId::from_i32(recovery_id.into()) {
        if let Ok(sig) = ::secp256k1::ecdsa::RecoverableSignature::from_compact(signature_data, id)
        {
            let msg = ::secp256k1::Message::from_digest_slice(signed_hash.as_ref())
                .expect("Hash is always a valid message");

            // The recover method also verifies the signature as part of the recovery process
            if let Ok(pk) = SECP256K1_CTX.recover_ecdsa(&msg, &sig) {
                return Some(Secp256k1PublicKey(pk.serialize()));
            }
        }
    }
    None
}

pub fn verify_secp256k1(
    signed_hash: &impl IsHash,
    public_key: &Secp256k1PublicKey,
    signature: &Secp256k1Signature,
) -> bool {
    let recovery_id = signature.0[0];
    let signature_data = &signature.0[1..];
    if ::secp256k1::ecdsa::RecoveryId::from_i32(recovery_id.into()).is_ok() {
        if let Ok(sig) = ::secp256k1::ecdsa::Signature::from_compact(signature_data) {
            if let Ok(pk) = ::secp256k1::PublicKey::from_slice(&public_key.0) {
                let msg = ::secp256k1::Message::from_digest_slice(signed_hash.as_ref())
                    .expect("Hash is always a valid message");
                return SECP256K1_CTX.verify_ecdsa(&msg, &sig, &pk).is_ok();
            }
        }
    }

    false
}

pub fn verify_ed25519(
    signed_hash: &impl IsHash,
    public_key: &Ed25519PublicKey,
    signature: &Ed25519Signature,
) -> bool {
    let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    if let Ok(pk) = ed25519_dalek::VerifyingKey::from_bytes(&public_key.0) {
        return pk.verify_strict(signed_hash.as_ref(), &sig).is_ok();
    }

    false
}
