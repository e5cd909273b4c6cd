use crate::internal_prelude::*;

/// The header of a transaction intent: network, validity window, nonce and
/// the notary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    pub network_id: NetworkId,
    pub start_epoch_inclusive: Epoch,
    pub end_epoch_exclusive: Epoch,
    pub nonce: Nonce,
    pub notary_public_key: PublicKey,
    /// When true the notary signature doubles as an intent signature and no
    /// separate intent signatures are collected.
    pub notary_is_signatory: bool,
    /// Percentage of the execution and finalization cost added as a tip to
    /// the validator, `0`..=`u16::MAX`.
    pub tip_percentage: u16,
}

impl TransactionHeader {
    pub(crate) fn write_to(&self, encoder: &mut PayloadEncoder) {
        encoder.write_u8(self.network_id.id());
        encoder.write_u64(self.start_epoch_inclusive.number());
        encoder.write_u64(self.end_epoch_exclusive.number());
        encoder.write_u32(self.nonce.value());
        match &self.notary_public_key {
            PublicKey::Secp256k1(key) => {
                encoder.write_u8(0);
                encoder.write_bytes(&key.to_vec());
            }
            PublicKey::Ed25519(key) => {
                encoder.write_u8(1);
                encoder.write_bytes(&key.to_vec());
            }
        }
        encoder.write_bool(self.notary_is_signatory);
        encoder.write_u16(self.tip_percentage);
    }
}

impl HasSampleValues for TransactionHeader {
    fn sample() -> Self {
        Self {
            network_id: NetworkId::Mainnet,
            start_epoch_inclusive: Epoch::of(76935),
            end_epoch_exclusive: Epoch::of(76945),
            nonce: Nonce::of(2371337),
            notary_public_key: Ed25519PrivateKey::from_u64(1337)
                .expect("hardcoded key is valid")
                .public_key()
                .into(),
            notary_is_signatory: true,
            tip_percentage: 0,
        }
    }

    fn sample_other() -> Self {
        Self {
            network_id: NetworkId::Stokenet,
            start_epoch_inclusive: Epoch::of(237),
            end_epoch_exclusive: Epoch::of(247),
            nonce: Nonce::of(421337237),
            notary_public_key: Ed25519PrivateKey::from_u64(42)
                .expect("hardcoded key is valid")
                .public_key()
                .into(),
            notary_is_signatory: false,
            tip_percentage: 5,
        }
    }
}
