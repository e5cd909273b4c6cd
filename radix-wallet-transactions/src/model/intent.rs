use crate::internal_prelude::*;

/// A transaction intent: the manifest to execute plus the header describing
/// when, where and under which notary it is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIntent {
    pub header: TransactionHeader,
    pub manifest: TransactionManifest,
    pub message: TransactionMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentCreationError {
    MismatchedNetwork {
        expected: NetworkId,
        actual: NetworkId,
    },
}

impl fmt::Display for IntentCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MismatchedNetwork { expected, actual } => write!(
                f,
                "Header is for network {} but manifest is for network {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for IntentCreationError {}

impl TransactionIntent {
    pub fn new(
        header: TransactionHeader,
        manifest: TransactionManifest,
        message: TransactionMessage,
    ) -> Result<Self, IntentCreationError> {
        if header.network_id != manifest.network_id {
            return Err(IntentCreationError::MismatchedNetwork {
                expected: header.network_id,
                actual: manifest.network_id,
            });
        }
        Ok(Self {
            header,
            manifest,
            message,
        })
    }

    pub fn network_id(&self) -> NetworkId {
        self.header.network_id
    }

    pub fn to_payload_bytes(&self) -> Vec<u8> {
        let mut encoder = PayloadEncoder::new(TransactionDiscriminator::V1Intent);
        self.header.write_to(&mut encoder);
        self.manifest.write_to(&mut encoder);
        self.message.write_to(&mut encoder);
        encoder.into_bytes()
    }
}

impl HasIntentHash for TransactionIntent {
    fn intent_hash(&self) -> IntentHash {
        IntentHash::from_hash(hash(self.to_payload_bytes()))
    }
}

impl HasSampleValues for TransactionIntent {
    fn sample() -> Self {
        Self::new(
            TransactionHeader::sample(),
            TransactionManifest::sample(),
            TransactionMessage::sample(),
        )
        .expect("samples share a network")
    }

    fn sample_other() -> Self {
        let mut header = TransactionHeader::sample_other();
        header.network_id = NetworkId::Mainnet;
        Self::new(
            header,
            TransactionManifest::sample_other(),
            TransactionMessage::None,
        )
        .expect("samples share a network")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_mismatch_is_rejected() {
        let mut header = TransactionHeader::sample();
        header.network_id = NetworkId::Stokenet;
        assert_eq!(
            TransactionIntent::new(
                header,
                TransactionManifest::sample(),
                TransactionMessage::None
            ),
            Err(IntentCreationError::MismatchedNetwork {
                expected: NetworkId::Stokenet,
                actual: NetworkId::Mainnet,
            })
        );
    }

    #[test]
    fn intent_hash_is_deterministic() {
        assert_eq!(
            TransactionIntent::sample().intent_hash(),
            TransactionIntent::sample().intent_hash()
        );
        assert_ne!(
            TransactionIntent::sample().intent_hash(),
            TransactionIntent::sample_other().intent_hash()
        );
    }

    #[test]
    fn message_changes_the_hash() {
        let with_message = TransactionIntent::sample();
        let mut without_message = with_message.clone();
        without_message.message = TransactionMessage::None;
        assert_ne!(with_message.intent_hash(), without_message.intent_hash());
    }
}
