use crate::internal_prelude::*;

/// An optional message attached to a transaction intent, readable by anyone
/// once the transaction is on ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransactionMessage {
    #[default]
    None,
    Plaintext(String),
}

impl TransactionMessage {
    pub fn plaintext(message: impl AsRef<str>) -> Self {
        Self::Plaintext(message.as_ref().to_owned())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub(crate) fn write_to(&self, encoder: &mut PayloadEncoder) {
        match self {
            Self::None => encoder.write_u8(0),
            Self::Plaintext(message) => {
                encoder.write_u8(1);
                encoder.write_str(message);
            }
        }
    }
}

impl HasSampleValues for TransactionMessage {
    fn sample() -> Self {
        Self::plaintext("Hello Radix!")
    }

    fn sample_other() -> Self {
        Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert!(TransactionMessage::default().is_none());
        assert!(!TransactionMessage::sample().is_none());
    }

    #[test]
    fn plaintext_and_none_encode_differently() {
        let encode = |message: &TransactionMessage| {
            let mut encoder = PayloadEncoder::new(TransactionDiscriminator::V1Intent);
            message.write_to(&mut encoder);
            encoder.into_bytes()
        };
        assert_ne!(
            encode(&TransactionMessage::None),
            encode(&TransactionMessage::plaintext(""))
        );
    }
}
