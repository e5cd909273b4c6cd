use crate::internal_prelude::*;

/// Represents a recoverable ECDSA Secp256k1 signature, serialized as
/// the recovery id followed by the 64 compact signature bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1Signature(pub [u8; Self::LENGTH]);

impl Secp256k1Signature {
    pub const LENGTH: usize = 65;

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Secp256k1Signature {
    type Error = ParseSecp256k1SignatureError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        if slice.len() != Secp256k1Signature::LENGTH {
            return Err(ParseSecp256k1SignatureError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; Self::LENGTH];
        bytes.copy_from_slice(slice);
        Ok(Secp256k1Signature(bytes))
    }
}

impl AsRef<[u8]> for Secp256k1Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//======
// error
//======

/// Represents an error when parsing ECDSA Secp256k1 signature from hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSecp256k1SignatureError {
    InvalidHex(String),
    InvalidLength(usize),
}

impl std::error::Error for ParseSecp256k1SignatureError {}

impl fmt::Display for ParseSecp256k1SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//======
// text
//======

impl FromStr for Secp256k1Signature {
    type Err = ParseSecp256k1SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes =
            hex::decode(s).map_err(|_| ParseSecp256k1SignatureError::InvalidHex(s.to_owned()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Secp256k1Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(self.to_vec()))
    }
}

impl fmt::Debug for Secp256k1Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}
