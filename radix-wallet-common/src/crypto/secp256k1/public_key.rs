use crate::internal_prelude::*;

/// Represents a compressed ECDSA Secp256k1 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Secp256k1PublicKey(pub [u8; Self::LENGTH]);

impl Secp256k1PublicKey {
    pub const LENGTH: usize = 33;

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Secp256k1PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Secp256k1PublicKey {
    type Error = ParseSecp256k1PublicKeyError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        if slice.len() != Secp256k1PublicKey::LENGTH {
            return Err(ParseSecp256k1PublicKeyError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; Self::LENGTH];
        bytes.copy_from_slice(slice);
        Ok(Secp256k1PublicKey(bytes))
    }
}

//======
// error
//======

/// Represents an error when parsing ECDSA Secp256k1 public key from hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSecp256k1PublicKeyError {
    InvalidHex(String),
    InvalidLength(usize),
}

impl std::error::Error for ParseSecp256k1PublicKeyError {}

impl fmt::Display for ParseSecp256k1PublicKeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//======
// text
//======

impl FromStr for Secp256k1PublicKey {
    type Err = ParseSecp256k1PublicKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes =
            hex::decode(s).map_err(|_| ParseSecp256k1PublicKeyError::InvalidHex(s.to_owned()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Secp256k1PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}
