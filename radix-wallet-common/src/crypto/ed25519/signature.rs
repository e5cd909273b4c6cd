use crate::internal_prelude::*;

/// Represents an ED25519 signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Signature(pub [u8; Self::LENGTH]);

impl Ed25519Signature {
    pub const LENGTH: usize = 64;

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Ed25519Signature {
    type Error = ParseEd25519SignatureError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        if slice.len() != Ed25519Signature::LENGTH {
            return Err(ParseEd25519SignatureError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; Self::LENGTH];
        bytes.copy_from_slice(slice);
        Ok(Ed25519Signature(bytes))
    }
}

impl AsRef<Self> for Ed25519Signature {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

//======
// error
//======

/// Represents an error when parsing ED25519 signature from hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEd25519SignatureError {
    InvalidHex(String),
    InvalidLength(usize),
}

impl std::error::Error for ParseEd25519SignatureError {}

impl fmt::Display for ParseEd25519SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//======
// text
//======

impl FromStr for Ed25519Signature {
    type Err = ParseEd25519SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes =
            hex::decode(s).map_err(|_| ParseEd25519SignatureError::InvalidHex(s.to_owned()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(self.to_vec()))
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}
