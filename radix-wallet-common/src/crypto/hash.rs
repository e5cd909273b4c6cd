use crate::crypto::blake2b_256_hash;
use crate::internal_prelude::*;

/// Represents a 32-byte hash digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(pub [u8; Self::LENGTH]);

impl Hash {
    pub const LENGTH: usize = 32;

    /// Returns the lower 29 bytes.
    pub fn lower_29_bytes(&self) -> [u8; 29] {
        let mut result = [0u8; 29];
        result.copy_from_slice(&self.0[3..32]);
        result
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Computes the hash digest of a message.
pub fn hash<T: AsRef<[u8]>>(data: T) -> Hash {
    blake2b_256_hash(data)
}

/// Implemented by typed wrappers around a 32-byte hash digest, so signing
/// primitives can accept any of them.
pub trait IsHash: AsRef<[u8]> + Sized {
    fn into_bytes(self) -> [u8; Hash::LENGTH];
}

impl IsHash for Hash {
    fn into_bytes(self) -> [u8; Hash::LENGTH] {
        self.0
    }
}

//========
// error
//========

/// Represents an error when parsing hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHashError {
    InvalidHex(String),
    InvalidLength(usize),
}

impl std::error::Error for ParseHashError {}

impl fmt::Display for ParseHashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//========
// binary
//========

impl TryFrom<&[u8]> for Hash {
    type Error = ParseHashError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        if slice.len() != Hash::LENGTH {
            return Err(ParseHashError::InvalidLength(slice.len()));
        }
        let mut bytes = [0u8; Hash::LENGTH];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }
}

impl From<Hash> for Vec<u8> {
    fn from(value: Hash) -> Self {
        value.to_vec()
    }
}

//======
// text
//======

impl FromStr for Hash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| ParseHashError::InvalidHex(s.to_owned()))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_to_string() {
        let s = "b177968c9c68877dc8d33e25759183c556379daa45a4d78a2b91c70133c873ca";
        let h = Hash::from_str(s).unwrap();
        assert_eq!(h.to_string(), s);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Hash::from_str("b177"),
            Err(ParseHashError::InvalidLength(2))
        );
        assert!(matches!(
            Hash::from_str("zz77968c9c68877dc8d33e25759183c556379daa45a4d78a2b91c70133c873ca"),
            Err(ParseHashError::InvalidHex(_))
        ));
    }
}
