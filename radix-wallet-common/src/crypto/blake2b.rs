use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::crypto::Hash;

pub type Blake2b256 = Blake2b<U32>;

/// Computes the Blake2b-256 digest of a message.
pub fn blake2b_256_hash<T: AsRef<[u8]>>(data: T) -> Hash {
    Hash(Blake2b256::digest(data).into())
}
