//! Content key derivation.

use delulu_error::{StorageError, StorageErrorKind};
use sha2::{Digest, Sha256};
use std::str::FromStr;

/// Number of hash bytes kept in a key (128 bits).
const KEY_BYTES: usize = 16;

/// Deterministic cache key for a scene description.
///
/// Always 32 lowercase hex characters, so it is safe in object names,
/// file names and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CacheKey {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s.len() == KEY_BYTES * 2
            && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(s.to_string())));
        }
        Ok(Self(s.to_string()))
    }
}

/// Derive the cache key for a description.
///
/// The key is the first 128 bits of the SHA-256 digest of the UTF-8 bytes,
/// hex encoded. No salt and no normalisation: equal keys mean byte-equal
/// descriptions, up to hash collisions.
///
/// # Examples
///
/// ```
/// use delulu_storage::derive_key;
///
/// let a = derive_key("A lighthouse in the fog");
/// let b = derive_key("A lighthouse in the fog");
/// let c = derive_key("A lighthouse in the fog ");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(a.as_str().len(), 32);
/// ```
pub fn derive_key(description: &str) -> CacheKey {
    let digest = Sha256::digest(description.as_bytes());
    CacheKey(hex::encode(&digest[..KEY_BYTES]))
}
