//! SHA256 hashing for event ids.

use alloc::string::String;
use sha2::{Digest as _, Sha256};

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// SHA256 hash as lowercase hex, the form event ids are carried in.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
