//! Compact string encoding of the mining counter.
//!
//! The nonce tag only needs distinct counter values to give distinct
//! strings. Base 62 keeps the tag short, which keeps the serialized event
//! (and so every hash) small.

use alloc::string::String;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// 62^11 > 2^64, so eleven digits hold any u64.
const MAX_DIGITS: usize = 11;

/// Write `n` in base 62 into `out`, replacing its contents.
///
/// Reuses the buffer, so the mining loop does not allocate per attempt.
pub fn encode_nonce_into(mut n: u64, out: &mut String) {
    let mut digits = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        digits[pos] = ALPHABET[(n % 62) as usize];
        n /= 62;
        if n == 0 {
            break;
        }
    }

    out.clear();
    out.extend(digits[pos..].iter().map(|&c| c as char));
}

/// Base 62 encoding of `n`.
pub fn encode_nonce(n: u64) -> String {
    let mut out = String::with_capacity(MAX_DIGITS);
    encode_nonce_into(n, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode_nonce(0), "0");
        assert_eq!(encode_nonce(9), "9");
        assert_eq!(encode_nonce(10), "A");
        assert_eq!(encode_nonce(61), "z");
        assert_eq!(encode_nonce(62), "10");
        assert_eq!(encode_nonce(62 * 62), "100");
        assert_eq!(encode_nonce(u64::MAX).len(), MAX_DIGITS);
    }

    #[test]
    fn test_encode_is_injective() {
        let mut seen = BTreeSet::new();
        for n in 1..200_000u64 {
            assert!(seen.insert(encode_nonce(n)), "duplicate encoding for {}", n);
        }
    }

    #[test]
    fn test_encode_into_reuses_buffer() {
        let mut buf = String::from("previous contents");
        encode_nonce_into(3843, &mut buf);
        assert_eq!(buf, "zz");
        encode_nonce_into(1, &mut buf);
        assert_eq!(buf, "1");
    }
}
