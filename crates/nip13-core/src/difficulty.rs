//! Leading-zero-bit difficulty of hex encoded digests.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::PowError;

/// Length of a canonical event id in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Count the leading zero bits of a hex encoded digest.
///
/// Pairs reading `"00"` are counted without decoding. Only the first other
/// pair is decoded, into a one-byte buffer, and scanning stops there. A
/// string made only of zero pairs counts 8 bits per pair, and the empty
/// string counts 0.
///
/// Works for any even-length input, not just 64 characters. A non-hex pair
/// or a dangling odd character reached by the scan is reported as
/// [`PowError::MalformedDigest`].
pub fn difficulty(id: &str) -> Result<u32, PowError> {
    count_from(0, id)
}

/// Continue a count of `zeros` over `id`. Saturates at `u32::MAX`.
fn count_from(mut zeros: u32, id: &str) -> Result<u32, PowError> {
    let mut byte = [0u8; 1];

    for pair in id.as_bytes().chunks(2) {
        if pair == b"00" {
            zeros = zeros.saturating_add(8);
            continue;
        }
        if pair.len() != 2 {
            return Err(PowError::MalformedDigest { reason: "odd length" });
        }
        hex::decode_to_slice(pair, &mut byte).map_err(|_| PowError::MalformedDigest {
            reason: "invalid hex character",
        })?;
        return Ok(zeros.saturating_add(byte[0].leading_zeros()));
    }

    Ok(zeros)
}

/// A validated 32-byte digest.
///
/// Parsing accepts exactly 64 lowercase hex characters; anything else is
/// rejected rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Parse a canonical lowercase hex digest.
    pub fn parse(s: &str) -> Result<Self, PowError> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(PowError::MalformedDigest { reason: "digest must be 64 hex characters" });
        }
        if s.bytes().any(|c| c.is_ascii_uppercase()) {
            return Err(PowError::MalformedDigest { reason: "digest must be lowercase" });
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| PowError::MalformedDigest {
            reason: "invalid hex character",
        })?;
        Ok(Digest(bytes))
    }

    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Number of leading zero bits, 0 to 256.
    pub fn difficulty(&self) -> u32 {
        let mut zeros = 0u32;
        for byte in self.0.iter() {
            if *byte == 0 {
                zeros += 8;
            } else {
                zeros += byte.leading_zeros();
                break;
            }
        }
        zeros
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Digest {
    type Err = PowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::parse(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use proptest::prelude::*;

    #[test]
    fn test_difficulty_known_values() {
        assert_eq!(difficulty(""), Ok(0));
        assert_eq!(difficulty("ff"), Ok(0));
        assert_eq!(difficulty("0f"), Ok(4));
        assert_eq!(difficulty("0F"), Ok(4));
        assert_eq!(difficulty("01"), Ok(7));
        assert_eq!(difficulty("000000000e9d97a1ab09fc381030b346cdd7a142ad57e6df0b46dc9bef6c7e2d"), Ok(36));
        assert_eq!(difficulty("6bf5b4f434813c64b523d2b0e6efe18f3bd0cbbd0a5effd8ece9e00fd2531996"), Ok(1));
        assert_eq!(difficulty("00003479309ecdb46b1c04ce129d2709378518588bed6776e60474ebde3159ae"), Ok(18));
        assert_eq!(difficulty("01a76167d41add96be4959d9e618b7a35f26551d62c43c11e5e64094c6b53c83"), Ok(7));
        assert_eq!(difficulty("ac4f44bae06a45ebe88cfbd3c66358750159650a26c0d79e8ccaa92457fca4f6"), Ok(0));
        assert_eq!(difficulty("0000000000000000006cfbd3c66358750159650a26c0d79e8ccaa92457fca4f6"), Ok(73));
    }

    #[test]
    fn test_difficulty_all_zero() {
        let id = "0".repeat(64);
        assert_eq!(difficulty(&id), Ok(256));
    }

    #[test]
    fn test_difficulty_stops_at_first_nonzero_byte() {
        // Bits after the first non-zero byte never count, even if later pairs are zero.
        assert_eq!(difficulty("0f000000"), Ok(4));
        assert_eq!(difficulty("00800000"), Ok(8));
    }

    #[test]
    fn test_difficulty_malformed() {
        assert!(matches!(difficulty("zz"), Err(PowError::MalformedDigest { .. })));
        assert!(matches!(difficulty("00g1"), Err(PowError::MalformedDigest { .. })));
        assert!(matches!(difficulty("000"), Err(PowError::MalformedDigest { .. })));
        assert!(matches!(difficulty("0"), Err(PowError::MalformedDigest { .. })));
        // The scan stops before reaching the bad tail.
        assert_eq!(difficulty("0fzz"), Ok(4));
        assert_eq!(difficulty("ff0"), Ok(0));
    }

    #[test]
    fn test_difficulty_saturates_instead_of_overflowing() {
        assert_eq!(count_from(u32::MAX - 4, "0000ff"), Ok(u32::MAX));
        assert_eq!(count_from(u32::MAX - 12, "000f"), Ok(u32::MAX));
        assert_eq!(count_from(u32::MAX - 20, "0001"), Ok(u32::MAX - 5));
    }

    #[test]
    fn test_difficulty_is_idempotent() {
        let id = "00003479309ecdb46b1c04ce129d2709378518588bed6776e60474ebde3159ae";
        assert_eq!(difficulty(id), difficulty(id));
    }

    #[test]
    fn test_digest_parse() {
        let id = "000000000e9d97a1ab09fc381030b346cdd7a142ad57e6df0b46dc9bef6c7e2d";
        let digest = Digest::parse(id).unwrap();
        assert_eq!(digest.difficulty(), 36);
        assert_eq!(digest.to_string(), id);
        assert_eq!(digest.to_hex(), id);

        assert!(Digest::parse(&id[..62]).is_err());
        assert!(Digest::parse(&format!("{}00", id)).is_err());
        assert!(Digest::parse(&id.to_uppercase()).is_err());
        assert!(Digest::parse(&"x".repeat(64)).is_err());
        assert_eq!(Digest::from_bytes([0u8; 32]).difficulty(), 256);
    }

    proptest! {
        #[test]
        fn zero_bytes_then_ff_is_eight_per_byte(n in 0usize..64) {
            let id = format!("{}ff", "00".repeat(n));
            prop_assert_eq!(difficulty(&id), Ok(8 * n as u32));
        }

        #[test]
        fn all_zero_is_four_per_char(pairs in 0usize..128) {
            let id = "0".repeat(pairs * 2);
            prop_assert_eq!(difficulty(&id), Ok(4 * id.len() as u32));
        }

        #[test]
        fn matches_decoded_count(bytes in proptest::array::uniform32(any::<u8>())) {
            let id = hex::encode(bytes);
            prop_assert_eq!(difficulty(&id), Ok(Digest::from_bytes(bytes).difficulty()));
        }
    }
}
