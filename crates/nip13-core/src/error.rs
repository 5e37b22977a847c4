//! Error type shared by the difficulty, check and mining operations.

use thiserror::Error;

/// Errors returned by proof-of-work verification and mining.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowError {
    /// The digest has fewer leading zero bits than required.
    #[error("nip13: insufficient difficulty: got {actual} bits, need {required}")]
    InsufficientDifficulty { actual: u32, required: i32 },

    /// Mining ran past its time budget.
    #[error("nip13: generating proof of work took too long ({elapsed_ms} ms)")]
    GenerateTimeout { elapsed_ms: u64 },

    /// The record has no pubkey, so the work would not be attributable.
    #[error("nip13: attempting to work on an event without a pubkey")]
    MissingIdentity,

    /// The digest is not a well-formed hex string.
    #[error("nip13: malformed digest: {reason}")]
    MalformedDigest { reason: &'static str },

    /// Every nonce the counter can represent has been tried.
    #[error("nip13: nonce space exhausted")]
    NonceSpaceExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_messages() {
        let err = PowError::InsufficientDifficulty { actual: 3, required: 8 };
        assert_eq!(err.to_string(), "nip13: insufficient difficulty: got 3 bits, need 8");

        let err = PowError::MalformedDigest { reason: "odd length" };
        assert_eq!(err.to_string(), "nip13: malformed digest: odd length");
    }
}
