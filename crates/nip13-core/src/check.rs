//! Difficulty verification and committed-target interpretation.

use crate::difficulty::difficulty;
use crate::error::PowError;
use crate::record::Record;
use crate::tags::NONCE_TAG;

/// Check that an event id carries at least `min_difficulty` leading zero bits.
///
/// Only the bits are counted. Callers must verify the event (id and
/// signature) by other means before trusting the result. A malformed id
/// fails for every `min_difficulty`, negative ones included.
pub fn check(id: &str, min_difficulty: i32) -> Result<(), PowError> {
    let actual = difficulty(id)?;
    if i64::from(actual) < i64::from(min_difficulty) {
        return Err(PowError::InsufficientDifficulty {
            actual,
            required: min_difficulty,
        });
    }
    Ok(())
}

/// Difficulty credited to a record, honoring the target in its nonce tag.
///
/// Without a `["nonce", _, target]` tag the record committed to nothing and
/// gets 0. A target at or below the actual difficulty is credited as the
/// target, never more. A target above the actual difficulty overstates the
/// work and gets 0. An unparsable target or id also gets 0.
pub fn committed_difficulty<R: Record + ?Sized>(record: &R) -> u32 {
    let Some(tag) = record.tags().get_first(&[NONCE_TAG, ""]) else {
        return 0;
    };
    if tag.len() < 3 {
        return 0;
    }

    let work = difficulty(record.id()).unwrap_or(0);
    let target = tag[2].parse::<u32>().unwrap_or(0);
    if target <= work {
        target
    } else {
        0
    }
}
