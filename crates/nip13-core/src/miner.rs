//! Nonce search over an event until its id reaches a target difficulty.

use alloc::string::ToString;
use core::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::difficulty::difficulty;
use crate::error::PowError;
use crate::nonce::encode_nonce_into;
use crate::record::Record;
use crate::tags::{Tag, NONCE_TAG};

/// Attempts between two wall-clock readings.
///
/// Reading the clock every attempt costs throughput; the timeout can be
/// overshot by at most this many attempts.
pub const TIMEOUT_CHECK_INTERVAL: u64 = 10_000;

/// Mining parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinerConfig {
    /// Leading zero bits the id must reach.
    pub target_difficulty: u32,
    /// Time budget, carried as `timeout_ms` in serialized form.
    #[serde(rename = "timeout_ms", with = "duration_ms")]
    pub timeout: Duration,
    /// Attempts between timeout checks.
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,
}

fn default_check_interval() -> u64 {
    TIMEOUT_CHECK_INTERVAL
}

impl MinerConfig {
    pub fn new(target_difficulty: u32, timeout: Duration) -> Self {
        MinerConfig {
            target_difficulty,
            timeout,
            check_interval: TIMEOUT_CHECK_INTERVAL,
        }
    }

    /// Override the timeout check cadence. Zero is treated as one.
    pub fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval.max(1);
        self
    }
}

/// A record whose id met the target, with search statistics.
#[derive(Debug, Clone)]
pub struct Solution<R> {
    /// The mined record, nonce tag in place and id updated.
    pub record: R,
    /// The winning counter value.
    pub nonce: u64,
    /// Ids computed, including the winning one.
    pub attempts: u64,
    /// Difficulty actually reached (at least the target).
    pub difficulty: u32,
    /// Time spent searching.
    pub elapsed: Duration,
}

/// Single-threaded proof-of-work miner.
#[derive(Debug, Clone)]
pub struct Miner {
    config: MinerConfig,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Miner { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mine `record` until its id reaches the target or the timeout passes.
    ///
    /// A `["nonce", <n>, <target>]` tag is appended and its nonce rewritten
    /// on every attempt. `created_at` is stamped at the start and again at
    /// every timeout check, the only points where the clock is read; with
    /// one-second timestamps that lags per-attempt stamping by at most one
    /// check interval, and every attempt still differs by its nonce.
    ///
    /// On success the record is returned with the winning tag in place. On
    /// failure the record is consumed; pass `&mut record` to keep access,
    /// but its tags and id are then partially mined and should be discarded.
    pub fn mine<R: Record, C: Clock>(&self, record: R, clock: C) -> Result<Solution<R>, PowError> {
        self.mine_from(record, clock, 0)
    }

    /// Mine with the counter continuing after `last_nonce`.
    pub(crate) fn mine_from<R: Record, C: Clock>(
        &self,
        mut record: R,
        clock: C,
        last_nonce: u64,
    ) -> Result<Solution<R>, PowError> {
        if record.pubkey().is_empty() {
            return Err(PowError::MissingIdentity);
        }

        let target = self.config.target_difficulty;
        let timeout = self.config.timeout;
        let interval = self.config.check_interval.max(1);
        debug!(difficulty = target, timeout_ms = millis(timeout), "mining started");

        record.set_created_at(clock.unix_timestamp());
        let target_field = target.to_string();
        let tag_index = record
            .tags_mut()
            .push(Tag::new([NONCE_TAG, "", target_field.as_str()]));

        let mut nonce = last_nonce;
        loop {
            nonce = nonce.checked_add(1).ok_or(PowError::NonceSpaceExhausted)?;
            encode_nonce_into(nonce, &mut record.tags_mut()[tag_index][1]);

            let work = difficulty(record.recompute_id())?;
            if work >= target {
                let elapsed = clock.elapsed();
                let attempts = nonce - last_nonce;
                debug!(attempts, difficulty = work, elapsed_ms = millis(elapsed), "mining succeeded");
                return Ok(Solution {
                    record,
                    nonce,
                    attempts,
                    difficulty: work,
                    elapsed,
                });
            }

            if nonce % interval == 0 {
                let elapsed = clock.elapsed();
                if elapsed > timeout {
                    debug!(attempts = nonce - last_nonce, elapsed_ms = millis(elapsed), "mining timed out");
                    return Err(PowError::GenerateTimeout {
                        elapsed_ms: millis(elapsed),
                    });
                }
                trace!(attempts = nonce - last_nonce, elapsed_ms = millis(elapsed), "mining progress");
                record.set_created_at(clock.unix_timestamp());
            }
        }
    }
}

/// Mine `record` to `target_difficulty` within `timeout` using the system clock.
///
/// Upon success the returned record carries a `["nonce", <n>, <target>]`
/// tag and an updated `created_at` and id.
#[cfg(feature = "std")]
pub fn generate<R: Record>(record: R, target_difficulty: u32, timeout: Duration) -> Result<R, PowError> {
    Miner::new(MinerConfig::new(target_difficulty, timeout))
        .mine(record, crate::clock::SystemClock::start())
        .map(|solution| solution.record)
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

mod duration_ms {
    use core::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(super::millis(*d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
