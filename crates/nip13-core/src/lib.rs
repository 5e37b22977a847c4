//! NIP-13 proof of work for Nostr events.
//!
//! This crate provides pure Rust implementations of:
//! - Leading-zero-bit difficulty of hex event ids
//! - Difficulty checks and committed-target interpretation
//! - A single-threaded nonce miner with a polled timeout
//! - NIP-01 event serialization and id computation
//!
//! ```
//! use nip13_core::{check, difficulty, generate, Event};
//! use std::time::Duration;
//!
//! let event = Event::new(
//!     "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
//!     1_700_000_000,
//!     1,
//!     vec![],
//!     "hello",
//! );
//! let mined = generate(event, 4, Duration::from_secs(5)).unwrap();
//! assert!(difficulty(&mined.id).unwrap() >= 4);
//! assert!(check(&mined.id, 4).is_ok());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod check;
pub mod clock;
pub mod difficulty;
pub mod error;
pub mod event;
pub mod hash;
pub mod miner;
pub mod nonce;
pub mod record;
pub mod tags;

pub use check::{check, committed_difficulty};
pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use difficulty::{difficulty, Digest, DIGEST_HEX_LEN};
pub use error::PowError;
pub use event::Event;
#[cfg(feature = "std")]
pub use miner::generate;
pub use miner::{Miner, MinerConfig, Solution, TIMEOUT_CHECK_INTERVAL};
pub use nonce::encode_nonce;
pub use record::Record;
pub use tags::{Tag, Tags, NONCE_TAG};
