//! Proof-of-work bindings: difficulty checks and the miner class.

use nip13_core::{Event, Miner as PowMiner, MinerConfig, PowError};
use wasm_bindgen::prelude::*;

use crate::clock::JsClock;
use crate::state::MiningStats;

fn to_js_error(err: PowError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_event(value: JsValue) -> Result<Event, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid event: {}", e)))
}

/// Leading zero bits of a hex event id.
#[wasm_bindgen]
pub fn difficulty(id: &str) -> Result<u32, JsValue> {
    nip13_core::difficulty(id).map_err(to_js_error)
}

/// Throws unless `id` has at least `min_difficulty` leading zero bits.
#[wasm_bindgen]
pub fn check(id: &str, min_difficulty: i32) -> Result<(), JsValue> {
    nip13_core::check(id, min_difficulty).map_err(to_js_error)
}

/// Difficulty credited to an event after honoring its nonce tag target.
#[wasm_bindgen]
pub fn committed_difficulty(event: JsValue) -> Result<u32, JsValue> {
    let event = parse_event(event)?;
    Ok(nip13_core::committed_difficulty(&event))
}

/// The mining controller.
#[wasm_bindgen]
pub struct Miner {
    /// Target and time budget.
    config: MinerConfig,
    /// Statistics of the last run.
    stats: MiningStats,
}

#[wasm_bindgen]
impl Miner {
    /// Create a miner from `{ target_difficulty, timeout_ms, check_interval? }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Miner, JsValue> {
        let config: MinerConfig = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;

        Ok(Miner {
            config: config.with_check_interval(config.check_interval),
            stats: MiningStats::new(),
        })
    }

    /// Mine an event object; returns the mined event or throws on timeout.
    ///
    /// Runs to completion on the calling thread and blocks it for up to
    /// `timeout_ms`. Call it from a Web Worker to keep a page responsive.
    #[wasm_bindgen]
    pub fn mine(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event = parse_event(event)?;
        let clock = JsClock::start();
        self.stats = MiningStats::new();

        match PowMiner::new(self.config).mine(event, clock) {
            Ok(solution) => {
                self.stats.attempts = solution.attempts;
                self.stats.elapsed_ms = solution.elapsed.as_secs_f64() * 1000.0;
                self.stats.solved = true;
                self.stats.nonce = Some(solution.nonce);
                self.stats.difficulty = solution.difficulty;
                self.stats.update_hash_rate();

                serde_wasm_bindgen::to_value(&solution.record)
                    .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
            }
            Err(err) => {
                self.stats.elapsed_ms = nip13_core::Clock::elapsed(&clock).as_secs_f64() * 1000.0;
                self.stats.error = Some(err.to_string());
                console_log(&format!("mining failed: {}", err));
                Err(to_js_error(err))
            }
        }
    }

    /// Target difficulty in bits.
    #[wasm_bindgen(getter)]
    pub fn target_difficulty(&self) -> u32 {
        self.config.target_difficulty
    }

    /// Time budget in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn timeout_ms(&self) -> f64 {
        self.config.timeout.as_secs_f64() * 1000.0
    }

    /// Get statistics of the last run.
    #[wasm_bindgen]
    pub fn get_stats(&self) -> Result<JsValue, JsValue> {
        self.stats.to_js()
    }

    /// Get the formatted hash rate.
    #[wasm_bindgen]
    pub fn get_hash_rate_display(&self) -> String {
        self.stats.format_hash_rate()
    }

    /// Clear statistics.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.stats = MiningStats::new();
    }
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
