//! Game configuration, read from the environment once at startup.
//!
//! - `FRUIT_MATCH_SEED`: base seed for deterministic decks (default: entropy)
//! - `FRUIT_MATCH_RESOLVE_DELAY_MS`: how long a revealed pair stays up (default: 800)
//! - `FRUIT_MATCH_MOUSE`: set to "0" or "false" to disable mouse capture
//! - `FRUIT_MATCH_LOG_PATH`: file that receives log output (default: logging off)

use crate::types::RESOLVE_DELAY_MS;

pub const ENV_SEED: &str = "FRUIT_MATCH_SEED";
pub const ENV_RESOLVE_DELAY_MS: &str = "FRUIT_MATCH_RESOLVE_DELAY_MS";
pub const ENV_MOUSE: &str = "FRUIT_MATCH_MOUSE";
pub const ENV_LOG_PATH: &str = "FRUIT_MATCH_LOG_PATH";

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// First session uses `seed`, each restart the next value.
    pub seed: Option<u64>,
    pub resolve_delay_ms: u32,
    pub mouse: bool,
    pub log_path: Option<String>,
    /// Variables that were set but could not be parsed, as `(name, value)`.
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            mouse: true,
            log_path: None,
            rejected: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get(ENV_SEED) {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.rejected.push((ENV_SEED, raw)),
            }
        }

        if let Some(raw) = get(ENV_RESOLVE_DELAY_MS) {
            match raw.parse() {
                Ok(ms) => config.resolve_delay_ms = ms,
                Err(_) => config.rejected.push((ENV_RESOLVE_DELAY_MS, raw)),
            }
        }

        if let Some(raw) = get(ENV_MOUSE) {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => config.mouse = true,
                "0" | "false" | "off" | "no" => config.mouse = false,
                _ => config.rejected.push((ENV_MOUSE, raw)),
            }
        }

        config.log_path = get(ENV_LOG_PATH);
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_resolve_delay_ms(mut self, ms: u32) -> Self {
        self.resolve_delay_ms = ms;
        self
    }
}
