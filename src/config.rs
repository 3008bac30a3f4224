//! Runtime configuration read from `CHESS_*` environment variables.

use crate::types::{DEFAULT_CLOCK_MS, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};

pub const DEFAULT_LOG_PATH: &str = "debug.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` disables logging.
    pub log_path: Option<String>,
    pub tile_width: u16,
    pub tile_height: u16,
    pub clock_ms: u32,
    pub white_name: String,
    pub black_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: Some(DEFAULT_LOG_PATH.to_string()),
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            clock_ms: DEFAULT_CLOCK_MS,
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = match lookup("CHESS_LOG_PATH") {
            Some(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            None => defaults.log_path,
        };

        let tile_dim = |key: &str, fallback: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|v| *v >= 1)
                .unwrap_or(fallback)
        };

        let clock_ms = lookup("CHESS_CLOCK_MINUTES")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .and_then(|m| m.checked_mul(60_000))
            .unwrap_or(defaults.clock_ms);

        let name = |key: &str, fallback: String| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            log_path,
            tile_width: tile_dim("CHESS_TILE_WIDTH", defaults.tile_width),
            tile_height: tile_dim("CHESS_TILE_HEIGHT", defaults.tile_height),
            clock_ms,
            white_name: name("CHESS_WHITE_NAME", defaults.white_name),
            black_name: name("CHESS_BLACK_NAME", defaults.black_name),
        }
    }
}
