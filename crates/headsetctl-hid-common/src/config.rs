//! Transport configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

const READ_TIMEOUT_ENV: &str = "HEADSETCTL_READ_TIMEOUT_MS";

/// Default wait for a response frame, in milliseconds.
pub const DEFAULT_READ_TIMEOUT_MS: i32 = 5000;

/// Options for transports that talk to real hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Read timeout in milliseconds; `-1` blocks until a report arrives.
    pub read_timeout_ms: i32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: read_timeout_from_env(),
        }
    }
}

impl TransportConfig {
    /// Configuration with built-in defaults, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }

    pub fn with_read_timeout_ms(mut self, read_timeout_ms: i32) -> Self {
        self.read_timeout_ms = read_timeout_ms;
        self
    }

    pub fn blocks_on_read(&self) -> bool {
        self.read_timeout_ms < 0
    }
}

fn parse_timeout(value: &str) -> Option<i32> {
    match value.trim().parse::<i32>() {
        Ok(ms) if ms >= -1 => Some(ms),
        _ => None,
    }
}

fn read_timeout_from_env() -> i32 {
    let Ok(raw) = std::env::var(READ_TIMEOUT_ENV) else {
        return DEFAULT_READ_TIMEOUT_MS;
    };
    parse_timeout(&raw).unwrap_or_else(|| {
        warn!(
            "Ignoring {}={:?}: expected milliseconds or -1, using {}",
            READ_TIMEOUT_ENV, raw, DEFAULT_READ_TIMEOUT_MS
        );
        DEFAULT_READ_TIMEOUT_MS
    })
}
