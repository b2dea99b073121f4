//! Decoded battery state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Battery state reported by a headset.
///
/// Every variant is out-of-band from the others: an unrecognized device state
/// is never expressed as a number inside the percentage domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BatteryStatus {
    /// Charge level in percent, always `0..=100`.
    Level { percent: u8 },
    /// Headset is on external power, charging or idle.
    Charging,
    /// Headset answered with a status code the driver does not know.
    Unavailable { status_code: u8 },
}

impl BatteryStatus {
    pub const MAX_PERCENT: u8 = 100;

    /// Build a level reading, saturating at 100 %.
    pub fn level(percent: u8) -> Self {
        Self::Level {
            percent: percent.min(Self::MAX_PERCENT),
        }
    }

    pub fn percent(self) -> Option<u8> {
        match self {
            Self::Level { percent } => Some(percent),
            _ => None,
        }
    }

    pub fn is_charging(self) -> bool {
        matches!(self, Self::Charging)
    }

    pub fn is_available(self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level { percent } => write!(f, "{percent}%"),
            Self::Charging => f.write_str("charging"),
            Self::Unavailable { status_code } => {
                write!(f, "unavailable (status 0x{status_code:02X})")
            }
        }
    }
}
