//! Headset capability flags.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Set of operations a headset supports.
    ///
    /// The bit layout is stable; new capabilities take currently unused bits.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Microphone feedback level.
        const SIDETONE           = 0b0000_0001;
        /// Battery charge / charging state query.
        const BATTERY_STATUS     = 0b0000_0010;
        /// Built-in notification chimes.
        const NOTIFICATION_SOUND = 0b0000_0100;
    }
}

/// A single capability, used where exactly one is meant (dispatch, errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Sidetone,
    BatteryStatus,
    NotificationSound,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::Sidetone,
        Capability::BatteryStatus,
        Capability::NotificationSound,
    ];

    /// The flag this capability occupies in a [`Capabilities`] set.
    pub const fn flag(self) -> Capabilities {
        match self {
            Self::Sidetone => Capabilities::SIDETONE,
            Self::BatteryStatus => Capabilities::BATTERY_STATUS,
            Self::NotificationSound => Capabilities::NOTIFICATION_SOUND,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sidetone => "sidetone",
            Self::BatteryStatus => "battery",
            Self::NotificationSound => "notification sound",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Capability> for Capabilities {
    fn from(capability: Capability) -> Self {
        capability.flag()
    }
}

impl Capabilities {
    /// Whether the single capability `capability` is in this set.
    pub fn supports(self, capability: Capability) -> bool {
        self.contains(capability.flag())
    }

    /// Individual capabilities present in this set, in declaration order.
    pub fn capabilities(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.supports(*capability))
    }
}
