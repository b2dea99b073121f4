//! Corsair HS70 battery response decoding.
//!
//! All functions are pure and allocation-free.
//!
//! # Response layout
//!
//! ```text
//! Index   0     1     2          3     4
//! Data    0x64  0x00  charge     0xB1  status
//! ```
//!
//! `charge` is the level in percent, with [`MIC_UP_FLAG`] OR'd in while the
//! boom mic is flipped up. `status` is `1` on battery, `0`, `4` or `5` while on
//! power (charging or idle), anything else is undocumented.

#![deny(static_mut_refs)]

use headsetctl_hid_common::BatteryStatus;

/// Wire size of the battery response frame.
pub const BATTERY_RESPONSE_LEN: usize = 5;

/// Set in the charge byte while the microphone is in the upper position.
pub const MIC_UP_FLAG: u8 = 0x80;

/// Status codes carried in byte 4 of the battery response.
pub mod status_codes {
    /// Powered off while connected to a charger.
    pub const CHARGING_OFF: u8 = 0x00;
    /// Running on battery; the charge byte is meaningful.
    pub const ON_BATTERY: u8 = 0x01;
    /// Connected to a charger, idle.
    pub const ON_POWER_IDLE: u8 = 0x04;
    /// Connected to a charger, charging.
    pub const CHARGING: u8 = 0x05;
}

/// The charge byte split into its two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeByte {
    /// Charge level with the mic flag removed.
    pub percent: u8,
    /// Whether the microphone is flipped up.
    pub mic_up: bool,
}

impl ChargeByte {
    pub fn decode(raw: u8) -> Self {
        Self {
            percent: raw & !MIC_UP_FLAG,
            mic_up: raw & MIC_UP_FLAG != 0,
        }
    }
}

/// A raw battery response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryResponse {
    /// Byte 2, undecoded (may carry [`MIC_UP_FLAG`]).
    pub charge_raw: u8,
    /// Byte 4.
    pub status_code: u8,
}

/// Parse a battery response frame.
///
/// Returns `None` if `data` is shorter than [`BATTERY_RESPONSE_LEN`]; trailing
/// bytes beyond the frame are ignored.
pub fn parse_battery_response(data: &[u8]) -> Option<BatteryResponse> {
    let &[_, _, charge_raw, _, status_code] = data.get(..BATTERY_RESPONSE_LEN)? else {
        return None;
    };
    Some(BatteryResponse {
        charge_raw,
        status_code,
    })
}

impl BatteryResponse {
    /// Decode the battery state.
    ///
    /// Precedence: on-power codes first, then the on-battery code, then
    /// everything else as unavailable. The charge byte (and its mic flag) is
    /// only read on the on-battery branch.
    pub fn status(&self) -> BatteryStatus {
        match self.status_code {
            status_codes::CHARGING_OFF | status_codes::ON_POWER_IDLE | status_codes::CHARGING => {
                BatteryStatus::Charging
            }
            status_codes::ON_BATTERY => {
                BatteryStatus::level(ChargeByte::decode(self.charge_raw).percent)
            }
            status_code => BatteryStatus::Unavailable { status_code },
        }
    }

    /// Microphone position, known only while running on battery.
    pub fn mic_up(&self) -> Option<bool> {
        (self.status_code == status_codes::ON_BATTERY)
            .then(|| ChargeByte::decode(self.charge_raw).mic_up)
    }
}
