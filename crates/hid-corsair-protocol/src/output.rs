//! Corsair HS70 output and feature report encoding.
//!
//! All functions are pure and allocation-free.
//!
//! # Protocol notes
//!
//! ```text
//! Sidetone (feature report, 12 bytes):
//!   FF 0B 00 FF 04 0E FF 05 01 04 00 <level>     level ∈ 200..=255
//! Battery request (output report, 2 bytes):
//!   C9 64
//! Notification sound (output report, 3 bytes):
//!   CA 02 <sound id>                             sound id 0 or 1
//! ```
//!
//! The sidetone header is an opaque vendor constant captured from the
//! Windows software; it has no known internal structure.

#![deny(static_mut_refs)]

use crate::ids::{BATTERY_REQUEST_ARG, NOTIFICATION_SOUND_ARG, commands};
use headsetctl_hid_common::RangeMapping;

/// Wire size of the sidetone feature report.
pub const SIDETONE_REPORT_LEN: usize = 12;

/// Wire size of the battery request frame.
pub const BATTERY_REQUEST_LEN: usize = 2;

/// Bytes sent for a notification-sound request.
pub const NOTIFICATION_SOUND_REPORT_LEN: usize = 3;

/// Constant prefix of the sidetone feature report; the level follows it.
pub const SIDETONE_HEADER: [u8; SIDETONE_REPORT_LEN - 1] = [
    0xFF, 0x0B, 0x00, 0xFF, 0x04, 0x0E, 0xFF, 0x05, 0x01, 0x04, 0x00,
];

/// Generic sidetone level `0..=128` to the HS70's native `200..=255`.
pub const SIDETONE_RANGE: RangeMapping = RangeMapping::new(0, 128, 200, 255);

/// Build the 12-byte sidetone feature report.
///
/// `level` is the generic `0..=128` sidetone level; levels above 128 saturate
/// at the device maximum.
pub fn build_sidetone_report(level: u8) -> [u8; SIDETONE_REPORT_LEN] {
    let [h0, h1, h2, h3, h4, h5, h6, h7, h8, h9, h10] = SIDETONE_HEADER;
    let native = SIDETONE_RANGE.map_to_u8(i32::from(level));
    [h0, h1, h2, h3, h4, h5, h6, h7, h8, h9, h10, native]
}

/// Build the 2-byte battery request frame (`C9 64`).
pub fn build_battery_request() -> [u8; BATTERY_REQUEST_LEN] {
    [commands::BATTERY_REQUEST, BATTERY_REQUEST_ARG]
}

/// Build the 3-byte notification-sound frame (`CA 02 <sound_id>`).
///
/// The headset ships two sounds, `0` and `1`. Other ids are forwarded
/// verbatim; what the firmware does with them is up to the firmware.
pub fn build_notification_sound_report(sound_id: u8) -> [u8; NOTIFICATION_SOUND_REPORT_LEN] {
    [commands::NOTIFICATION_SOUND, NOTIFICATION_SOUND_ARG, sound_id]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidetone_bounds() {
        assert_eq!(build_sidetone_report(0)[11], 200);
        assert_eq!(build_sidetone_report(128)[11], 255);
        assert_eq!(build_sidetone_report(255)[11], 255);
    }

    #[test]
    fn test_sidetone_midpoint_truncates() {
        assert_eq!(build_sidetone_report(64)[11], 227);
    }

    #[test]
    fn test_sidetone_header_literal() {
        let report = build_sidetone_report(10);
        assert_eq!(
            report[..11],
            [0xFF, 0x0B, 0x00, 0xFF, 0x04, 0x0E, 0xFF, 0x05, 0x01, 0x04, 0x00]
        );
    }

    #[test]
    fn test_battery_request() {
        assert_eq!(build_battery_request(), [0xC9, 0x64]);
    }

    #[test]
    fn test_notification_sound() {
        assert_eq!(build_notification_sound_report(0), [0xCA, 0x02, 0x00]);
        assert_eq!(build_notification_sound_report(1), [0xCA, 0x02, 0x01]);
    }

    #[test]
    fn test_notification_sound_passes_unknown_ids_through() {
        assert_eq!(build_notification_sound_report(7), [0xCA, 0x02, 0x07]);
        assert_eq!(build_notification_sound_report(0xFF), [0xCA, 0x02, 0xFF]);
    }
}
