//! Wire-format snapshots for the HS70 frames.

use headsetctl_hid_corsair_protocol as corsair;
use insta::assert_snapshot;

// ── Sidetone feature report ─────────────────────────────────────────────────

#[test]
fn test_snapshot_sidetone_min() {
    let out = corsair::build_sidetone_report(0);
    assert_snapshot!(format!("{out:02X?}"), @"[FF, 0B, 00, FF, 04, 0E, FF, 05, 01, 04, 00, C8]");
}

#[test]
fn test_snapshot_sidetone_mid() {
    let out = corsair::build_sidetone_report(64);
    assert_snapshot!(format!("{out:02X?}"), @"[FF, 0B, 00, FF, 04, 0E, FF, 05, 01, 04, 00, E3]");
}

#[test]
fn test_snapshot_sidetone_max() {
    let out = corsair::build_sidetone_report(128);
    assert_snapshot!(format!("{out:02X?}"), @"[FF, 0B, 00, FF, 04, 0E, FF, 05, 01, 04, 00, FF]");
}

#[test]
fn test_snapshot_sidetone_above_max_saturates() {
    let out = corsair::build_sidetone_report(255);
    assert_snapshot!(format!("{out:02X?}"), @"[FF, 0B, 00, FF, 04, 0E, FF, 05, 01, 04, 00, FF]");
}

// ── Battery request ─────────────────────────────────────────────────────────

#[test]
fn test_snapshot_battery_request() {
    let out = corsair::build_battery_request();
    assert_snapshot!(format!("{out:02X?}"), @"[C9, 64]");
}

// ── Notification sound ──────────────────────────────────────────────────────

#[test]
fn test_snapshot_notification_sound_0() {
    let out = corsair::build_notification_sound_report(0);
    assert_snapshot!(format!("{out:02X?}"), @"[CA, 02, 00]");
}

#[test]
fn test_snapshot_notification_sound_1() {
    let out = corsair::build_notification_sound_report(1);
    assert_snapshot!(format!("{out:02X?}"), @"[CA, 02, 01]");
}

// ── Battery decode ──────────────────────────────────────────────────────────

#[test]
fn test_snapshot_battery_decode_table() {
    let frames: [[u8; 5]; 6] = [
        [0x64, 0x00, 55, 0xB1, 1],
        [0x64, 0x00, 55 | 0x80, 0xB1, 1],
        [0x64, 0x00, 55, 0xB1, 0],
        [0x64, 0x00, 55, 0xB1, 4],
        [0x64, 0x00, 55, 0xB1, 5],
        [0x64, 0x00, 55, 0xB1, 2],
    ];
    let decoded: Vec<String> = frames
        .iter()
        .filter_map(|frame| corsair::parse_battery_response(frame))
        .map(|response| format!("{:?}", response.status()))
        .collect();
    assert_snapshot!(decoded.join("\n"), @r"
    Level { percent: 55 }
    Level { percent: 55 }
    Charging
    Charging
    Charging
    Unavailable { status_code: 2 }
    ");
}
