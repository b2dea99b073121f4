//! Fuzzes the HS70 battery response decoder and the sidetone encoder.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_corsair_battery
#![no_main]
use headsetctl_hid_corsair_protocol::{build_sidetone_report, parse_battery_response};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes.
    if let Some(response) = parse_battery_response(data) {
        if let Some(percent) = response.status().percent() {
            assert!(percent <= 100);
        }
        let _ = response.mic_up();
    }

    if let Some(&level) = data.first() {
        let report = build_sidetone_report(level);
        assert!(report[11] >= 200);
    }
});
