//! Drives the HS70 descriptor over a scripted transport with arbitrary
//! responses; no input may panic.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_corsair_dispatch
#![no_main]
use headsetctl_hid_common::transport::mock::MockTransport;
use headsetctl_hid_corsair_protocol::hs70_descriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let descriptor = hs70_descriptor();
    let observer = MockTransport::new();
    let mut transport = observer.clone();
    observer.queue_read(data.to_vec());

    let _ = descriptor.request_battery(&mut transport);
    if let Some(&level) = data.first() {
        let _ = descriptor.send_sidetone(&mut transport, level);
        let _ = descriptor.play_notification_sound(&mut transport, level);
    }
});
