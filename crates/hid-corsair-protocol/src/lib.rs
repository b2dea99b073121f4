//! Corsair headset HID protocol: sidetone, battery and notification-sound frames.
//!
//! The `ids`, `input`, `output` and `types` modules are I/O-free and
//! allocation-free. `protocol` drives those codecs over an already-open
//! [`HidTransport`](headsetctl_hid_common::HidTransport) and builds the
//! [`DeviceDescriptor`](headsetctl_hid_common::DeviceDescriptor) the device
//! registry dispatches through.

#![deny(static_mut_refs)]

pub mod ids;
pub mod input;
pub mod output;
pub mod protocol;
pub mod types;

pub use ids::{CORSAIR_VENDOR_ID, product_ids};
pub use input::{
    BATTERY_RESPONSE_LEN, BatteryResponse, ChargeByte, MIC_UP_FLAG, parse_battery_response,
};
pub use output::{
    BATTERY_REQUEST_LEN, NOTIFICATION_SOUND_REPORT_LEN, SIDETONE_HEADER, SIDETONE_RANGE,
    SIDETONE_REPORT_LEN, build_battery_request, build_notification_sound_report,
    build_sidetone_report,
};
pub use protocol::{hs70_descriptor, play_notification_sound, request_battery, send_sidetone};
pub use types::{CorsairModel, is_headset_product};
