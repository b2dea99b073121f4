//! Supported headset registry.
//!
//! Vendor protocol crates each export descriptors for the hardware they
//! drive; this crate gathers them into one immutable [`DeviceRegistry`] that
//! callers look devices up in by USB vendor/product id.
#![deny(static_mut_refs)]

pub mod registry;


pub use headsetctl_hid_common::{
    BatteryStatus, Capabilities, Capability, DescriptorError, DeviceDescriptor, HeadsetError,
    HeadsetResult, HidTransport,
};
pub use registry::{DeviceRegistry, builtin_descriptors};
