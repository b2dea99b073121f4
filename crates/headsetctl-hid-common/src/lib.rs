//! Common building blocks for USB HID headset drivers.
//!
//! This crate holds everything a per-vendor protocol crate needs to plug into
//! the device registry: the transport trait the codecs write through, the
//! capability set, the immutable [`DeviceDescriptor`] that binds capabilities
//! to codec operations, the decoded [`BatteryStatus`], and the linear
//! [`mapper`] used to convert generic levels into device-native bytes.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod battery;
pub mod capability;
pub mod config;
pub mod descriptor;
pub mod mapper;
pub mod transport;

pub use battery::BatteryStatus;
pub use capability::{Capabilities, Capability};
pub use config::TransportConfig;
pub use descriptor::{
    BatteryFn, DescriptorError, DeviceDescriptor, NotificationSoundFn, SidetoneFn,
};
pub use mapper::{RangeMapping, map};
pub use transport::HidTransport;

#[cfg(feature = "hidapi")]
pub use transport::hidapi_transport::HidApiTransport;

use thiserror::Error;

/// Failures reported by a [`HidTransport`] primitive.
#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to read from device: {0}")]
    ReadError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;

/// Failures surfaced by capability operations.
#[derive(Error, Debug)]
pub enum HeadsetError {
    /// A transport primitive failed; passed through unchanged, never retried.
    #[error("transport failure: {0}")]
    Transport(#[from] HidCommonError),

    /// The descriptor does not declare the requested capability.
    #[error("{device} does not support {capability}")]
    UnsupportedCapability {
        device: &'static str,
        capability: Capability,
    },

    /// The device answered with fewer bytes than the response frame holds.
    #[error("short response: expected {expected} bytes, got {actual}")]
    ShortResponse { expected: usize, actual: usize },
}

pub type HeadsetResult<T> = Result<T, HeadsetError>;
