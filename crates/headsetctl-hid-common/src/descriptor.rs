//! Device descriptors: identity, capability set and bound codec operations.
//!
//! A descriptor is built once per supported hardware variant and never
//! mutated afterwards. Bindings are plain function pointers, so a descriptor
//! is `Copy`-cheap to clone and freely shared between threads. The transport
//! handle is never stored; it is lent to each call.

use crate::battery::BatteryStatus;
use crate::capability::{Capabilities, Capability};
use crate::transport::HidTransport;
use crate::{HeadsetError, HeadsetResult};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Set the sidetone level (`0..=128`). Returns bytes accepted by the transport.
pub type SidetoneFn = fn(&mut dyn HidTransport, u8) -> HeadsetResult<usize>;

/// Query the battery state.
pub type BatteryFn = fn(&mut dyn HidTransport) -> HeadsetResult<BatteryStatus>;

/// Play a built-in notification sound. Returns bytes accepted by the transport.
pub type NotificationSoundFn = fn(&mut dyn HidTransport, u8) -> HeadsetResult<usize>;

/// Registration-time invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("descriptor {vendor_id:04x}:{product_id:04x} has an empty name")]
    EmptyName { vendor_id: u16, product_id: u16 },

    #[error("{device}: declared capabilities {declared:?} do not match bound operations {bound:?}")]
    CapabilityBindingMismatch {
        device: &'static str,
        declared: Capabilities,
        bound: Capabilities,
    },

    #[error("{first} and {second} share vendor/product id {vendor_id:04x}:{product_id:04x}")]
    DuplicateIdentity {
        vendor_id: u16,
        product_id: u16,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Clone, Copy, Default)]
struct Bindings {
    sidetone: Option<SidetoneFn>,
    battery: Option<BatteryFn>,
    notification_sound: Option<NotificationSoundFn>,
}

impl Bindings {
    fn bound(&self) -> Capabilities {
        let mut bound = Capabilities::empty();
        bound.set(Capabilities::SIDETONE, self.sidetone.is_some());
        bound.set(Capabilities::BATTERY_STATUS, self.battery.is_some());
        bound.set(
            Capabilities::NOTIFICATION_SOUND,
            self.notification_sound.is_some(),
        );
        bound
    }
}

/// One supported hardware variant.
#[derive(Clone, Copy)]
pub struct DeviceDescriptor {
    vendor_id: u16,
    product_id: u16,
    name: &'static str,
    capabilities: Capabilities,
    bindings: Bindings,
}

impl DeviceDescriptor {
    /// Descriptor with identity only; capabilities are added by the `with_*` binders.
    pub fn new(vendor_id: u16, product_id: u16, name: &'static str) -> Self {
        Self {
            vendor_id,
            product_id,
            name,
            capabilities: Capabilities::empty(),
            bindings: Bindings::default(),
        }
    }

    /// Declare [`Capability::Sidetone`] and bind its operation.
    pub fn with_sidetone(mut self, handler: SidetoneFn) -> Self {
        self.bindings.sidetone = Some(handler);
        self.capabilities |= Capabilities::SIDETONE;
        self
    }

    /// Declare [`Capability::BatteryStatus`] and bind its operation.
    pub fn with_battery(mut self, handler: BatteryFn) -> Self {
        self.bindings.battery = Some(handler);
        self.capabilities |= Capabilities::BATTERY_STATUS;
        self
    }

    /// Declare [`Capability::NotificationSound`] and bind its operation.
    pub fn with_notification_sound(mut self, handler: NotificationSoundFn) -> Self {
        self.bindings.notification_sound = Some(handler);
        self.capabilities |= Capabilities::NOTIFICATION_SOUND;
        self
    }

    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    pub fn product_id(&self) -> u16 {
        self.product_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.supports(capability)
    }

    pub fn matches(&self, vendor_id: u16, product_id: u16) -> bool {
        self.vendor_id == vendor_id && self.product_id == product_id
    }

    /// Capabilities that have an operation bound, regardless of declaration.
    pub fn bound_capabilities(&self) -> Capabilities {
        self.bindings.bound()
    }

    /// Check the registration invariants: a non-empty name, and every declared
    /// capability bound (and nothing bound that is not declared).
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.trim().is_empty() {
            return Err(DescriptorError::EmptyName {
                vendor_id: self.vendor_id,
                product_id: self.product_id,
            });
        }
        let bound = self.bindings.bound();
        if bound != self.capabilities {
            return Err(DescriptorError::CapabilityBindingMismatch {
                device: self.name,
                declared: self.capabilities,
                bound,
            });
        }
        Ok(())
    }

    fn unsupported(&self, capability: Capability) -> HeadsetError {
        warn!("{} rejected {} request: capability not declared", self.name, capability);
        HeadsetError::UnsupportedCapability {
            device: self.name,
            capability,
        }
    }

    fn bound<F>(&self, capability: Capability, handler: Option<F>) -> HeadsetResult<F> {
        match handler {
            Some(handler) if self.capabilities.supports(capability) => Ok(handler),
            _ => Err(self.unsupported(capability)),
        }
    }

    /// Set the sidetone level (`0..=128`, higher levels saturate).
    pub fn send_sidetone(
        &self,
        transport: &mut dyn HidTransport,
        level: u8,
    ) -> HeadsetResult<usize> {
        let handler = self.bound(Capability::Sidetone, self.bindings.sidetone)?;
        debug!("{}: sidetone level {}", self.name, level);
        handler(transport, level)
    }

    /// Query the current battery state.
    pub fn request_battery(&self, transport: &mut dyn HidTransport) -> HeadsetResult<BatteryStatus> {
        let handler = self.bound(Capability::BatteryStatus, self.bindings.battery)?;
        debug!("{}: battery request", self.name);
        handler(transport)
    }

    /// Play notification sound `sound_id`.
    pub fn play_notification_sound(
        &self,
        transport: &mut dyn HidTransport,
        sound_id: u8,
    ) -> HeadsetResult<usize> {
        let handler = self.bound(
            Capability::NotificationSound,
            self.bindings.notification_sound,
        )?;
        debug!("{}: notification sound {}", self.name, sound_id);
        handler(transport, sound_id)
    }
}

impl fmt::Debug for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDescriptor")
            .field("vendor_id", &format_args!("0x{:04X}", self.vendor_id))
            .field("product_id", &format_args!("0x{:04X}", self.product_id))
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
