//! Lookup of device descriptors by USB identity.

use headsetctl_hid_common::{Capability, DescriptorError, DeviceDescriptor};
use headsetctl_hid_corsair_protocol as corsair;
use std::collections::HashMap;
use tracing::debug;

/// Every descriptor shipped with this crate.
pub fn builtin_descriptors() -> Vec<DeviceDescriptor> {
    vec![corsair::hs70_descriptor()]
}

/// Immutable collection of supported devices.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    descriptors: Vec<DeviceDescriptor>,
}

impl DeviceRegistry {
    /// Build a registry, validating every descriptor.
    ///
    /// Fails on the first descriptor whose declared capabilities and bound
    /// operations disagree, or whose vendor/product pair is already taken.
    pub fn new(descriptors: Vec<DeviceDescriptor>) -> Result<Self, DescriptorError> {
        let mut seen: HashMap<(u16, u16), &'static str> =
            HashMap::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            descriptor.validate()?;
            let key = (descriptor.vendor_id(), descriptor.product_id());
            if let Some(first) = seen.insert(key, descriptor.name()) {
                return Err(DescriptorError::DuplicateIdentity {
                    vendor_id: key.0,
                    product_id: key.1,
                    first,
                    second: descriptor.name(),
                });
            }
        }
        debug!("device registry built with {} descriptors", descriptors.len());
        Ok(Self { descriptors })
    }

    /// Registry of the built-in descriptors.
    pub fn builtin() -> Self {
        let descriptors = builtin_descriptors();
        debug_assert!(
            Self::new(descriptors.clone()).is_ok(),
            "built-in descriptors must validate"
        );
        Self { descriptors }
    }

    /// Descriptor for the given USB identity, if supported.
    pub fn find(&self, vendor_id: u16, product_id: u16) -> Option<&DeviceDescriptor> {
        let found = self
            .descriptors
            .iter()
            .find(|d| d.matches(vendor_id, product_id));
        if found.is_none() {
            debug!("no descriptor for {:04x}:{:04x}", vendor_id, product_id);
        }
        found
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeviceDescriptor> {
        self.descriptors.iter()
    }

    /// Descriptors declaring `capability`.
    pub fn with_capability(
        &self,
        capability: Capability,
    ) -> impl Iterator<Item = &DeviceDescriptor> {
        self.descriptors
            .iter()
            .filter(move |d| d.supports(capability))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// `(vendor_id, product_id)` of every registered device, in registration order.
    pub fn supported_ids(&self) -> Vec<(u16, u16)> {
        self.descriptors
            .iter()
            .map(|d| (d.vendor_id(), d.product_id()))
            .collect()
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a DeviceRegistry {
    type Item = &'a DeviceDescriptor;
    type IntoIter = std::slice::Iter<'a, DeviceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
