//! [`HidTransport`] over a `hidapi` device handle.

use super::HidTransport;
use crate::config::TransportConfig;
use crate::{HidCommonError, HidCommonResult};
use hidapi::{HidApi, HidDevice};
use tracing::debug;

/// A `hidapi` handle opened by vendor/product ID.
pub struct HidApiTransport {
    device: HidDevice,
    config: TransportConfig,
}

impl HidApiTransport {
    /// Open the first device matching `vendor_id:product_id`.
    pub fn open(
        api: &HidApi,
        vendor_id: u16,
        product_id: u16,
        config: TransportConfig,
    ) -> HidCommonResult<Self> {
        let device = api.open(vendor_id, product_id).map_err(|e| {
            HidCommonError::OpenError(format!("{vendor_id:04x}:{product_id:04x}: {e}"))
        })?;
        debug!(
            "Opened HID device {:04x}:{:04x} (read timeout {} ms)",
            vendor_id, product_id, config.read_timeout_ms
        );
        Ok(Self { device, config })
    }

    /// Wrap a handle the caller already opened.
    pub fn from_device(device: HidDevice, config: TransportConfig) -> Self {
        Self { device, config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

impl HidTransport for HidApiTransport {
    fn write(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        self.device
            .write(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))
    }

    fn read(&mut self, buf: &mut [u8]) -> HidCommonResult<usize> {
        self.device
            .read_timeout(buf, self.config.read_timeout_ms)
            .map_err(|e| HidCommonError::ReadError(e.to_string()))
    }

    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        // hidapi reports success without a byte count.
        self.device
            .send_feature_report(data)
            .map_err(|e| HidCommonError::WriteError(e.to_string()))?;
        Ok(data.len())
    }
}
