//! HS70 capability operations over an open transport, and the HS70 descriptor.
//!
//! Each operation performs at most one write and one read. Transport errors
//! are returned after the single failing call; retry policy belongs to the
//! caller.

#![deny(static_mut_refs)]

use crate::ids::{CORSAIR_VENDOR_ID, product_ids};
use crate::input::{BATTERY_RESPONSE_LEN, parse_battery_response};
use crate::output::{build_battery_request, build_notification_sound_report, build_sidetone_report};
use crate::types::CorsairModel;
use headsetctl_hid_common::{
    BatteryStatus, DeviceDescriptor, HeadsetError, HeadsetResult, HidTransport,
};
use tracing::{debug, info, warn};

/// Set the sidetone level (`0..=128`) with one feature-report write.
///
/// Returns the number of bytes the transport accepted.
pub fn send_sidetone(transport: &mut dyn HidTransport, level: u8) -> HeadsetResult<usize> {
    let report = build_sidetone_report(level);
    debug!("HS70 sidetone report {:02X?}", report);
    transport.send_feature_report(&report).map_err(|e| {
        warn!("HS70 sidetone write failed: {}", e);
        HeadsetError::from(e)
    })
}

/// Query the battery: write `C9 64`, read the 5-byte response, decode it.
pub fn request_battery(transport: &mut dyn HidTransport) -> HeadsetResult<BatteryStatus> {
    let request = build_battery_request();
    let written = transport.write(&request).map_err(|e| {
        warn!("HS70 battery request write failed: {}", e);
        HeadsetError::from(e)
    })?;
    if written < request.len() {
        debug!(
            "HS70 battery request partially written ({}/{} bytes)",
            written,
            request.len()
        );
    }

    let mut response = [0u8; BATTERY_RESPONSE_LEN];
    let read = transport.read(&mut response).map_err(|e| {
        warn!("HS70 battery response read failed: {}", e);
        HeadsetError::from(e)
    })?;

    let Some(parsed) = response.get(..read).and_then(parse_battery_response) else {
        warn!(
            "HS70 battery response too short: {} of {} bytes",
            read, BATTERY_RESPONSE_LEN
        );
        return Err(HeadsetError::ShortResponse {
            expected: BATTERY_RESPONSE_LEN,
            actual: read,
        });
    };
    debug!("HS70 battery response {:02X?}", response);

    let status = parsed.status();
    match status {
        BatteryStatus::Unavailable { status_code } => {
            warn!("HS70 reported unknown battery status code 0x{:02X}", status_code);
        }
        _ => info!(
            "HS70 battery: {} (mic up: {:?})",
            status,
            parsed.mic_up()
        ),
    }
    Ok(status)
}

/// Play notification sound `sound_id` (`0` or `1`; other ids are sent as-is).
pub fn play_notification_sound(
    transport: &mut dyn HidTransport,
    sound_id: u8,
) -> HeadsetResult<usize> {
    let report = build_notification_sound_report(sound_id);
    debug!("HS70 notification sound report {:02X?}", report);
    transport.write(&report).map_err(|e| {
        warn!("HS70 notification sound write failed: {}", e);
        HeadsetError::from(e)
    })
}

/// Descriptor for the Corsair HS70 with all three capabilities bound.
pub fn hs70_descriptor() -> DeviceDescriptor {
    DeviceDescriptor::new(
        CORSAIR_VENDOR_ID,
        product_ids::HS70,
        CorsairModel::Hs70.display_name(),
    )
    .with_sidetone(send_sidetone)
    .with_battery(request_battery)
    .with_notification_sound(play_notification_sound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsetctl_hid_common::transport::mock::MockTransport;
    use headsetctl_hid_common::{Capability, HidCommonError};

    #[test]
    fn test_descriptor_identity_and_capabilities() {
        let descriptor = hs70_descriptor();
        assert_eq!(descriptor.vendor_id(), 0x1B1C);
        assert_eq!(descriptor.product_id(), 0x0A38);
        assert_eq!(descriptor.name(), "Corsair HS70");
        assert_eq!(
            descriptor.capabilities(),
            CorsairModel::Hs70.capabilities()
        );
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_send_sidetone_uses_feature_report() -> HeadsetResult<()> {
        let observer = MockTransport::new();
        let mut transport = observer.clone();
        assert_eq!(send_sidetone(&mut transport, 0)?, 12);
        assert_eq!(observer.feature_report_calls(), 1);
        assert_eq!(observer.write_calls(), 0);
        assert_eq!(
            observer.feature_report_history(),
            vec![vec![
                0xFF, 0x0B, 0x00, 0xFF, 0x04, 0x0E, 0xFF, 0x05, 0x01, 0x04, 0x00, 200
            ]]
        );
        Ok(())
    }

    #[test]
    fn test_request_battery_strips_mic_flag() -> HeadsetResult<()> {
        let observer = MockTransport::new();
        let mut transport = observer.clone();
        observer.queue_read(vec![0x64, 0x00, 55 | 0x80, 0xB1, 0x01]);
        assert_eq!(request_battery(&mut transport)?, BatteryStatus::level(55));
        assert_eq!(observer.write_history(), vec![vec![0xC9, 0x64]]);
        assert_eq!(observer.read_calls(), 1);
        Ok(())
    }

    #[test]
    fn test_request_battery_write_failure_skips_read() {
        let observer = MockTransport::new();
        let mut transport = observer.clone();
        observer.fail_writes(true);
        observer.queue_read(vec![0x64, 0x00, 55, 0xB1, 0x01]);

        let result = request_battery(&mut transport);
        assert!(matches!(
            result,
            Err(HeadsetError::Transport(HidCommonError::WriteError(_)))
        ));
        assert_eq!(observer.write_calls(), 1);
        assert_eq!(observer.read_calls(), 0);
    }

    #[test]
    fn test_request_battery_short_read() {
        let observer = MockTransport::new();
        let mut transport = observer.clone();
        observer.queue_read(vec![0x64, 0x00, 55]);

        let result = request_battery(&mut transport);
        assert!(matches!(
            result,
            Err(HeadsetError::ShortResponse {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_notification_sound_frame() -> HeadsetResult<()> {
        let observer = MockTransport::new();
        let mut transport = observer.clone();
        assert_eq!(play_notification_sound(&mut transport, 1)?, 3);
        assert_eq!(observer.write_history(), vec![vec![0xCA, 0x02, 0x01]]);
        Ok(())
    }

    #[test]
    fn test_descriptor_dispatch_covers_every_capability() {
        let descriptor = hs70_descriptor();
        for capability in Capability::ALL {
            assert!(descriptor.supports(capability), "HS70 should support {capability}");
        }
    }
}
