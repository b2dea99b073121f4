//! HID transport abstraction consumed by the protocol codecs.

use crate::HidCommonResult;

#[cfg(feature = "hidapi")]
pub mod hidapi_transport;
pub mod mock;

/// An already-open HID handle.
///
/// Codecs never open or enumerate devices; the caller opens a handle and lends
/// it for the duration of one capability call. Implementations are not
/// expected to serialize access: the `&mut self` receivers make one caller at a
/// time the rule, and sharing a handle across threads needs the caller's own
/// synchronization.
pub trait HidTransport: Send {
    /// Write an output report. Returns the number of bytes accepted.
    fn write(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    /// Read one input report into `buf`. Returns the number of bytes stored.
    fn read(&mut self, buf: &mut [u8]) -> HidCommonResult<usize>;

    /// Send a feature report. Returns the number of bytes accepted.
    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;
}

impl<T: HidTransport + ?Sized> HidTransport for Box<T> {
    fn write(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> HidCommonResult<usize> {
        (**self).read(buf)
    }

    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        (**self).send_feature_report(data)
    }
}
