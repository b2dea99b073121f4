//! Scripted in-memory transport for tests.

use super::HidTransport;
use crate::{HidCommonError, HidCommonResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockState {
    read_queue: VecDeque<Vec<u8>>,
    writes: Vec<Vec<u8>>,
    feature_reports: Vec<Vec<u8>>,
    write_calls: usize,
    read_calls: usize,
    feature_report_calls: usize,
    fail_writes: bool,
    fail_reads: bool,
    fail_feature_reports: bool,
    write_limit: Option<usize>,
    disconnected: bool,
}

/// Transport that records every frame and replays queued responses.
///
/// Clones share state, so a test can keep one handle for inspection while
/// lending another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue one input report for the next `read`.
    pub fn queue_read(&self, data: Vec<u8>) {
        self.state().read_queue.push_back(data);
    }

    pub fn write_history(&self) -> Vec<Vec<u8>> {
        self.state().writes.clone()
    }

    pub fn feature_report_history(&self) -> Vec<Vec<u8>> {
        self.state().feature_reports.clone()
    }

    pub fn write_calls(&self) -> usize {
        self.state().write_calls
    }

    pub fn read_calls(&self) -> usize {
        self.state().read_calls
    }

    pub fn feature_report_calls(&self) -> usize {
        self.state().feature_report_calls
    }

    /// Calls across all three primitives, failed ones included.
    pub fn total_calls(&self) -> usize {
        let state = self.state();
        state.write_calls + state.read_calls + state.feature_report_calls
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    pub fn fail_feature_reports(&self, fail: bool) {
        self.state().fail_feature_reports = fail;
    }

    /// Accept at most `limit` bytes per write or feature report (partial transfer).
    pub fn set_write_limit(&self, limit: Option<usize>) {
        self.state().write_limit = limit;
    }

    pub fn disconnect(&self) {
        self.state().disconnected = true;
    }

    pub fn reconnect(&self) {
        self.state().disconnected = false;
    }

    pub fn is_connected(&self) -> bool {
        !self.state().disconnected
    }
}

impl HidTransport for MockTransport {
    fn write(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let mut state = self.state();
        state.write_calls += 1;
        if state.disconnected {
            return Err(HidCommonError::Disconnected);
        }
        if state.fail_writes {
            return Err(HidCommonError::WriteError("mock write failure".to_string()));
        }
        state.writes.push(data.to_vec());
        Ok(state.write_limit.map_or(data.len(), |limit| limit.min(data.len())))
    }

    fn read(&mut self, buf: &mut [u8]) -> HidCommonResult<usize> {
        let mut state = self.state();
        state.read_calls += 1;
        if state.disconnected {
            return Err(HidCommonError::Disconnected);
        }
        if state.fail_reads {
            return Err(HidCommonError::ReadError("mock read failure".to_string()));
        }
        let report = state
            .read_queue
            .pop_front()
            .ok_or_else(|| HidCommonError::ReadError("No data available".to_string()))?;
        let len = report.len().min(buf.len());
        for (dst, src) in buf.iter_mut().zip(report.iter()) {
            *dst = *src;
        }
        Ok(len)
    }

    fn send_feature_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        let mut state = self.state();
        state.feature_report_calls += 1;
        if state.disconnected {
            return Err(HidCommonError::Disconnected);
        }
        if state.fail_feature_reports {
            return Err(HidCommonError::WriteError(
                "mock feature report failure".to_string(),
            ));
        }
        state.feature_reports.push(data.to_vec());
        Ok(state.write_limit.map_or(data.len(), |limit| limit.min(data.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_write_records_frames() -> Result<(), HidCommonError> {
        let mut transport = MockTransport::new();
        assert_eq!(transport.write(&[0xC9, 0x64])?, 2);
        assert_eq!(transport.write_history(), vec![vec![0xC9, 0x64]]);
        assert_eq!(transport.write_calls(), 1);
        assert_eq!(transport.total_calls(), 1);
        Ok(())
    }

    #[test]
    fn test_mock_read_truncates_to_buffer() -> Result<(), HidCommonError> {
        let mut transport = MockTransport::new();
        transport.queue_read(vec![1, 2, 3, 4, 5, 6, 7]);
        let mut buf = [0u8; 5];
        assert_eq!(transport.read(&mut buf)?, 5);
        assert_eq!(buf, [1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_mock_read_empty_queue_fails() {
        let mut transport = MockTransport::new();
        let mut buf = [0u8; 5];
        assert!(matches!(
            transport.read(&mut buf),
            Err(HidCommonError::ReadError(_))
        ));
        assert_eq!(transport.read_calls(), 1);
    }

    #[test]
    fn test_mock_clones_share_state() -> Result<(), HidCommonError> {
        let observer = MockTransport::new();
        let mut lent = observer.clone();
        lent.send_feature_report(&[0xFF, 0x0B])?;
        assert_eq!(observer.feature_report_history(), vec![vec![0xFF, 0x0B]]);
        Ok(())
    }

    #[test]
    fn test_mock_disconnect() {
        let mut transport = MockTransport::new();
        transport.disconnect();
        assert!(!transport.is_connected());
        assert!(matches!(
            transport.write(&[0x01]),
            Err(HidCommonError::Disconnected)
        ));
        assert!(transport.write_history().is_empty());

        transport.reconnect();
        assert!(transport.write(&[0x01]).is_ok());
    }

    #[test]
    fn test_mock_write_limit() -> Result<(), HidCommonError> {
        let mut transport = MockTransport::new();
        transport.set_write_limit(Some(1));
        assert_eq!(transport.write(&[0xCA, 0x02, 0x01])?, 1);
        assert_eq!(transport.send_feature_report(&[0xFF; 12])?, 1);
        Ok(())
    }
}
