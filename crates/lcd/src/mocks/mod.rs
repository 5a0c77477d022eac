//! Mock implementations for testing
//!
//! This module provides a recording [`Transport`] for use in unit and
//! integration tests.

#![cfg(any(test, feature = "mocks"))]

use std::io;

use crate::device::Transport;
use crate::error::DeviceError;

/// How the next flush should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// `write` returns an error.
    Error,
    /// `write` accepts only this many bytes.
    Short(usize),
}

/// Mock transport
#[derive(Debug, Default)]
pub struct MockTransport {
    frames: Vec<Vec<u8>>,
    failure: Option<Failure>,
    attempts: usize,
}

impl MockTransport {
    /// Create new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following flush fail, or succeed again with `None`.
    pub fn set_failure(&mut self, failure: Option<Failure>) {
        self.failure = failure;
    }

    /// Successfully written frames, oldest first
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Most recent successful frame
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Flushes attempted, failed ones included
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl Transport for MockTransport {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), DeviceError> {
        self.attempts = self.attempts.saturating_add(1);
        match self.failure {
            None => {
                self.frames.push(frame.to_vec());
                Ok(())
            }
            Some(Failure::Error) => Err(DeviceError::Write(io::Error::new(
                io::ErrorKind::Other,
                "mock write failure",
            ))),
            Some(Failure::Short(written)) => Err(DeviceError::ShortWrite {
                written: written.min(frame.len()),
                expected: frame.len(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_transport_records() {
        let mut transport = MockTransport::new();
        transport.write_frame(&[1, 2]).unwrap();
        transport.write_frame(&[3]).unwrap();

        assert_eq!(transport.frames(), &[vec![1, 2], vec![3]]);
        assert_eq!(transport.last_frame(), Some(&[3u8][..]));
        assert_eq!(transport.attempts(), 2);
    }

    #[test]
    fn test_mock_transport_failures() {
        let mut transport = MockTransport::new();

        transport.set_failure(Some(Failure::Error));
        assert!(matches!(transport.write_frame(&[0; 4]), Err(DeviceError::Write(_))));

        transport.set_failure(Some(Failure::Short(3)));
        assert!(matches!(
            transport.write_frame(&[0; 4]),
            Err(DeviceError::ShortWrite { written: 3, expected: 4 })
        ));

        assert!(transport.frames().is_empty());
        assert_eq!(transport.attempts(), 2);
    }
}
