// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use std::fmt;
use std::io::{self, Write};

/// Host console for the sketch: a `fmt::Write` front over an `io::Write`.
///
/// When a byte limit is set and reached, further output is silently
/// dropped, like a serial line nobody is listening to. I/O errors are kept
/// so the caller can report them after the sketch sees `fmt::Error`.
pub struct Console<W: Write> {
    inner: W,
    bytes_written: u64,
    lines_written: u64,
    max_bytes: Option<u64>,
    limit_exceeded: bool,
    error: Option<io::Error>,
}

impl<W: Write> Console<W> {
    pub fn new(inner: W, max_bytes: Option<u64>) -> Self {
        Self {
            inner,
            bytes_written: 0,
            lines_written: 0,
            max_bytes,
            limit_exceeded: false,
            error: None,
        }
    }

    /// Returns the number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Returns the number of line terminators that reached the inner writer
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Returns true if the size limit has been reached
    pub fn limit_exceeded(&self) -> bool {
        self.limit_exceeded
    }

    /// Takes the I/O error behind the last failed write, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> fmt::Write for Console<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.limit_exceeded {
            return Ok(());
        }

        let buf = s.as_bytes();
        let to_write = match self.max_bytes {
            Some(max) => buf
                .len()
                .min(max.saturating_sub(self.bytes_written) as usize),
            None => buf.len(),
        };

        if let Err(e) = self.inner.write_all(&buf[..to_write]) {
            self.error = Some(e);
            return Err(fmt::Error);
        }
        self.bytes_written += to_write as u64;
        self.lines_written += buf[..to_write]
            .iter()
            .filter(|&&b| b == b'\n')
            .count() as u64;

        if self.max_bytes.is_some_and(|max| self.bytes_written >= max) {
            self.limit_exceeded = true;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn test_console_unlimited() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, None);

        console.write_str("0 + 0 = 0\r\n").unwrap();
        assert_eq!(console.bytes_written(), 11);
        assert!(!console.limit_exceeded());
        assert_eq!(buf, b"0 + 0 = 0\r\n");
    }

    #[test]
    fn test_console_at_limit() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, Some(5));

        console.write_str("Hello").unwrap();
        assert_eq!(console.bytes_written(), 5);
        assert!(console.limit_exceeded());

        // Further writes should be silently dropped
        console.write_str(" World").unwrap();
        assert_eq!(console.bytes_written(), 5);
        assert_eq!(buf, b"Hello");
    }

    #[test]
    fn test_console_truncates_past_limit() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, Some(10));

        console.write_str("Test Result: 5\r\n").unwrap();
        assert_eq!(console.bytes_written(), 10);
        assert!(console.limit_exceeded());
        assert_eq!(buf, b"Test Resul");
    }

    #[test]
    fn test_console_counts_only_emitted_lines() {
        let mut buf = Vec::new();
        let mut console = Console::new(&mut buf, Some(20));

        console.write_str("Test Result: 5\r\n").unwrap();
        console.write_str("0 + 0 = 0\r\n").unwrap();
        console.write_str("1 + 2 = 3\r\n").unwrap();

        assert_eq!(console.lines_written(), 1);
        assert_eq!(console.bytes_written(), 20);
        assert_eq!(buf, b"Test Result: 5\r\n0 + ");
    }

    #[test]
    fn test_console_keeps_io_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut console = Console::new(Closed, None);
        assert!(console.write_str("x").is_err());

        let err = console.take_error().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(console.take_error().is_none());
    }
}
