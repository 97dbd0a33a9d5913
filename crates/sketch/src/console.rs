// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use core::fmt;

/// Terminator appended to every console message (serial line convention).
pub const LINE_END: &str = "\r\n";

/// A wrapper around a console that counts the lines written through it.
/// A line is counted when its `\n` reaches the inner writer.
#[derive(Debug)]
pub struct LineCounter<W: fmt::Write> {
    inner: W,
    lines: u64,
}

impl<W: fmt::Write> LineCounter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Returns the number of complete lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> fmt::Write for LineCounter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.lines += s.bytes().filter(|&b| b == b'\n').count() as u64;
        Ok(())
    }
}
