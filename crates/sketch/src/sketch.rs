// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;

use crate::console::LINE_END;
use crate::sum::add_bytes;

/// Console baud rate the platform layer opens the serial port with.
pub const BAUD_RATE: u32 = 9600;

/// Pause before every loop iteration, in milliseconds.
pub const LOOP_INTERVAL_MS: u32 = 500;

/// Operands of the one-off computation printed by [`Sketch::setup`].
pub const DEMO_INPUTS: (u8, u8) = (2, 3);

/// The two byte counters. Both wrap at 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub a: u8,
    pub b: u8,
}

impl Counters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `a` moves by one, `b` by two.
    pub fn advance(&mut self) {
        self.a = self.a.wrapping_add(1);
        self.b = self.b.wrapping_add(2);
    }
}

/// One line printed by the periodic loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub a: u8,
    pub b: u8,
    pub result: u16,
}

/// State of the sketch: the counters plus the last computed sum.
///
/// The console and the delay are borrowed per call, so the same state can
/// be driven by the firmware's UART or by any other `fmt::Write`.
#[derive(Debug, Clone)]
pub struct Sketch {
    counters: Counters,
    result: u16,
    interval_ms: u32,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    pub fn new() -> Self {
        Self::with_interval_ms(LOOP_INTERVAL_MS)
    }

    pub fn with_interval_ms(interval_ms: u32) -> Self {
        Self {
            counters: Counters::default(),
            result: 0,
            interval_ms,
        }
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Sum from the most recent computation.
    pub fn result(&self) -> u16 {
        self.result
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Startup routine: prints the demonstration sum, then zeroes the
    /// counters. The counters are reset even if the console write fails.
    pub fn setup<W: Write>(&mut self, console: &mut W) -> fmt::Result {
        let (x, y) = DEMO_INPUTS;
        self.result = add_bytes(x, y);
        let written = write!(console, "Test Result: {}{}", self.result, LINE_END);
        self.counters.reset();
        written
    }

    /// One loop iteration without the delay: compute, print, advance.
    ///
    /// The counters advance whether or not the console accepted the line.
    pub fn tick<W: Write>(&mut self, console: &mut W) -> Result<Reading, fmt::Error> {
        let Counters { a, b } = self.counters;
        self.result = add_bytes(a, b);
        let reading = Reading {
            a,
            b,
            result: self.result,
        };
        let written = write!(console, "{} + {} = {}{}", a, b, reading.result, LINE_END);
        self.counters.advance();
        written.map(|()| reading)
    }

    /// Periodic loop. Output is best-effort: console errors are dropped.
    pub fn run<W: Write, D: DelayNs>(&mut self, console: &mut W, delay: &mut D) -> ! {
        loop {
            delay.delay_ms(self.interval_ms);
            let _ = self.tick(console);
        }
    }
}
