// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The summation sketch, independent of any board.
//!
//! The firmware and the host runner both drive the same [`Sketch`]: they
//! supply a console (any [`core::fmt::Write`]) and a delay provider (any
//! [`embedded_hal::delay::DelayNs`]) and the sketch does the rest.

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod sketch;
pub mod sum;

pub use console::{LineCounter, LINE_END};
pub use sketch::{Counters, Reading, Sketch, BAUD_RATE, DEMO_INPUTS, LOOP_INTERVAL_MS};
pub use sum::add_bytes;
