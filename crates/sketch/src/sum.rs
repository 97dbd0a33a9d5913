// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

/// Adds two bytes, widened to `u16` so that `255 + 255` still fits.
pub fn add_bytes(x: u8, y: u8) -> u16 {
    u16::from(x) + u16::from(y)
}
