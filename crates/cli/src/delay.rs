// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use embedded_hal::delay::DelayNs;
use std::time::Duration;

/// Blocks the calling thread; the host stand-in for a busy-wait delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepDelay;

impl DelayNs for ThreadSleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        if ms > 0 {
            std::thread::sleep(Duration::from_millis(u64::from(ms)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_delay_blocks_at_least_requested_time() {
        let mut delay = ThreadSleepDelay;
        let start = Instant::now();
        delay.delay_ms(20);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
