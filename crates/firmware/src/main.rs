#![no_std]
// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.
#![no_main]

mod delay;
mod usart;

use cortex_m_rt::entry;
use panic_halt as _;
use sol_sketch::{Sketch, BAUD_RATE};

use crate::delay::CycleDelay;
use crate::usart::Usart1;

// Nothing reprograms RCC, so the core and APB2 run from the 8 MHz HSI.
const SYSCLK_HZ: u32 = 8_000_000;

#[entry]
fn main() -> ! {
    let mut console = Usart1::init(SYSCLK_HZ, BAUD_RATE);
    let mut delay = CycleDelay::new(SYSCLK_HZ);

    let mut sketch = Sketch::new();
    let _ = sketch.setup(&mut console);
    sketch.run(&mut console, &mut delay)
}
