// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use core::fmt;

// STM32F103 register addresses
const RCC_APB2ENR: *mut u32 = (0x4002_1000 + 0x18) as *mut u32;
const GPIOA_CRH: *mut u32 = (0x4001_0800 + 0x04) as *mut u32;

const USART1_BASE: u32 = 0x4001_3800;
const USART1_SR: *const u32 = USART1_BASE as *const u32;
const USART1_DR: *mut u32 = (USART1_BASE + 0x04) as *mut u32;
const USART1_BRR: *mut u32 = (USART1_BASE + 0x08) as *mut u32;
const USART1_CR1: *mut u32 = (USART1_BASE + 0x0C) as *mut u32;

// Bit definitions
const RCC_APB2ENR_IOPAEN: u32 = 1 << 2;
const RCC_APB2ENR_USART1EN: u32 = 1 << 14;
const USART_SR_TXE: u32 = 1 << 7;
const USART_CR1_TE: u32 = 1 << 3;
const USART_CR1_UE: u32 = 1 << 13;

// PA9 (TX): MODE = 0b11 (50 MHz output), CNF = 0b10 (AF push-pull)
const PA9_CRH_SHIFT: u32 = 4;
const PA9_AF_PUSH_PULL: u32 = 0xB;

/// Transmit-only USART1 console on PA9.
pub struct Usart1 {
    _private: (),
}

impl Usart1 {
    /// Clocks GPIOA and USART1, routes PA9 to the USART and enables the
    /// transmitter at `baud` (8N1).
    pub fn init(pclk_hz: u32, baud: u32) -> Self {
        unsafe {
            let apb2 = core::ptr::read_volatile(RCC_APB2ENR);
            core::ptr::write_volatile(
                RCC_APB2ENR,
                apb2 | RCC_APB2ENR_IOPAEN | RCC_APB2ENR_USART1EN,
            );

            let crh = core::ptr::read_volatile(GPIOA_CRH);
            core::ptr::write_volatile(
                GPIOA_CRH,
                (crh & !(0xF << PA9_CRH_SHIFT)) | (PA9_AF_PUSH_PULL << PA9_CRH_SHIFT),
            );

            core::ptr::write_volatile(USART1_BRR, brr(pclk_hz, baud));
            core::ptr::write_volatile(USART1_CR1, USART_CR1_UE | USART_CR1_TE);
        }

        Self { _private: () }
    }

    fn write_byte(&mut self, byte: u8) {
        unsafe {
            while (core::ptr::read_volatile(USART1_SR) & USART_SR_TXE) == 0 {}
            core::ptr::write_volatile(USART1_DR, byte as u32);
        }
    }
}

/// USARTDIV in 12.4 fixed point, rounded to nearest. 9600 baud at 8 MHz is 833.
const fn brr(pclk_hz: u32, baud: u32) -> u32 {
    (pclk_hz + baud / 2) / baud
}

const _: () = assert!(brr(8_000_000, 9600) == 833);

impl fmt::Write for Usart1 {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}
