#![cfg_attr(not(test), no_std)]

//! Bring-up smoke test for the emulated RV32 SoC.
//!
//! Reads the GPI register, counts the set bits of its low byte and toggles
//! GPIO bit 0 with a busy-wait proportional to that count. A trap or panic
//! switches to the fast "fail" blink instead.

pub mod bits;
pub mod blink;
mod dbg_print;
pub mod soc;

#[cfg(all(target_arch = "riscv32", target_os = "none"))]
mod start;

pub use bits::ones;
pub use blink::{blink, blink_once, gpio_delay, Pattern, SELECTED_PATTERN};
pub use dbg_print::DebugWriter;
pub use soc::{Pins, Soc};

/// Writes a formatted line to the debug console (a no-op without `htif`)
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let _ = writeln!($crate::DebugWriter, $($arg)*);
    }};
}
