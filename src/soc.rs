// Only the two GPIO registers are used by this firmware
pub const GPIO_BASE: usize = 0x2000_0000;

/// GPIO output latch, only bit 0 is wired to the pin
pub const GPIO_PTR: *mut u32 = GPIO_BASE as *mut u32;
/// GPIO input sample
pub const GPI_PTR: *const u32 = (GPIO_BASE + 0x4) as *const u32;

pub const SRAM_BASE: usize = 0x1000_0000;
pub const SRAM_SIZE: usize = 8 * 1024;

/// What the blink loop needs from the board
pub trait Pins {
    fn read_input(&mut self) -> u32;
    fn set_output(&mut self, high: bool);
    /// Burn `iterations` loop iterations, one no-op each
    fn spin(&mut self, iterations: u32);
}

/// The real registers. There is a single thread of control, so no locking.
pub struct Soc;

impl Pins for Soc {
    #[inline(always)]
    fn read_input(&mut self) -> u32 {
        unsafe { core::ptr::read_volatile(GPI_PTR) }
    }

    #[inline(always)]
    fn set_output(&mut self, high: bool) {
        unsafe { core::ptr::write_volatile(GPIO_PTR, high as u32) };
    }

    #[inline(never)]
    fn spin(&mut self, iterations: u32) {
        for _ in 0..iterations {
            spin_once();
        }
    }
}

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[inline(always)]
fn spin_once() {
    // A write to x0 the compiler can't drop, unlike an empty loop body
    unsafe { core::arch::asm!("addi x0, x0, 1") };
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
#[inline(always)]
fn spin_once() {
    core::hint::spin_loop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_are_word_aligned_and_distinct() {
        assert_eq!(GPIO_PTR as usize % 4, 0);
        assert_eq!(GPI_PTR as usize % 4, 0);
        assert_ne!(GPIO_PTR as usize, GPI_PTR as usize);
    }

    #[test]
    fn test_stack_top_is_aligned() {
        assert_eq!((SRAM_BASE + SRAM_SIZE) % 16, 0);
    }

    #[test]
    fn test_soc_spin_returns() {
        // Spinning touches no registers, so it's safe to run on the host
        Soc.spin(0);
        Soc.spin(1000);
    }
}
