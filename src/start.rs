use core::panic::PanicInfo;
use riscv::register;
use riscv::register::mtvec::{Mtvec, TrapMode};

use crate::blink::{blink, Pattern};
use crate::debug_println;
use crate::soc::{Soc, SRAM_BASE, SRAM_SIZE};

const STACK_TOP: usize = SRAM_BASE + SRAM_SIZE;

unsafe extern "C" {
    fn main() -> ();
}

/// Reset entry point
/// Nothing may touch the stack before sp is set, so this only loads sp
/// and hands over to `rust_start`.
#[unsafe(link_section = ".start")]
#[unsafe(no_mangle)]
#[unsafe(naked)]
unsafe extern "C" fn start() -> ! {
    core::arch::naked_asm!(
        "li sp, {stack_top}",
        "tail {rust_start}",
        stack_top = const STACK_TOP,
        rust_start = sym rust_start,
    )
}

/// main is expected to blink forever; returning from it counts as a failure
unsafe extern "C" fn rust_start() -> ! {
    set_trap_vector(default_trap_handler);

    unsafe { main(); }

    debug_println!("main returned");
    blink(&mut Soc, Pattern::Fail)
}

fn set_trap_vector(handler: unsafe extern "C" fn() -> !) {
    let mut mtvec = Mtvec::from_bits(0);
    mtvec.set_address(handler as *const () as usize);
    mtvec.set_trap_mode(TrapMode::Direct);
    unsafe { register::mtvec::write(mtvec) };
}

// Interrupts are never enabled, so any trap here is the core misbehaving.
// No mret: we stay in the fail pattern for good.
#[unsafe(link_section = ".trap_handler")]
#[unsafe(no_mangle)]
unsafe extern "C" fn default_trap_handler() -> ! {
    debug_println!(
        "TRAP mcause={:#010x} mepc={:#010x} mtval={:#010x}",
        register::mcause::read().bits(),
        register::mepc::read(),
        register::mtval::read()
    );
    blink(&mut Soc, Pattern::Fail)
}

#[panic_handler]
fn panic_handler(_panic: &PanicInfo<'_>) -> ! {
    debug_println!("panic");
    blink(&mut Soc, Pattern::Fail)
}
