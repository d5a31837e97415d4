use core::fmt;

#[cfg(feature = "htif")]
mod htif {
    const DEVICE_CHAR: u64 =          0x0100_0000_0000_0000;
    const DEVICE_COMMAND_WRITE: u64 = 0x0001_0000_0000_0000;

    // The emulator finds this by symbol name and polls it
    #[allow(non_upper_case_globals)]
    #[unsafe(no_mangle)]
    #[unsafe(link_section = ".tohost")]
    pub(super) static mut tohost: u64 = 0;

    pub(super) fn debug_print_byte(c: u8) {
        let cmd = DEVICE_CHAR | DEVICE_COMMAND_WRITE | (c as u64);
        unsafe { core::ptr::write_volatile(&raw mut tohost, cmd) };
    }
}

/// Debug console sink for `debug_println!`. Drops everything without `htif`.
pub struct DebugWriter;

impl fmt::Write for DebugWriter {
    #[cfg(feature = "htif")]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.as_bytes() {
            htif::debug_print_byte(*c);
        }
        Ok(())
    }

    #[cfg(not(feature = "htif"))]
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Ok(())
    }
}
