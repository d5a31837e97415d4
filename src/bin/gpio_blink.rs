#![no_std]
#![no_main]

use gpio_blink::{blink, debug_println, Soc, SELECTED_PATTERN};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn main() {
    debug_println!("gpio_blink: {} pattern", SELECTED_PATTERN.name());
    blink(&mut Soc, SELECTED_PATTERN);
}
