use crate::bits::ones;
use crate::soc::Pins;

/// Only the low byte of GPI takes part in the delay
pub const GPI_MASK: u32 = 0x00FF;
/// Spin iterations per set input bit
pub const DELAY_PER_BIT: u32 = 10_000;

const FAIL_HIGH: u32 = 10;
const FAIL_LOW: u32 = 1000;
const PASS_HALF_PERIOD: u32 = 100_000;

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Pattern {
    /// Short flash, long dark. Also what traps and panics fall back to.
    Fail,
    /// Slow, even square wave
    Pass,
    /// Half period scales with the set bits of the GPI low byte
    Gpio,
}

pub const SELECTED_PATTERN: Pattern = match () {
    #[cfg(feature = "pattern-fail")]
    () => Pattern::Fail,
    #[cfg(all(feature = "pattern-pass", not(feature = "pattern-fail")))]
    () => Pattern::Pass,
    #[cfg(not(any(feature = "pattern-pass", feature = "pattern-fail")))]
    () => Pattern::Gpio,
};

impl Pattern {
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Fail => "fail",
            Pattern::Pass => "pass",
            Pattern::Gpio => "gpio",
        }
    }

    /// Spin counts for the (high, low) halves of one period.
    /// `sample` is the GPI value and is ignored by the fixed patterns.
    pub fn half_periods(self, sample: u32) -> (u32, u32) {
        match self {
            Pattern::Fail => (FAIL_HIGH, FAIL_LOW),
            Pattern::Pass => (PASS_HALF_PERIOD, PASS_HALF_PERIOD),
            Pattern::Gpio => {
                let dly = gpio_delay(sample);
                (dly, dly)
            }
        }
    }
}

/// Busy-wait length for a GPI sample: `ones(sample & 0xFF) * 10000`, at most 80000
pub fn gpio_delay(sample: u32) -> u32 {
    ones(sample & GPI_MASK) as u32 * DELAY_PER_BIT
}

/// Drive one full period: high, wait, low, wait.
pub fn blink_once<P: Pins>(pins: &mut P, pattern: Pattern) {
    let sample = match pattern {
        Pattern::Gpio => pins.read_input(),
        Pattern::Fail | Pattern::Pass => 0,
    };
    let (high, low) = pattern.half_periods(sample);

    pins.set_output(true);
    pins.spin(high);

    pins.set_output(false);
    pins.spin(low);
}

pub fn blink<P: Pins>(pins: &mut P, pattern: Pattern) -> ! {
    loop {
        blink_once(pins, pattern);
    }
}
