/// Counts the set bits of `n` one at a time.
///
/// This is the instruction mix the smoke test is about (and, shift, branch),
/// so it must stay a loop rather than `count_ones()`.
#[inline(never)]
pub fn ones(mut n: u32) -> u8 {
    let mut count = 0u8;
    while n != 0 {
        count += (n & 1) as u8;
        n >>= 1;
    }
    count
}
