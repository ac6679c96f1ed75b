//! Add-rotate-xor building blocks.

use crate::Word;

/// Circular left rotation of a 32-bit word by `n` bits.
///
/// Bits shifted out of the most significant position re-enter at the least
/// significant one. `n` is taken modulo 32.
///
/// ```
/// use quarter_round::rotate_left_32;
///
/// assert_eq!(rotate_left_32(0x8000_0001, 1), 0x0000_0003);
/// assert_eq!(rotate_left_32(0x1234_5678, 16), 0x5678_1234);
/// ```
#[inline(always)]
#[must_use]
pub const fn rotate_left_32(x: Word, n: u32) -> Word {
    x.rotate_left(n)
}

/// One half step of a quarter-round: `x += y; z ^= x; z <<<= n`.
///
/// Returns the updated `(x, z)` pair.
#[inline(always)]
pub(crate) const fn add_xor_rotate(x: Word, y: Word, z: Word, n: u32) -> (Word, Word) {
    let x = x.wrapping_add(y);
    (x, rotate_left_32(z ^ x, n))
}
