//! The [ChaCha] quarter-round, the add-rotate-xor (ARX) mixing function at
//! the heart of the ChaCha family of stream ciphers.
//!
//! This crate provides the quarter-round on its own. It does not implement
//! the ChaCha block function or a stream cipher.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! A single quarter-round provides no security by itself. It is exposed as a
//! building block for implementing and testing ARX constructions.
//!
//! # Diagram
//!
//! Each quarter-round consists of four add-xor-rotate steps, each one
//! updating one word from the sum of two others:
//!
//! ```text
//! a += b; d ^= a; d <<<= 16;
//! c += d; b ^= c; b <<<= 12;
//! a += b; d ^= a; d <<<= 8;
//! c += d; b ^= c; b <<<= 7;
//! ```
//!
//! Legend:
//!
//! - `+=` wrapping add modulo 2<sup>32</sup>
//! - `<<<=` rotate left
//! - `^=` xor
//!
//! # Example
//! ```
//! use quarter_round::quarter_round;
//!
//! // RFC 8439, Section 2.1.1
//! let input = [0x11111111, 0x01020304, 0x9b8d6f43, 0x01234567];
//! let output = quarter_round(input);
//!
//! assert_eq!(output, [0xea2a92f4, 0xcb1cf8ce, 0x4581472e, 0x5881c4bb]);
//! ```
//!
//! [ChaCha]: https://tools.ietf.org/html/rfc8439#section-2.1

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

mod arx;

pub use arx::rotate_left_32;

/// A 32-bit word. All arithmetic on words wraps modulo 2<sup>32</sup>.
pub type Word = u32;

/// Number of words a quarter-round operates on.
pub const STATE_WORDS: usize = 4;

/// The `(a, b, c, d)` words of one quarter-round, in positional order.
pub type State = [Word; STATE_WORDS];

/// Rotation distances of the four add-xor-rotate steps, in order.
pub const ROTATIONS: [u32; STATE_WORDS] = [16, 12, 8, 7];

/// Apply the ChaCha quarter-round to `(a, b, c, d)`.
///
/// The four steps run strictly in sequence: each reads the words written by
/// the previous one. The function is total over every input and can be
/// evaluated in a `const` context.
///
/// ```
/// use quarter_round::{State, quarter_round};
///
/// const OUT: State = quarter_round([0x0012dffa, 0xaafb4cd5, 0x18769012, 0xaff22300]);
/// assert_eq!(OUT, [0x98abe4fa, 0x5c11c730, 0x8d259ba5, 0x64e00697]);
/// ```
#[inline]
#[must_use]
pub const fn quarter_round(state: State) -> State {
    let [mut a, mut b, mut c, mut d] = state;

    (a, d) = arx::add_xor_rotate(a, b, d, ROTATIONS[0]);
    (c, b) = arx::add_xor_rotate(c, d, b, ROTATIONS[1]);
    (a, d) = arx::add_xor_rotate(a, b, d, ROTATIONS[2]);
    (c, b) = arx::add_xor_rotate(c, d, b, ROTATIONS[3]);

    [a, b, c, d]
}

/// Apply the quarter-round in place to the words at positions `a`, `b`, `c`
/// and `d` of `state`.
///
/// All other words are left untouched. Indices are expected to be distinct;
/// if they repeat, the write to the later position in `(a, b, c, d)` wins.
///
/// ```
/// use quarter_round::quarter_round_at;
///
/// let mut state = [0u32; 16];
/// state[1] = 1;
/// quarter_round_at(1, 5, 9, 13, &mut state);
///
/// assert_eq!(state[1], 0x10000001);
/// assert_eq!(state[0], 0);
/// ```
///
/// # Panics
/// If any index is out of bounds for `state`.
#[inline]
pub fn quarter_round_at(a: usize, b: usize, c: usize, d: usize, state: &mut [Word]) {
    let [wa, wb, wc, wd] = quarter_round([state[a], state[b], state[c], state[d]]);
    state[a] = wa;
    state[b] = wb;
    state[c] = wc;
    state[d] = wd;
}
