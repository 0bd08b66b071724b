//! # MD5 Message Digest (RFC 1321)
//!
//! A from-scratch MD5 compression function hosted on the crate's
//! [`Engine`](crate::engine::Engine) skeleton: 64 rounds over each 64-byte
//! block, grouped into four 16-round passes with the F/G/H/I nonlinear
//! mixers, the sine-derived additive constants, and the fixed rotation
//! schedule of RFC 1321 Appendix A.
//!
//! **Note**: MD5 is cryptographically broken (practical collisions exist).
//! It is implemented here as a deterministic legacy digest only. Label its
//! output as non-secure in any consuming UI, and use SHA-2 or SHA-3 from a
//! vetted library for anything security-sensitive.

use crate::digest::{Digest, DIGEST_SIZE};
use crate::engine::{BlockCompress, Engine, BLOCK_SIZE};

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = DIGEST_SIZE;

/// The initial register values (A, B, C, D) from RFC 1321 §3.3.
static INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// The sine-derived additive constants: `K[i] = floor(2^32 * |sin(i+1)|)`
/// for i = 0..63 (RFC 1321 Appendix A). Cross-checked against that
/// definition in the tests below.
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, //
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501, //
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, //
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821, //
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, //
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8, //
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, //
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a, //
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, //
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70, //
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, //
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665, //
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, //
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1, //
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, //
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391, //
];

/// Per-round left-rotation amounts, one 4-entry pattern repeated four times
/// per pass (RFC 1321 Appendix A).
static S: [u32; 64] = [
    // Pass 1
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    // Pass 2
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
    // Pass 3
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    // Pass 4
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

// The four nonlinear mixers, one per 16-round pass (RFC 1321 §3.4).

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// The MD5 compression function, plugged into [`Engine`].
pub struct Md5Core;

impl BlockCompress for Md5Core {
    type State = [u32; 4];
    type Output = Digest;

    fn init() -> Self::State {
        INIT
    }

    /// One application of the RFC 1321 compression function: 16 little-endian
    /// message words, 64 rounds in four passes, then a wraparound add of the
    /// working registers back into the chaining state.
    fn compress(state: &mut Self::State, block: &[u8; BLOCK_SIZE]) {
        let mut m = [0u32; 16];
        for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes(bytes.try_into().unwrap());
        }

        let [mut a, mut b, mut c, mut d] = *state;

        for round in 0..64 {
            let (mix, word) = match round / 16 {
                0 => (f(b, c, d), round),
                1 => (g(b, c, d), (5 * round + 1) % 16),
                2 => (h(b, c, d), (3 * round + 5) % 16),
                _ => (i(b, c, d), (7 * round) % 16),
            };
            // Every add is mod 2^32 and the rotate is circular; a plain
            // shift or a checked add here silently corrupts the digest.
            let temp = b.wrapping_add(
                a.wrapping_add(mix)
                    .wrapping_add(K[round])
                    .wrapping_add(m[word])
                    .rotate_left(S[round]),
            );
            (a, b, c, d) = (d, temp, b, c);
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }

    fn output(state: Self::State) -> Digest {
        Digest::from_le_words(state)
    }
}

/// A streaming MD5 engine: `update` with successive chunks, then
/// `finalize` for the digest.
pub type Md5 = Engine<Md5Core>;

/// Convenience function to compute the MD5 digest of `data` in a single
/// shot.
pub fn md5_digest(data: &[u8]) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize()
}

/// One-shot MD5 rendered as a 32-character lowercase hex string.
pub fn md5_hex(data: &[u8]) -> String {
    md5_digest(data).to_hex()
}

/// Digests each input independently on the rayon thread pool. Order of the
/// results matches the order of the inputs.
#[cfg(feature = "parallel")]
pub fn md5_digest_many<T: AsRef<[u8]> + Sync>(inputs: &[T]) -> Vec<Digest> {
    use rayon::prelude::*;

    inputs.par_iter().map(|d| md5_digest(d.as_ref())).collect()
}
