//! # MD4 Message Digest (RFC 1320)
//!
//! MD5's predecessor, hosted on the same [`Engine`](crate::engine::Engine)
//! skeleton: identical 64-byte blocks, padding, and little-endian length and
//! output, but 48 rounds in three passes with per-pass word orders instead
//! of MD5's index formulas.
//!
//! **Note**: MD4 is even more thoroughly broken than MD5. Deterministic
//! legacy digest only, never a security primitive.

use crate::digest::{Digest, DIGEST_SIZE};
use crate::engine::{BlockCompress, Engine, BLOCK_SIZE};

/// The size of the MD4 digest in bytes (128 bits = 16 bytes).
pub const MD4_OUTPUT_SIZE: usize = DIGEST_SIZE;

/// The initial register values, shared with MD5 (RFC 1320 §3.3).
static INIT: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// Additive constants for passes 2 and 3: the square roots of 2 and 3 in
/// 32-bit fixed point (pass 1 adds nothing).
const ROOT2: u32 = 0x5a827999;
const ROOT3: u32 = 0x6ed9eba1;

/// Per-pass rotation patterns, applied cyclically within each pass.
static PASS1_SHIFTS: [u32; 4] = [3, 7, 11, 19];
static PASS2_SHIFTS: [u32; 4] = [3, 5, 9, 13];
static PASS3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

/// Pass 3 consumes the message words in bit-reversed index order
/// (RFC 1320 §3.4, round 3).
static PASS3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Majority function; replaced by MD5's G.
#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

/// The MD4 compression function, plugged into [`Engine`].
pub struct Md4Core;

impl BlockCompress for Md4Core {
    type State = [u32; 4];
    type Output = Digest;

    fn init() -> Self::State {
        INIT
    }

    fn compress(state: &mut Self::State, block: &[u8; BLOCK_SIZE]) {
        let mut m = [0u32; 16];
        for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes(bytes.try_into().unwrap());
        }

        let [mut a, mut b, mut c, mut d] = *state;

        // Pass 1: message words in order.
        for round in 0..16 {
            let temp = a
                .wrapping_add(f(b, c, d))
                .wrapping_add(m[round])
                .rotate_left(PASS1_SHIFTS[round % 4]);
            (a, b, c, d) = (d, temp, b, c);
        }

        // Pass 2: column-major word order 0,4,8,12, 1,5,9,13, ...
        for round in 0..16 {
            let word = (round % 4) * 4 + round / 4;
            let temp = a
                .wrapping_add(g(b, c, d))
                .wrapping_add(m[word])
                .wrapping_add(ROOT2)
                .rotate_left(PASS2_SHIFTS[round % 4]);
            (a, b, c, d) = (d, temp, b, c);
        }

        // Pass 3: bit-reversed word order.
        for round in 0..16 {
            let temp = a
                .wrapping_add(h(b, c, d))
                .wrapping_add(m[PASS3_ORDER[round]])
                .wrapping_add(ROOT3)
                .rotate_left(PASS3_SHIFTS[round % 4]);
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

/// A streaming MD4 engine: `update` with successive chunks, then
/// `finalize` for the digest.
pub type Md4 = Engine<Md4Core>;

/// Convenience function to compute the MD4 digest of `data` in a single
/// shot.
pub fn md4_digest(data: &[u8]) -> Digest {
    let mut hasher = Md4::new();
    hasher.update(data);
    hasher.finalize()
}

/// One-shot MD4 rendered as a 32-character lowercase hex string.
pub fn md4_hex(data: &[u8]) -> String {
    md4_digest(data).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc_1320_test_suite() {
        // The full appendix A.5 suite.
        let vectors: [(&[u8], &str); 7] = [
            (b"", "31d6cfe0d16ae931b73c59d7e0c089c0"),
            (b"a", "bde52cb31de33e46245e05fbdbd6fb24"),
            (b"abc", "a448017aaf21d8525fc10ae87aa6729d"),
            (b"message digest", "d9130a8164549fe818874806e1c7014b"),
            (
                b"abcdefghijklmnopqrstuvwxyz",
                "d79e1c308aa5bbcdeea8ed63df412da9",
            ),
            (
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "043f8582f241db351ce627e153e7f0e4",
            ),
            (
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "e33b4ddc9c38f2199c3e7b164fcc0536",
            ),
        ];
        for (input, expected) in vectors {
            assert_eq!(md4_hex(input), expected);
        }
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let input = b"abcdefghijklmnopqrstuvwxyz";
        for chunk_size in [1usize, 3, 25, 26] {
            let mut hasher = Md4::new();
            for chunk in input.chunks(chunk_size) {
                hasher.update(chunk);
            }
            assert_eq!(hasher.finalize(), md4_digest(input), "chunk size {chunk_size}");
        }
    }

    #[test]
    fn test_md4_and_md5_disagree() {
        // Same engine skeleton, different compressors.
        assert_ne!(
            md4_digest(b"abc"),
            crate::md5::md5_digest(b"abc")
        );
    }

    #[test]
    fn test_hex_output_is_always_32_chars() {
        assert_eq!(md4_digest(b"").as_bytes().len(), MD4_OUTPUT_SIZE);
        assert_eq!(md4_hex(b"").len(), 2 * MD4_OUTPUT_SIZE);
        assert_eq!(md4_hex(&[0u8; 1000]).len(), 2 * MD4_OUTPUT_SIZE);
    }
}
