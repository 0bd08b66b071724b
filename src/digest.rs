//! # Digest Value Type
//!
//! The 128-bit output shared by the MD4/MD5 engines: a fixed 16-byte value
//! with lowercase hexadecimal rendering and parsing. Rendering is total;
//! parsing a digest back from hex (e.g. to compare against a published
//! checksum) is the only fallible operation in this crate.

use std::fmt;

use thiserror::Error;

/// The size of a 128-bit digest in bytes.
pub const DIGEST_SIZE: usize = 16;

/// A 128-bit message digest.
///
/// Produced by serializing the four 32-bit state words little-endian, in
/// word order A, B, C, D (RFC 1321 §3.5 / RFC 1320 §3.5).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

/// Errors from parsing a digest out of a hexadecimal string.
/// `PartialEq` only: the wrapped [`hex::FromHexError`] does not implement
/// `Eq`.
#[derive(Debug, Error, PartialEq)]
pub enum DigestError {
    /// The string is not exactly 32 hex characters.
    #[error("expected {expected} hex characters, got {got}")]
    Length {
        /// Required character count (always 2 * [`DIGEST_SIZE`]).
        expected: usize,
        /// Character count actually supplied.
        got: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[error("invalid hex digit: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Digest {
    /// Builds a digest from four 32-bit state words, serialized
    /// little-endian in word order A, B, C, D.
    pub fn from_le_words(words: [u32; 4]) -> Self {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self(out)
    }

    /// Renders the digest as 32 lowercase hex characters, no separators,
    /// leading zeros preserved per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from a 32-character hex string.
    /// Accepts either letter case; rendering always emits lowercase.
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        if s.len() != 2 * DIGEST_SIZE {
            return Err(DigestError::Length {
                expected: 2 * DIGEST_SIZE,
                got: s.len(),
            });
        }
        let mut out = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s, &mut out)?;
        Ok(Self(out))
    }

    /// Returns the raw 16 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest")
            .field(&format_args!("{}", self.to_hex()))
            .finish()
    }
}
