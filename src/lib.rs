//! # mdhash
//!
//! Streaming, allocation-conscious Merkle–Damgård hash engines in pure Rust.
//!
//! The crate is built around one reusable skeleton, [`engine::Engine`]: byte
//! accumulation into 64-byte blocks, RFC-style padding with a little-endian
//! 64-bit bit-length field, and a single-pass fold through a per-block
//! compression function supplied via [`engine::BlockCompress`]. Two
//! compressors are provided: [`md5`] (RFC 1321) and [`md4`] (RFC 1320).
//!
//! ```
//! use mdhash::{md5_hex, Md5};
//!
//! assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let mut hasher = Md5::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! ```
//!
//! **DISCLAIMER**: MD5 and MD4 are cryptographically broken. This crate
//! implements them as deterministic *legacy* digests (checksum display,
//! interoperability with old formats). Absolutely DO NOT use them for
//! signatures, password storage, or any security-sensitive purpose. If you
//! need a secure hash, use a vetted, modern library (e.g. SHA-2 or SHA-3
//! from RustCrypto).

pub mod digest;
pub mod engine;
pub mod md4;
pub mod md5;

// Re-export digest value functionality
pub use digest::{Digest, DigestError, DIGEST_SIZE};

// Re-export the engine skeleton
pub use engine::{BlockCompress, Engine, BLOCK_SIZE};

// Re-export MD5 functionality
pub use md5::{md5_digest, md5_hex, Md5, Md5Core, MD5_OUTPUT_SIZE};

#[cfg(feature = "parallel")]
pub use md5::md5_digest_many;

// Re-export MD4 functionality
pub use md4::{md4_digest, md4_hex, Md4, Md4Core, MD4_OUTPUT_SIZE};
