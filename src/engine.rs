//! # Fixed-Block Hash Engine
//!
//! The reusable Merkle–Damgård skeleton shared by the digest modules in this
//! crate: byte accumulation into 64-byte blocks, streaming `update`, and the
//! padding/length-encoding performed by `finalize`. The per-block compression
//! function is supplied through the [`BlockCompress`] trait, so the same
//! engine hosts MD5, MD4, or any other hash in the 64-byte-block,
//! little-endian-length family.
//!
//! ## Key Features
//! - **Streaming**: feed data incrementally (`update`) and then `finalize`;
//!   a trailing partial block is buffered inline, full blocks are folded
//!   immediately, so arbitrarily large inputs hash in constant memory.
//! - **Single-pass**: the whole pipeline is a left fold over blocks with no
//!   backtracking and no heap allocation.
//! - **Misuse-resistant**: `finalize` consumes the engine, so finalizing
//!   twice is a compile error rather than a runtime bug.

use std::fmt;

use log::trace;

/// Size of a message block in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Padding always reserves the final 8 bytes of the last block for the
/// little-endian bit length of the unpadded message.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// The compression function at the heart of a Merkle–Damgård hash.
///
/// Implementors are stateless marker types; all state is threaded through
/// [`BlockCompress::State`] by the engine, so concurrent digest computations
/// never share anything.
pub trait BlockCompress {
    /// Chaining state folded through the blocks (e.g. four 32-bit registers).
    type State: Clone;
    /// Final digest form produced after the last block.
    type Output;

    /// The fixed initial chaining value.
    fn init() -> Self::State;

    /// Folds one 64-byte block into the state. Must be a pure function of
    /// `(state, block)`; the engine calls it exactly once per block, in
    /// message order.
    fn compress(state: &mut Self::State, block: &[u8; BLOCK_SIZE]);

    /// Serializes the final chaining state.
    fn output(state: Self::State) -> Self::Output;
}

/// A streaming hash engine over 64-byte blocks.
///
/// Owns the chaining state, an inline buffer for the trailing partial block,
/// and the running bit count. Create one per message; independent engines
/// are fully parallelizable since no state is shared.
pub struct Engine<C: BlockCompress> {
    state: C::State,
    /// Trailing partial block, always `< BLOCK_SIZE` bytes between calls.
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bits mod 2^64.
    length_bits: u64,
}

impl<C: BlockCompress> Engine<C> {
    /// Creates a fresh engine with the compressor's initial chaining value.
    pub fn new() -> Self {
        Self {
            state: C::init(),
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            length_bits: 0,
        }
    }

    /// Absorbs `data`, folding each completed 64-byte block into the state.
    /// May be called any number of times with any chunking; the digest
    /// depends only on the concatenated bytes.
    pub fn update(&mut self, mut data: &[u8]) {
        self.length_bits = self
            .length_bits
            .wrapping_add((data.len() as u64).wrapping_mul(8));

        // Top up a buffered partial block first.
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];
            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            C::compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Whole blocks straight from the input, no copy.
        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            C::compress(&mut self.state, block.try_into().unwrap());
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Pads the message (single `0x80` byte, zero fill to 56 mod 64, 64-bit
    /// little-endian bit length), folds the final block(s), and returns the
    /// digest. Consumes the engine, so it cannot be finalized twice.
    pub fn finalize(mut self) -> C::Output {
        trace!(
            "finalizing digest after {} message bytes",
            self.length_bits >> 3
        );
        let length_le = self.length_bits.to_le_bytes();

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // No room left for the 8-byte length field: flush an extra
        // all-padding block.
        if self.buffer_len > LENGTH_OFFSET {
            self.buffer[self.buffer_len..].fill(0);
            C::compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len..LENGTH_OFFSET].fill(0);
        self.buffer[LENGTH_OFFSET..].copy_from_slice(&length_le);
        C::compress(&mut self.state, &self.buffer);

        C::output(self.state)
    }

    /// Resets to the initial chaining value, discarding any buffered bytes,
    /// so the engine can be reused for a new message.
    pub fn reset(&mut self) {
        self.state = C::init();
        self.buffer_len = 0;
        self.length_bits = 0;
    }

    /// Number of message bytes absorbed so far (mod 2^61, the byte
    /// equivalent of the wrapping 64-bit bit counter).
    pub fn bytes_consumed(&self) -> u64 {
        self.length_bits >> 3
    }
}

impl<C: BlockCompress> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BlockCompress> Clone for Engine<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            buffer: self.buffer,
            buffer_len: self.buffer_len,
            length_bits: self.length_bits,
        }
    }
}

impl<C: BlockCompress> fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("buffer_len", &self.buffer_len)
            .field("length_bits", &self.length_bits)
            .finish_non_exhaustive()
    }
}
