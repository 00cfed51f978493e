//! SHA-512 core hashing functions
//!
//! This module implements the core logic of the SHA-512 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - a streaming hasher for input that arrives in chunks
//! - a complete one-shot hashing function for arbitrary-length input
//!
//! The implementation is intentionally minimal, explicit, and designed
//! for use as a low-level primitive within the Nebula ecosystem.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::computations::all_rounds;
use super::{BLOCK_LEN, DIGEST_LEN, H512_INIT};
use crate::error::Error;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
///
/// # Notes
/// - The message schedule is partially expanded here and fully processed
///   by `all_rounds`.
/// - Input words are interpreted as big-endian, as required by SHA-512.
#[inline(always)]
pub(crate) fn compress(block: &[u8; BLOCK_LEN], state: &mut [u64; 8]) {
    // Message schedule (first 16 words)
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    #[cfg(not(feature = "speed"))]
    all_rounds(state, w);

    #[cfg(feature = "speed")]
    all_rounds(state, &mut w);
}

/// Streaming SHA-512 hasher.
///
/// Input may be fed in chunks of any size, including one byte at a time
/// or empty slices; the digest depends only on the concatenated bytes,
/// never on how they were split across `update` calls.
///
/// Finalization consumes the hasher, so a finished state can neither be
/// finalized twice nor fed further input. The internal state (chaining
/// words, residual block, length counter) is wiped when the value is
/// dropped, including the drop at the end of `finalize`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha512 {
    /// Chaining value carried between block compressions.
    state: [u64; 8],

    /// Residual bytes that do not yet form a complete block.
    buf: [u8; BLOCK_LEN],

    /// Number of valid bytes in `buf`. Always < 128 between calls.
    partial: usize,

    /// Total input length so far, in bits, as padding requires.
    length: u64,
}

impl Sha512 {
    /// Creates a hasher in its initial state.
    pub fn new() -> Self {
        Sha512 {
            state: H512_INIT,
            buf: [0; BLOCK_LEN],
            partial: 0,
            length: 0,
        }
    }

    /// Absorbs a chunk of input.
    ///
    /// Completed 128-byte blocks are compressed immediately; a trailing
    /// partial block is buffered until more input or finalization.
    pub fn update(&mut self, mut input: &[u8]) {
        self.length = self.length.wrapping_add((input.len() as u64) << 3);

        // Top up a previously buffered partial block first.
        if self.partial > 0 {
            let take = input.len().min(BLOCK_LEN - self.partial);
            self.buf[self.partial..self.partial + take].copy_from_slice(&input[..take]);
            self.partial += take;
            input = &input[take..];

            if self.partial < BLOCK_LEN {
                return;
            }

            compress(&self.buf, &mut self.state);
            self.partial = 0;
        }

        // Process full blocks straight from the input.
        let mut blocks = input.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(block.try_into().unwrap(), &mut self.state);
        }

        // Buffer whatever is left for a later call.
        let rem = blocks.remainder();
        self.buf[..rem.len()].copy_from_slice(rem);
        self.partial = rem.len();
    }

    /// Completes the hash and returns the full 512-bit digest.
    ///
    /// Consumes the hasher; the state is wiped on return.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        self.pad();
        self.output()
    }

    /// Completes the hash into a caller-sized buffer.
    ///
    /// `out` receives the first `out.len()` bytes of the digest,
    /// supporting truncated variants.
    ///
    /// # Errors
    /// [`Error::DigestTooWide`] if `out` is longer than the native
    /// 64-byte output.
    pub fn finalize_into(mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() > DIGEST_LEN {
            return Err(Error::DigestTooWide(out.len()));
        }

        self.pad();

        let mut digest = self.output();
        out.copy_from_slice(&digest[..out.len()]);
        digest.zeroize();

        Ok(())
    }

    /// Applies Merkle–Damgård padding and compresses the final block(s).
    fn pad(&mut self) {
        let bit_len = self.length as u128;

        // Append the single '1' bit.
        self.buf[self.partial] = 0x80;
        self.partial += 1;

        // If the 16-byte length field no longer fits, spill into an
        // additional all-zero block.
        if self.partial > BLOCK_LEN - 16 {
            self.buf[self.partial..].fill(0);
            compress(&self.buf, &mut self.state);

            self.buf = [0; BLOCK_LEN];
            self.partial = 0;
        }

        // Zero-pad, then encode the message length in bits as a
        // big-endian 128-bit integer in the last 16 bytes.
        self.buf[self.partial..BLOCK_LEN - 16].fill(0);
        self.buf[BLOCK_LEN - 16..].copy_from_slice(&bit_len.to_be_bytes());

        compress(&self.buf, &mut self.state);
    }

    /// Serializes the chaining state into big-endian bytes.
    fn output(&self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];

        for (chunk, word) in out.chunks_exact_mut(8).zip(&self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }
}

impl Default for Sha512 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-512 hash of the given input.
///
/// One-shot convenience over the streaming hasher.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The final SHA-512 hash as 64 bytes (`[u8; 64]`)
pub fn sha512(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = Sha512::new();
    ctx.update(input);
    ctx.finalize()
}
