//! ChaCha20 stream cipher core
//!
//! This module provides a low-level implementation of the ChaCha20 block
//! function in its original 64-bit-nonce form, carrying its keying
//! material and stream position in an explicit state value.
//!
//! It is designed to be used as a cryptographic primitive inside the
//! Nebula ecosystem (most importantly as the expansion stage of
//! [`Generator`](super::Generator)), and therefore:
//! - avoids heap allocations
//! - runs in constant time
//! - exposes only minimal, explicit APIs
//!
//! **Compatibility note.** This is not the RFC 8439 (IETF) variant: the
//! nonce is 64 bits and the block counter 64 bits, and when the counter
//! overflows the carry continues into the low nonce word rather than
//! wrapping. That widening keeps a single keyed state usable beyond 2^70
//! bytes without ever revisiting a (key, nonce, counter) position, at
//! the cost of wire compatibility with the IETF construction. Protocols
//! that need RFC 8439 framing must not use this module.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Keystream block length in bytes.
pub(crate) const BLOCK_LEN: usize = 64;

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string:
/// `"expand 32-byte k"` encoded as little-endian `u32` words.
///
/// They are public, fixed, and non-secret, and define the ChaCha20
/// permutation domain.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one ChaCha20 quarter round.
///
/// A quarter round mixes four 32-bit words of the internal state using
/// addition modulo 2³², XOR, and fixed left rotations. This operation is
/// the fundamental source of diffusion and non-linearity in ChaCha20.
///
/// The function is branchless and runs in constant time.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (20 rounds).
///
/// The permutation consists of 10 iterations, each performing:
/// - 4 column quarter rounds
/// - 4 diagonal quarter rounds
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Stateful ChaCha20 keystream producer.
///
/// The 16-word state holds, in order: four fixed constant words, eight
/// key words, two counter words, and two nonce words. The counter
/// advances automatically with each produced block and must never
/// revisit a value for the same (key, nonce); the caller guarantees
/// (key, nonce) uniqueness, the type guarantees the rest.
///
/// State words are wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    state: [u32; 16],
}

impl ChaCha20 {
    /// Creates a keyed cipher positioned at the start of its stream.
    ///
    /// # Parameters
    /// - `key`: 256-bit secret key (32 bytes, little-endian words)
    /// - `nonce`: 64-bit nonce, unique per stream under the same key;
    ///   public and not required to be random
    pub fn new(key: &[u8; 32], nonce: &[u8; 8]) -> Self {
        let mut state = [0u32; 16];

        // Constants
        state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

        // Key (256-bit, as little-endian words)
        state[4..12]
            .iter_mut()
            .zip(key.chunks_exact(4))
            .for_each(|(s, k)| {
                *s = u32::from_le_bytes(k.try_into().unwrap());
            });

        // Words 12..14 are the block counter, starting at zero.

        // Nonce (64-bit, little-endian)
        state[14..16]
            .iter_mut()
            .zip(nonce.chunks_exact(4))
            .for_each(|(s, n)| {
                *s = u32::from_le_bytes(n.try_into().unwrap());
            });

        ChaCha20 { state }
    }

    /// Produces the next 64-byte keystream block and advances the counter.
    ///
    /// The block is computed by copying the state into working variables,
    /// applying the 20-round permutation, adding the original state back
    /// in (feed-forward), and serializing little-endian. This is the only
    /// place raw keystream bytes are computed.
    pub fn keystream_block(&mut self) -> [u8; BLOCK_LEN] {
        let mut working = self.state;

        rounds(&mut working);

        // Feed-forward: add the original state back in
        working.iter_mut().zip(&self.state).for_each(|(w, s)| {
            *w = w.wrapping_add(*s);
        });

        let mut out = [0u8; BLOCK_LEN];
        out.chunks_exact_mut(4)
            .zip(&working)
            .for_each(|(chunk, word)| {
                chunk.copy_from_slice(&word.to_le_bytes());
            });

        self.advance_counter();

        out
    }

    /// Advances the block counter by one.
    ///
    /// Carry propagates through both counter words and, on a second
    /// overflow, into the low nonce word (see the module docs on
    /// compatibility). The stream position therefore never repeats.
    fn advance_counter(&mut self) {
        self.state[12] = self.state[12].wrapping_add(1);

        if self.state[12] == 0 {
            self.state[13] = self.state[13].wrapping_add(1);

            if self.state[13] == 0 {
                self.state[14] = self.state[14].wrapping_add(1);
            }
        }
    }

    /// XORs input data with the keystream, advancing the stream.
    ///
    /// Encryption and decryption are the same operation. Each call
    /// consumes whole keystream blocks: a trailing partial block's
    /// remaining keystream bytes are discarded, so the next call starts
    /// on a block boundary.
    ///
    /// # Parameters
    /// - `input`: Plaintext or ciphertext input
    /// - `output`: Output buffer (must be the same length as `input`)
    pub fn xor(&mut self, input: &[u8], output: &mut [u8]) {
        assert_eq!(input.len(), output.len());

        for (inp, out) in input.chunks(BLOCK_LEN).zip(output.chunks_mut(BLOCK_LEN)) {
            let keystream = self.keystream_block();

            for ((o, i), k) in out.iter_mut().zip(inp).zip(&keystream) {
                *o = *i ^ *k;
            }
        }
    }

    /// XORs fresh key and nonce material into the existing state.
    ///
    /// The counter words are left untouched. Because the combination is
    /// XOR against a stored value, non-uniform input can only add to the
    /// entropy already present, never subtract from it. This is the
    /// primitive behind [`Generator::stir`](super::Generator::stir).
    pub(crate) fn mix(&mut self, key: &[u8; 32], nonce: &[u8; 8]) {
        for (s, k) in self.state[4..12].iter_mut().zip(key.chunks_exact(4)) {
            *s ^= u32::from_le_bytes(k.try_into().unwrap());
        }

        for (s, n) in self.state[14..16].iter_mut().zip(nonce.chunks_exact(4)) {
            *s ^= u32::from_le_bytes(n.try_into().unwrap());
        }
    }

    /// Current 64-bit block counter, for state inspection in tests.
    #[cfg(test)]
    pub(crate) fn counter(&self) -> u64 {
        ((self.state[13] as u64) << 32) | self.state[12] as u64
    }
}
