//! HMAC-SHA-512 keyed hashing (RFC 2104 over SHA-512).
//!
//! A message authentication code built from two passes of the underlying
//! hash: an inner hash over `(key ⊕ ipad) ‖ message` and an outer hash
//! over `(key ⊕ opad) ‖ inner digest`. There is no algorithmic state
//! machine of its own beyond this composition.
//!
//! The key is normalized to the hash's 128-byte block: longer keys are
//! hashed down first, shorter keys zero-padded. Key material and the
//! intermediate inner digest are wiped as soon as they are no longer
//! needed, and again when the value is dropped.

use core::mem;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::sha512::core::{Sha512, sha512};
use super::sha512::{BLOCK_LEN, DIGEST_LEN};
use crate::error::Error;
use crate::utils::ct_eq;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC-SHA-512 computation.
///
/// Create one instance per message. Finalization consumes the value, so
/// a finished MAC state cannot be reused or finalized twice.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha512 {
    /// Canonical block-sized key (hashed down or zero-padded).
    key: [u8; BLOCK_LEN],

    /// Inner hash, running over `(key ⊕ ipad) ‖ message`.
    inner: Sha512,
}

impl HmacSha512 {
    /// Starts a MAC computation with the given key.
    ///
    /// Any key length is accepted. Keys longer than the 128-byte block
    /// are replaced by their SHA-512 digest before padding, as the
    /// construction requires.
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];

        if key.len() <= BLOCK_LEN {
            block[..key.len()].copy_from_slice(key);
        } else {
            block[..DIGEST_LEN].copy_from_slice(&sha512(key));
        }

        let mut ipad = block;
        for b in ipad.iter_mut() {
            *b ^= IPAD;
        }

        let mut inner = Sha512::new();
        inner.update(&ipad);
        ipad.zeroize();

        HmacSha512 { key: block, inner }
    }

    /// Absorbs a chunk of the message.
    ///
    /// Forwards to the inner hash; chunking does not affect the result.
    pub fn update(&mut self, input: &[u8]) {
        self.inner.update(input);
    }

    /// Completes the MAC and returns the full 512-bit tag.
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let inner = mem::replace(&mut self.inner, Sha512::new());
        let mut inner_digest = inner.finalize();

        let mut opad = self.key;
        for b in opad.iter_mut() {
            *b ^= OPAD;
        }

        let mut outer = Sha512::new();
        outer.update(&opad);
        outer.update(&inner_digest);

        opad.zeroize();
        inner_digest.zeroize();

        outer.finalize()
    }

    /// Completes the MAC into a caller-sized buffer (truncated tag).
    ///
    /// # Errors
    /// [`Error::DigestTooWide`] if `out` is longer than the native
    /// 64-byte output.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() > DIGEST_LEN {
            return Err(Error::DigestTooWide(out.len()));
        }

        let mut mac = self.finalize();
        out.copy_from_slice(&mac[..out.len()]);
        mac.zeroize();

        Ok(())
    }

    /// Completes the MAC and compares it against an expected tag in
    /// constant time.
    ///
    /// Returns `false` for tags of any other length, including truncated
    /// ones; verification always compares the full 64-byte tag.
    pub fn verify(self, expected: &[u8]) -> bool {
        let mac = self.finalize();
        ct_eq(&mac, expected)
    }
}

/// Computes HMAC-SHA-512 of a message in one call.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; DIGEST_LEN] {
    let mut ctx = HmacSha512::new(key);
    ctx.update(message);
    ctx.finalize()
}
