//! Error types for the crate.
//!
//! The failure surface is deliberately narrow. The hashing and generation
//! algorithms are closed-form and perform no I/O, so the only runtime
//! failures are programming errors that the type system cannot rule out.
//! Everything else that would be a misuse error in a looser API (drawing
//! from an unseeded generator, finalizing a hash twice) is made
//! unrepresentable instead: generators only exist seeded, and `finalize`
//! consumes the hasher.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digest or MAC was requested with a length exceeding the native
    /// 64-byte SHA-512 output. Truncation is supported; extension is not.
    #[error("requested digest length {0} exceeds the native 64-byte output")]
    DigestTooWide(usize),
}
