//! Cryptographic hashing and randomness primitives for Nebula
//!
//! This crate provides the hashing and pseudorandom-number subsystem used
//! throughout the Nebula ecosystem: a streaming SHA-512 implementation, an
//! HMAC-SHA-512 keyed hash built on top of it, and a reseedable ChaCha20
//! based generator that turns a caller-supplied seed into an unbounded,
//! uniformly distributed random stream.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are explicit in their semantics, allocation-free in their cores, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions and keyed hashing: a streaming SHA-512
//!   with caller-selectable (truncated) digest lengths, and HMAC-SHA-512
//!   with constant-time tag verification. Both are usable standalone and
//!   serve as the keying backend of the `rng` module.
//!
//! - `rng`
//!   The ChaCha20 stream cipher core and the `Generator` built on it.
//!   A generator is seeded from arbitrary bytes (hashed down to key and
//!   nonce material), can be stirred with additional entropy at any time,
//!   and serves byte, integer, and bias-free bounded-integer requests.
//!   Consumed keystream is wiped as it is handed out, so a later capture
//!   of the generator's memory cannot reveal output it already produced.
//!
//! - `error`
//!   The crate error type. The API is shaped so that most misuse is
//!   impossible to express: finalizing a hash twice or drawing from an
//!   unseeded generator does not compile. What remains fallible at
//!   runtime (requesting a digest wider than the native output) returns
//!   a distinct error rather than degrading silently.
//!
//! Internal support modules (not part of the public API):
//!
//! - `os`
//!   Thin per-platform access to operating-system randomness, consumed
//!   only when seeding a generator from the environment.
//!
//! - `utils`
//!   Constant-time byte comparison.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Secret state is wiped when dropped, not left behind
//!
//! # Concurrency
//!
//! Every operation here is synchronous and CPU-bound; nothing blocks or
//! suspends. State-mutating methods take `&mut self`, so a single
//! `Generator` cannot be driven from two threads at once without a lock.
//! Callers that need concurrent randomness should either seed one
//! generator per worker or wrap a shared instance in a mutex held for the
//! whole call.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal hashing and randomness needs.

mod os;
mod utils;

pub mod error;
pub mod hash;
pub mod rng;

pub use error::Error;
