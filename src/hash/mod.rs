//! Hash algorithms exposed by the crate.
//!
//! SHA-512 with a streaming state machine and caller-selectable digest
//! length, and HMAC-SHA-512 built on top of it. Both are pure-Rust
//! implementations used standalone and as the seed-derivation backend of
//! the `rng` module.

pub mod hmac;
pub mod sha512;

/// Re-export of the streaming hasher and one-shot convenience function.
pub use sha512::core::{Sha512, sha512};

/// Re-export of the keyed hash and its one-shot convenience function.
pub use hmac::{HmacSha512, hmac_sha512};
