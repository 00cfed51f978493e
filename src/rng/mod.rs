//! Random number generation module
//!
//! This module provides cryptographically secure randomness facilities
//! for the Nebula ecosystem.
//!
//! It is built around a ChaCha20 keystream core and exposes a seedable,
//! stirrable generator suitable for security-critical use cases such as
//! key generation, nonces, and identifiers, as well as for reproducible
//! seeded streams in tests and simulations.

/// Design goals:
/// - Cryptographic security
/// - Deterministic expansion from a caller-supplied seed
/// - Backtracking resistance through immediate wiping of served output
/// - No heap allocation
/// - Minimal and explicit API surface
pub mod chacha20;

mod generator;

/// Reseedable cryptographically secure pseudorandom generator.
///
/// This type is the primary entry point for generating randomness within
/// the Nebula codebase; the `chacha20` module underneath it is exposed
/// for code that needs raw keystream or stream encryption directly.
pub use generator::Generator;
