//! Low-level support utilities.

use subtle::ConstantTimeEq;

/// Compares two byte slices in constant time.
///
/// An ordinary `==` on slices stops at the first differing byte, which
/// leaks the length of the matching prefix through timing. This runs in
/// time dependent only on the slice lengths. Slices of different lengths
/// compare unequal; length itself is not treated as secret.
pub(crate) fn ct_eq(lhs: &[u8], rhs: &[u8]) -> bool {
    lhs.ct_eq(rhs).into()
}
