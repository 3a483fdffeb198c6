//! ALU arithmetic operations.
//!
//! All results wrap modulo 256, the width of an LS-8 register.

/// Wrapping 8-bit addition.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// Wrapping 8-bit multiplication (low byte of the product).
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}
