//! Storage-cost formulas for two sudoku board representations.
//!
//! A board with block dimension `k` has side length `size = k²` and `size`
//! distinct symbol values. The dense representation keeps a size×size matrix
//! with one symbol per cell; the bitfield representation keeps one size-wide
//! word per row and column constraint plus 2·k block words.

/// Number of bits needed to distinguish `x` values.
///
/// Undefined for x <= 0 (logarithm domain); callers keep x >= 1.
pub fn bits_needed(x: f64) -> f64 {
    x.log2().floor() + 1.0
}

/// Bits to store the board as a dense size×size matrix of symbols.
pub fn matrix_cost(k: u32) -> f64 {
    let size = (k * k) as f64;
    (size * size) * bits_needed(size)
}

/// Bits to store the board as per-constraint bitfields.
pub fn bitfield_cost(k: u32) -> f64 {
    let size = (k * k) as f64;
    (2.0 * size + 2.0 * k as f64) * size
}

/// Bits to hold both representations side by side.
pub fn combined_cost(k: u32) -> f64 {
    matrix_cost(k) + bitfield_cost(k)
}
