//! The GF(2) affine transformation used to build S-boxes, plus the small
//! list-rotation helpers used by ShiftRows.

use crate::rijndael::bits::{reverse_bits, right_rotate_bits, xor_bits};

/// Computes `affine(x, row, const, size)`: bit-reverses `x`, then for each
/// output bit `i` takes the parity of `x_reversed AND (row rotated right by
/// i)`, and XORs in bit `i` of `const`.
///
/// This is the GF(2)-linear (plus constant) map used by the S-box to turn a
/// field inverse into the published substitution values.
pub fn affine_transform(x: u128, row: u128, constant: u128, size: u32) -> u128 {
    let reversed = reverse_bits(x, size);
    let mut result: u128 = 0;
    for i in 0..size {
        let rotated_row = right_rotate_bits(row, size, i);
        let bit = xor_bits(rotated_row & reversed);
        if bit {
            result |= 1 << i;
        }
    }
    result ^ (constant & ((1u128 << size) - 1))
}

/// Rotates `items` left by `shift` positions (the element at index `shift`
/// becomes the new first element).
pub fn left_shift<T: Clone>(items: &[T], shift: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let shift = shift % items.len();
    let mut result = Vec::with_capacity(items.len());
    result.extend_from_slice(&items[shift..]);
    result.extend_from_slice(&items[..shift]);
    result
}

/// Rotates `items` right by `shift` positions. The inverse of [`left_shift`].
pub fn right_shift<T: Clone>(items: &[T], shift: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let shift = shift % items.len();
    left_shift(items, items.len() - shift)
}
