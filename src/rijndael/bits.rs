//! Bit-level primitives shared by the finite-field, affine-transform and
//! word modules.
//!
//! Every function here is a pure integer operation parameterized by an
//! explicit bit width, rather than hard-coded to a fixed machine word size.
//! This lets the same rotation/reversal logic serve both the 8-bit element
//! of the standard cipher and the 32-bit element of the experimental Giga
//! variant.

/// Cyclically rotates the low `size` bits of `value` left by `block_size *
/// shift` bits.
///
/// `block_size` is the width of one "item" inside the `size`-bit word (for
/// example, rotating a word of elements left by whole elements rather than
/// single bits); pass `block_size = 1` for a plain bitwise rotation via
/// [`left_rotate_bits`].
///
/// # Panics
///
/// Panics if `size == 0`. The shift amount is reduced modulo `size` so any
/// `shift` is accepted.
pub fn left_rotate(value: u128, size: u32, block_size: u32, shift: u32) -> u128 {
    assert!(size > 0, "left_rotate: size must be non-zero");
    let mask = mask_of(size);
    let total_shift = (block_size as u64 * shift as u64) % size as u64;
    let total_shift = total_shift as u32;
    if total_shift == 0 {
        return value & mask;
    }
    let v = value & mask;
    ((v << total_shift) | (v >> (size - total_shift))) & mask
}

/// Cyclically rotates the low `size` bits of `value` right by `block_size *
/// shift` bits. See [`left_rotate`].
pub fn right_rotate(value: u128, size: u32, block_size: u32, shift: u32) -> u128 {
    assert!(size > 0, "right_rotate: size must be non-zero");
    let mask = mask_of(size);
    let total_shift = (block_size as u64 * shift as u64) % size as u64;
    let total_shift = total_shift as u32;
    if total_shift == 0 {
        return value & mask;
    }
    let v = value & mask;
    ((v >> total_shift) | (v << (size - total_shift))) & mask
}

/// `left_rotate` specialized to single-bit shifts.
pub fn left_rotate_bits(value: u128, size: u32, shift: u32) -> u128 {
    left_rotate(value, size, 1, shift)
}

/// `right_rotate` specialized to single-bit shifts.
pub fn right_rotate_bits(value: u128, size: u32, shift: u32) -> u128 {
    right_rotate(value, size, 1, shift)
}

/// Returns whether bit `index` (LSB-indexed, 0-based) of `value` is set.
pub fn is_bit_set(value: u128, index: u32) -> bool {
    (value >> index) & 1 == 1
}

/// Returns the parity (XOR-fold) of the set bits of `value`: `true` if an
/// odd number of bits are set.
pub fn xor_bits(value: u128) -> bool {
    value.count_ones() % 2 == 1
}

/// Reverses the low `size` bits of `value`, leaving higher bits as zero.
///
/// `reverse_bits(reverse_bits(v, size), size) == v` for every `v < 2^size`.
pub fn reverse_bits(value: u128, size: u32) -> u128 {
    let v = value & mask_of(size);
    let mut result: u128 = 0;
    for i in 0..size {
        result |= ((v >> i) & 1) << (size - 1 - i);
    }
    result
}

fn mask_of(size: u32) -> u128 {
    if size >= 128 {
        u128::MAX
    } else {
        (1u128 << size) - 1
    }
}
