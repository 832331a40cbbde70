use crate::rijndael::bits::*;

#[test]
fn left_rotate_bits_shifts_within_declared_width() {
    // 0b1011 rotated left by one bit within a 4-bit word: the leading 1
    // wraps around to the low bit.
    assert_eq!(left_rotate_bits(0b1011, 4, 1), 0b0111);
}

#[test]
fn right_rotate_bits_shifts_within_declared_width() {
    assert_eq!(right_rotate_bits(0b1011, 4, 1), 0b1101);
}

#[test]
fn left_rotate_by_full_width_is_identity() {
    assert_eq!(left_rotate_bits(0b1011, 4, 4), 0b1011);
}

#[test]
fn left_rotate_and_right_rotate_are_inverses() {
    for shift in 0..8 {
        let rotated = left_rotate_bits(0xA5, 8, shift);
        assert_eq!(right_rotate_bits(rotated, 8, shift), 0xA5);
    }
}

#[test]
fn left_rotate_by_whole_items_matches_bit_rotation_by_item_width() {
    // Rotating a 32-bit word left by one 8-bit item is the same as
    // rotating the raw bits left by 8.
    assert_eq!(left_rotate(0x0001_0203, 32, 8, 1), left_rotate_bits(0x0001_0203, 32, 8));
}

#[test]
fn is_bit_set_reads_the_requested_bit() {
    assert!(is_bit_set(0b0010, 1));
    assert!(!is_bit_set(0b0010, 0));
    assert!(!is_bit_set(0b0010, 2));
}

#[test]
fn xor_bits_is_the_parity_of_set_bits() {
    assert!(!xor_bits(0b0000));
    assert!(xor_bits(0b0001));
    assert!(!xor_bits(0b0011));
    assert!(xor_bits(0b0111));
}

#[test]
fn reverse_bits_reverses_within_declared_width() {
    assert_eq!(reverse_bits(0b0000_0001, 8), 0b1000_0000);
    assert_eq!(reverse_bits(0b1100_0000, 8), 0b0000_0011);
}

#[test]
fn reverse_bits_is_its_own_inverse() {
    for v in 0u128..256 {
        assert_eq!(reverse_bits(reverse_bits(v, 8), 8), v, "v = {v:#x}");
    }
}
