use crate::rijndael::matrix::*;

#[test]
fn affine_transform_produces_the_aes_sbox_constant_term() {
    // affine(0, AFFINE_ROW, 0x63, 8) == 0x63, since reverse_bits(0) == 0
    // and the linear part vanishes.
    assert_eq!(affine_transform(0, 0b1000_1111, 0x63, 8), 0x63);
}

#[test]
fn affine_transform_matches_known_sbox_entry() {
    // field_inverse(1) == 1 in GF(2^8); affine(1, ...) must equal 0x7C,
    // the second entry of the published AES S-box.
    assert_eq!(affine_transform(1, 0b1000_1111, 0x63, 8), 0x7C);
}

#[test]
fn left_shift_then_right_shift_is_identity() {
    let items = [0, 1, 2, 3, 4, 5];
    for shift in 0..items.len() {
        let shifted = left_shift(&items, shift);
        assert_eq!(right_shift(&shifted, shift), items);
    }
}
