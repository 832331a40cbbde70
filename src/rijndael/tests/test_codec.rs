use crate::rijndael::codec::*;
use crate::rijndael::word::Word;

#[test]
fn bytes_to_elements_pads_a_short_final_chunk() {
    let elements = bytes_to_elements::<8>(&[0x01, 0x02, 0x03]);
    assert_eq!(elements, vec![1, 2, 3]);

    let elements32 = bytes_to_elements::<32>(&[0xAA, 0xBB]);
    assert_eq!(elements32, vec![0xAABB_0000]);
}

#[test]
fn bytes_to_blocks_pads_the_final_block() {
    let bytes = [1u8, 2, 3, 4, 5];
    let blocks = bytes_to_blocks::<8>(&bytes, 4);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0][0].value(), 0x01020304);
    assert_eq!(blocks[0][1].value(), 0x05000000);
}

#[test]
fn bytes_to_key_truncates_and_pads() {
    let key = bytes_to_key::<8>(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 4);
    assert_eq!(key.len(), 4);
    assert_eq!(key[2].value(), 0x09000000);

    let short_key = bytes_to_key::<8>(&[1, 2], 4);
    assert_eq!(short_key[0].value(), 0x01020000);
    assert_eq!(short_key[3].value(), 0);
}

#[test]
fn blocks_to_bytes_strips_trailing_nul_bytes() {
    let blocks = vec![vec![
        Word::<8>::from_value(0x01020300).unwrap(),
        Word::<8>::from_value(0).unwrap(),
    ]];
    assert_eq!(blocks_to_bytes(&blocks), vec![0x01, 0x02, 0x03]);
}

#[test]
fn round_trip_preserves_non_zero_terminated_input() {
    let bytes = b"the quick brown fox jumped over";
    let blocks = bytes_to_blocks::<8>(bytes, 4);
    let back = blocks_to_bytes(&blocks);
    assert_eq!(back, bytes);
}
