//! Byte buffer <-> block/key codec.
//!
//! The engine operates entirely on [`Word`]s; this module is the only place
//! that knows how to turn a caller's byte slice into blocks and keys of
//! words, and how to turn cipher output back into bytes.
//!
//! The byte-to-bytes round trip strips trailing NUL bytes from its output
//! (see [`blocks_to_bytes`]). This is a faithful, intentionally-preserved
//! quirk, not an oversight: it applies uniformly whether the blocks being
//! serialized came from an encrypt or a decrypt call, so any plaintext
//! ending in `0x00` will not round-trip exactly through the byte-level
//! facade. Callers that need an exact round trip for such inputs should pad
//! their input themselves to a known width before encrypting, and compare
//! at the block/word level instead of through this byte facade.

use crate::rijndael::word::Word;

fn item_bytes(item_bits: u32) -> usize {
    (item_bits / 8) as usize
}

/// Groups `bytes` into big-endian elements of `ITEM_BITS/8` bytes each,
/// zero-filling a short final chunk.
pub fn bytes_to_elements<const ITEM_BITS: u32>(bytes: &[u8]) -> Vec<u128> {
    let width = item_bytes(ITEM_BITS);
    bytes
        .chunks(width)
        .map(|chunk| {
            let mut buf = [0u8; 16];
            buf[16 - width..16 - width + chunk.len()].copy_from_slice(chunk);
            u128::from_be_bytes(buf)
        })
        .collect()
}

/// Groups `elements` into blocks of `4 * nb` elements, zero-filling a short
/// final block, then groups each block's elements into `nb` words.
pub fn elements_to_blocks<const ITEM_BITS: u32>(elements: &[u128], nb: usize) -> Vec<Vec<Word<ITEM_BITS>>> {
    let block_elements = 4 * nb;
    elements
        .chunks(block_elements)
        .map(|chunk| {
            let mut padded = chunk.to_vec();
            padded.resize(block_elements, 0);
            padded
                .chunks(4)
                .map(|w| Word::from_items(w).expect("element already validated by bytes_to_elements"))
                .collect()
        })
        .collect()
}

/// Converts a byte buffer directly into blocks of `nb` words, combining
/// [`bytes_to_elements`] and [`elements_to_blocks`].
pub fn bytes_to_blocks<const ITEM_BITS: u32>(bytes: &[u8], nb: usize) -> Vec<Vec<Word<ITEM_BITS>>> {
    elements_to_blocks(&bytes_to_elements::<ITEM_BITS>(bytes), nb)
}

/// Converts a byte buffer into a single key of `nk` words, truncating or
/// zero-padding the element sequence to exactly `4 * nk` elements.
pub fn bytes_to_key<const ITEM_BITS: u32>(bytes: &[u8], nk: usize) -> Vec<Word<ITEM_BITS>> {
    let mut elements = bytes_to_elements::<ITEM_BITS>(bytes);
    elements.resize(4 * nk, 0);
    elements
        .chunks(4)
        .map(|w| Word::from_items(w).expect("element already validated by bytes_to_elements"))
        .collect()
}

/// Concatenates the elements of `blocks` in order, serializes each
/// big-endian, and strips trailing NUL bytes from the result.
pub fn blocks_to_bytes<const ITEM_BITS: u32>(blocks: &[Vec<Word<ITEM_BITS>>]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for block in blocks {
        for word in block {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
    }
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes
}

