mod bits;
mod codec;
mod engine;
mod field;
mod matrix;
mod polynomial;
mod sbox;
mod variants;
mod word;

pub use codec::{blocks_to_bytes, bytes_to_blocks, bytes_to_elements, bytes_to_key, elements_to_blocks};
pub use engine::RijndaelEngine;
pub use field::Field;
pub use polynomial::Polynomial;
pub use sbox::SBox;
pub use variants::{Aes128, Aes192, Aes256, GigaCipher, Rijndael192, Rijndael256, RijndaelCipher};
pub use word::{GigaWord, StandardWord, Word};

#[cfg(test)]
mod tests;
