//! A generalized Rijndael block-cipher engine.
//!
//! This crate implements the Rijndael round transform parameterized over
//! block size and key size in words (`Nb`, `Nk` in `{4, 6, 8}`), covering
//! both the standard AES variants and the non-standardized 192/256-bit
//! block Rijndael variants, plus an experimental variant ("Giga") that
//! lifts the cipher's element algebra from GF(2^8) to GF(2^32), yielding
//! 512/768/1024-bit blocks.
//!
//! # Example
//!
//! ```
//! use rijndael_core::Aes128;
//!
//! let cipher = Aes128::new().unwrap();
//! let key = b"0123456789abcdef";
//! let plaintext = b"attack at dawn!!";
//! let ciphertext = cipher.encrypt(plaintext, key).unwrap();
//! let recovered = cipher.decrypt(&ciphertext, key).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! # Scope
//!
//! This crate implements the cipher core only: finite-field arithmetic,
//! S-box generation, the round transform, and a byte/block codec. Chaining
//! modes, padding schemes, and key derivation are out of scope and are left
//! to callers.

pub mod error;
pub mod rijndael;

pub use error::RijndaelError;
pub use rijndael::{Aes128, Aes192, Aes256, GigaCipher, Rijndael192, Rijndael256, RijndaelCipher};
