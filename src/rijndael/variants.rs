//! Runtime dispatch over element width, and the fixed-size cipher presets
//! built on top of it.
//!
//! [`RijndaelCipher`] is the general byte-in/byte-out facade: construct it
//! with a block size, a key size, and whether to use the experimental
//! GF(2^32) element field, and it picks the matching
//! [`RijndaelEngine`](crate::rijndael::engine::RijndaelEngine)
//! monomorphization at construction time. The fixed presets below
//! (`Aes128`, `Rijndael256`, `GigaCipher`, ...) are thin wrappers that pin
//! one or more of those three parameters.

use crate::error::RijndaelError;
use crate::rijndael::codec::{blocks_to_bytes, bytes_to_blocks, bytes_to_key};
use crate::rijndael::engine::RijndaelEngine;

/// A Rijndael cipher over either the standard GF(2^8) element field or the
/// experimental GF(2^32) Giga field, selected at construction.
pub enum RijndaelCipher {
    Standard(RijndaelEngine<8>),
    Giga(RijndaelEngine<32>),
}

impl RijndaelCipher {
    /// Builds a cipher for the given block size `nb` and key size `nk`, in
    /// words, over the standard field (`experimental = false`) or the Giga
    /// field (`experimental = true`).
    pub fn new(nb: usize, nk: usize, experimental: bool) -> Result<Self, RijndaelError> {
        if experimental {
            Ok(RijndaelCipher::Giga(RijndaelEngine::new_giga(nb, nk)?))
        } else {
            Ok(RijndaelCipher::Standard(RijndaelEngine::new_standard(nb, nk)?))
        }
    }

    /// Block size in words.
    pub fn nb(&self) -> usize {
        match self {
            RijndaelCipher::Standard(e) => e.nb(),
            RijndaelCipher::Giga(e) => e.nb(),
        }
    }

    /// Key size in words.
    pub fn nk(&self) -> usize {
        match self {
            RijndaelCipher::Standard(e) => e.nk(),
            RijndaelCipher::Giga(e) => e.nk(),
        }
    }

    /// Encrypts `data` under `key`, zero-padding both to the engine's
    /// element width internally; see [`crate::rijndael::codec`] for the
    /// exact byte<->word conversion, including the trailing-NUL-strip
    /// quirk applied to the returned bytes.
    pub fn encrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        match self {
            RijndaelCipher::Standard(engine) => {
                let blocks = bytes_to_blocks::<8>(data, engine.nb());
                let key_words = bytes_to_key::<8>(key, engine.nk());
                let cipher_blocks = engine.encrypt_blocks(&blocks, &key_words)?;
                Ok(blocks_to_bytes(&cipher_blocks))
            }
            RijndaelCipher::Giga(engine) => {
                let blocks = bytes_to_blocks::<32>(data, engine.nb());
                let key_words = bytes_to_key::<32>(key, engine.nk());
                let cipher_blocks = engine.encrypt_blocks(&blocks, &key_words)?;
                Ok(blocks_to_bytes(&cipher_blocks))
            }
        }
    }

    /// Decrypts `data` under `key`. See [`Self::encrypt`] for the codec
    /// caveats that also apply here.
    pub fn decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        match self {
            RijndaelCipher::Standard(engine) => {
                let blocks = bytes_to_blocks::<8>(data, engine.nb());
                let key_words = bytes_to_key::<8>(key, engine.nk());
                let plain_blocks = engine.decrypt_blocks(&blocks, &key_words)?;
                Ok(blocks_to_bytes(&plain_blocks))
            }
            RijndaelCipher::Giga(engine) => {
                let blocks = bytes_to_blocks::<32>(data, engine.nb());
                let key_words = bytes_to_key::<32>(key, engine.nk());
                let plain_blocks = engine.decrypt_blocks(&blocks, &key_words)?;
                Ok(blocks_to_bytes(&plain_blocks))
            }
        }
    }
}

macro_rules! fixed_standard_variant {
    ($name:ident, $nb:expr, $nk:expr, $doc:expr) => {
        #[doc = $doc]
        pub struct $name(RijndaelCipher);

        impl $name {
            /// Builds this preset.
            pub fn new() -> Result<Self, RijndaelError> {
                Ok(Self(RijndaelCipher::new($nb, $nk, false)?))
            }

            /// Encrypts `data` under `key`.
            pub fn encrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
                self.0.encrypt(data, key)
            }

            /// Decrypts `data` under `key`.
            pub fn decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
                self.0.decrypt(data, key)
            }
        }
    };
}

fixed_standard_variant!(Aes128, 4, 4, "Standard 128-bit-block, 128-bit-key AES.");
fixed_standard_variant!(Aes192, 4, 6, "Standard 128-bit-block, 192-bit-key AES.");
fixed_standard_variant!(Aes256, 4, 8, "Standard 128-bit-block, 256-bit-key AES.");

/// A non-standard 192-bit-block Rijndael variant; `nk` (in words) selects
/// the key size, which was never fixed to one value for this block size.
pub struct Rijndael192(RijndaelCipher);

impl Rijndael192 {
    /// Builds a 192-bit-block Rijndael cipher with a key of `nk` words.
    pub fn new(nk: usize) -> Result<Self, RijndaelError> {
        Ok(Self(RijndaelCipher::new(6, nk, false)?))
    }

    /// Encrypts `data` under `key`.
    pub fn encrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.encrypt(data, key)
    }

    /// Decrypts `data` under `key`.
    pub fn decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.decrypt(data, key)
    }
}

/// A non-standard 256-bit-block Rijndael variant; `nk` (in words) selects
/// the key size.
pub struct Rijndael256(RijndaelCipher);

impl Rijndael256 {
    /// Builds a 256-bit-block Rijndael cipher with a key of `nk` words.
    pub fn new(nk: usize) -> Result<Self, RijndaelError> {
        Ok(Self(RijndaelCipher::new(8, nk, false)?))
    }

    /// Encrypts `data` under `key`.
    pub fn encrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.encrypt(data, key)
    }

    /// Decrypts `data` under `key`.
    pub fn decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.decrypt(data, key)
    }
}

/// The experimental GF(2^32) variant. `nb`/`nk` (in words of 32 bits each)
/// select one of the 512/768/1024-bit block sizes and a matching key size.
pub struct GigaCipher(RijndaelCipher);

impl GigaCipher {
    /// Builds a Giga cipher with block size `nb` and key size `nk`, both in
    /// 32-bit words.
    pub fn new(nb: usize, nk: usize) -> Result<Self, RijndaelError> {
        Ok(Self(RijndaelCipher::new(nb, nk, true)?))
    }

    /// Encrypts `data` under `key`.
    pub fn encrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.encrypt(data, key)
    }

    /// Decrypts `data` under `key`.
    pub fn decrypt(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, RijndaelError> {
        self.0.decrypt(data, key)
    }
}

