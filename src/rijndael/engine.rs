//! The Rijndael round engine: key expansion and the four elementary round
//! transforms (SubBytes, ShiftRows, MixColumns, AddRoundKey), generalized
//! over block size, key size, and element field.
//!
//! `RijndaelEngine<ITEM_BITS>` is monomorphized once per element width: `8`
//! for the standard cipher (AES and the non-standard 192/256-bit-block
//! Rijndael variants), `32` for the experimental Giga variant. The
//! `experimental` selection in the external API is therefore a choice of
//! *which* monomorphization to construct, wrapped at runtime by
//! [`RijndaelCipher`] so callers don't need to know the element width at
//! compile time.

use crate::error::RijndaelError;
use crate::rijndael::field::Field;
use crate::rijndael::matrix::{left_shift, right_shift};
use crate::rijndael::sbox::SBox;
use crate::rijndael::word::Word;

/// Forward MixColumns coefficients, most-significant first.
const MIX_FORWARD: [u128; 4] = [0x02, 0x03, 0x01, 0x01];
/// Inverse MixColumns coefficients, most-significant first.
const MIX_INVERSE: [u128; 4] = [0x0E, 0x0B, 0x0D, 0x09];

/// Block sizes and key sizes the engine accepts, expressed in words.
const AVAILABLE_SIZES: [usize; 3] = [4, 6, 8];

fn validate_size(name: &str, value: usize) -> Result<(), RijndaelError> {
    if AVAILABLE_SIZES.contains(&value) {
        Ok(())
    } else {
        Err(RijndaelError::InvalidParameter(format!(
            "{name} must be one of {AVAILABLE_SIZES:?}, got {value}"
        )))
    }
}

/// A generalized Rijndael engine over `Word<ITEM_BITS>`.
pub struct RijndaelEngine<const ITEM_BITS: u32> {
    nb: usize,
    nk: usize,
    rounds: usize,
    field: Field,
    sbox: SBox,
}

impl<const ITEM_BITS: u32> RijndaelEngine<ITEM_BITS> {
    fn build(nb: usize, nk: usize, field: Field, sbox: SBox) -> Result<Self, RijndaelError> {
        validate_size("block size (Nb)", nb)?;
        validate_size("key size (Nk)", nk)?;
        let rounds = nb.max(nk) + 6;
        Ok(RijndaelEngine { nb, nk, rounds, field, sbox })
    }

    /// Block size in words.
    pub fn nb(&self) -> usize {
        self.nb
    }

    /// Key size in words.
    pub fn nk(&self) -> usize {
        self.nk
    }

    /// Number of rounds, `max(Nb, Nk) + 6`.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The field this engine's elements belong to.
    pub fn field(&self) -> Field {
        self.field
    }

    fn power_of_x(&self, exponent: usize) -> u128 {
        let mut result: u128 = 1;
        for _ in 0..exponent {
            result = self.field.multiply(result, 2);
        }
        result
    }

    /// The `index`-th round constant (0-based): a word whose leading
    /// element is `x^index` in the engine's field and whose remaining
    /// elements are zero.
    pub fn round_constant(&self, index: usize) -> Word<ITEM_BITS> {
        Word::from_items(&[self.power_of_x(index)]).expect("x^index fits in one element")
    }

    fn sub_word(&self, word: Word<ITEM_BITS>) -> Word<ITEM_BITS> {
        let items = word.items();
        let substituted: Vec<u128> = items.iter().map(|&x| self.sbox.forward(x)).collect();
        Word::from_items(&substituted).expect("substitution preserves element width")
    }

    fn inv_sub_word(&self, word: Word<ITEM_BITS>) -> Word<ITEM_BITS> {
        let items = word.items();
        let substituted: Vec<u128> = items.iter().map(|&x| self.sbox.inverse(x)).collect();
        Word::from_items(&substituted).expect("substitution preserves element width")
    }

    /// Expands `key` (exactly `Nk` words) into the full key schedule of
    /// `Nb * (rounds + 1)` words.
    ///
    /// # Errors
    ///
    /// Returns [`RijndaelError::InvalidKeyLength`] if `key.len() != Nk`.
    pub fn expand_key(&self, key: &[Word<ITEM_BITS>]) -> Result<Vec<Word<ITEM_BITS>>, RijndaelError> {
        if key.len() != self.nk {
            return Err(RijndaelError::InvalidKeyLength {
                expected: self.nk,
                actual: key.len(),
            });
        }
        let total = self.nb * (self.rounds + 1);
        let mut w: Vec<Word<ITEM_BITS>> = Vec::with_capacity(total);
        w.extend_from_slice(key);
        for i in self.nk..total {
            let mut temp = w[i - 1];
            if i % self.nk == 0 {
                let rcon_index = i / self.nk - 1;
                temp = self.sub_word(temp.rotate_left(1)).xor(&self.round_constant(rcon_index));
            } else if self.nk > 6 && i % self.nk == 4 {
                temp = self.sub_word(temp);
            }
            w.push(w[i - self.nk].xor(&temp));
        }
        Ok(w)
    }

    fn shift_offsets(&self) -> [usize; 4] {
        if self.nb == 8 {
            [0, 1, 3, 4]
        } else {
            [0, 1, 2, 3]
        }
    }

    fn shift_rows_generic(&self, state: &[Word<ITEM_BITS>], forward: bool) -> Vec<Word<ITEM_BITS>> {
        let nb = state.len();
        let offsets = self.shift_offsets();
        let mut rows: Vec<Vec<u128>> = (0..4)
            .map(|r| state.iter().map(|w| w.get(r as i32).unwrap()).collect())
            .collect();
        for (r, row) in rows.iter_mut().enumerate() {
            *row = if forward {
                left_shift(row, offsets[r])
            } else {
                right_shift(row, offsets[r])
            };
        }
        (0..nb)
            .map(|c| {
                let items: Vec<u128> = (0..4).map(|r| rows[r][c]).collect();
                Word::from_items(&items).expect("shift preserves element width")
            })
            .collect()
    }

    /// ShiftRows: cyclically left-shifts row `r` of the state by the
    /// variant's offset for that row.
    pub fn shift_rows(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        self.shift_rows_generic(state, true)
    }

    /// The inverse of [`Self::shift_rows`].
    pub fn inv_shift_rows(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        self.shift_rows_generic(state, false)
    }

    fn mix_column(&self, column: &Word<ITEM_BITS>, coeffs: &[u128; 4]) -> Word<ITEM_BITS> {
        let mut items = [0u128; 4];
        for (i, slot) in items.iter_mut().enumerate() {
            let rotated = right_shift(coeffs, i);
            let mut acc: u128 = 0;
            for j in 0..4 {
                acc ^= self.field.multiply(rotated[j], column.get(j as i32).unwrap());
            }
            *slot = acc;
        }
        Word::from_items(&items).expect("mix column preserves element width")
    }

    /// MixColumns: each column word is replaced by the product of the
    /// forward coefficient polynomial with the column in the engine's
    /// field.
    pub fn mix_columns(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        state.iter().map(|c| self.mix_column(c, &MIX_FORWARD)).collect()
    }

    /// The inverse of [`Self::mix_columns`].
    pub fn inv_mix_columns(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        state.iter().map(|c| self.mix_column(c, &MIX_INVERSE)).collect()
    }

    /// SubBytes: the forward S-box applied element-wise.
    pub fn sub_elements(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        state.iter().map(|&w| self.sub_word(w)).collect()
    }

    /// InvSubBytes: the inverse S-box applied element-wise.
    pub fn inv_sub_elements(&self, state: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        state.iter().map(|&w| self.inv_sub_word(w)).collect()
    }

    /// AddRoundKey: XORs the state with a round key, column-wise.
    pub fn add_round_key(&self, state: &[Word<ITEM_BITS>], round_key: &[Word<ITEM_BITS>]) -> Vec<Word<ITEM_BITS>> {
        state.iter().zip(round_key.iter()).map(|(s, k)| s.xor(k)).collect()
    }

    fn forward_round(&self, state: Vec<Word<ITEM_BITS>>, round_key: &[Word<ITEM_BITS>], is_final: bool) -> Vec<Word<ITEM_BITS>> {
        let state = self.sub_elements(&state);
        let state = self.shift_rows(&state);
        let state = if is_final { state } else { self.mix_columns(&state) };
        self.add_round_key(&state, round_key)
    }

    fn inverse_round(&self, state: Vec<Word<ITEM_BITS>>, round_key: &[Word<ITEM_BITS>], is_final: bool) -> Vec<Word<ITEM_BITS>> {
        let state = self.inv_shift_rows(&state);
        let state = self.inv_sub_elements(&state);
        let state = self.add_round_key(&state, round_key);
        if is_final {
            state
        } else {
            self.inv_mix_columns(&state)
        }
    }

    /// Encrypts a single block of `Nb` words under `key` (`Nk` words).
    ///
    /// # Errors
    ///
    /// Returns [`RijndaelError::InvalidParameter`] if `block.len() != Nb`,
    /// or propagates [`RijndaelError::InvalidKeyLength`] from key
    /// expansion.
    pub fn encrypt_block(&self, block: &[Word<ITEM_BITS>], key: &[Word<ITEM_BITS>]) -> Result<Vec<Word<ITEM_BITS>>, RijndaelError> {
        if block.len() != self.nb {
            return Err(RijndaelError::InvalidParameter(format!(
                "block must contain {} words, got {}",
                self.nb,
                block.len()
            )));
        }
        let round_keys = self.expand_key(key)?;
        let rk = |round: usize| &round_keys[round * self.nb..(round + 1) * self.nb];

        let mut state = self.add_round_key(block, rk(0));
        for round in 1..self.rounds {
            state = self.forward_round(state, rk(round), false);
        }
        state = self.forward_round(state, rk(self.rounds), true);
        Ok(state)
    }

    /// Decrypts a single block of `Nb` words under `key` (`Nk` words).
    ///
    /// # Errors
    ///
    /// Returns [`RijndaelError::InvalidParameter`] if `block.len() != Nb`,
    /// or propagates [`RijndaelError::InvalidKeyLength`] from key
    /// expansion.
    pub fn decrypt_block(&self, block: &[Word<ITEM_BITS>], key: &[Word<ITEM_BITS>]) -> Result<Vec<Word<ITEM_BITS>>, RijndaelError> {
        if block.len() != self.nb {
            return Err(RijndaelError::InvalidParameter(format!(
                "block must contain {} words, got {}",
                self.nb,
                block.len()
            )));
        }
        let round_keys = self.expand_key(key)?;
        let rk = |round: usize| &round_keys[round * self.nb..(round + 1) * self.nb];

        let mut state = self.add_round_key(block, rk(self.rounds));
        for round in (1..self.rounds).rev() {
            state = self.inverse_round(state, rk(round), false);
        }
        state = self.inverse_round(state, rk(0), true);
        Ok(state)
    }

    /// Encrypts each block independently (ECB semantics), preserving order.
    pub fn encrypt_blocks(&self, blocks: &[Vec<Word<ITEM_BITS>>], key: &[Word<ITEM_BITS>]) -> Result<Vec<Vec<Word<ITEM_BITS>>>, RijndaelError> {
        blocks.iter().map(|b| self.encrypt_block(b, key)).collect()
    }

    /// Decrypts each block independently (ECB semantics), preserving order.
    pub fn decrypt_blocks(&self, blocks: &[Vec<Word<ITEM_BITS>>], key: &[Word<ITEM_BITS>]) -> Result<Vec<Vec<Word<ITEM_BITS>>>, RijndaelError> {
        blocks.iter().map(|b| self.decrypt_block(b, key)).collect()
    }
}

impl RijndaelEngine<8> {
    /// Builds a standard (GF(2^8)) engine for the given block/key sizes in
    /// words.
    pub fn new_standard(nb: usize, nk: usize) -> Result<Self, RijndaelError> {
        Self::build(nb, nk, Field::new(8)?, SBox::standard()?)
    }
}

impl RijndaelEngine<32> {
    /// Builds an experimental Giga (GF(2^32)) engine for the given
    /// block/key sizes in words.
    pub fn new_giga(nb: usize, nk: usize) -> Result<Self, RijndaelError> {
        Self::build(nb, nk, Field::new(32)?, SBox::giga()?)
    }
}

