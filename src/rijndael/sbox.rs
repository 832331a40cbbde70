//! Forward and inverse S-boxes.
//!
//! A substitution box computes, for each field element `x`, `affine(x^-1)`
//! on encryption and the matching inverse on decryption. The standard
//! variant's domain is small enough (256 values) to precompute in full at
//! construction; the experimental Giga variant's domain (2^32 values) is
//! not, so its tables are computed on demand and memoized in a bounded LRU
//! cache guarded by a mutex.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::error::RijndaelError;
use crate::rijndael::field::Field;
use crate::rijndael::matrix::affine_transform;

/// Affine constants for the standard (GF(2^8)) S-box, matching the
/// published FIPS-197 table.
pub const STANDARD_AFFINE_ROW: u128 = 0b1000_1111;
pub const STANDARD_AFFINE_CONST: u128 = 0x63;
pub const STANDARD_INV_ROW: u128 = 0b0010_0101;
pub const STANDARD_INV_CONST: u128 = 0x05;

/// Affine constants for the experimental Giga (GF(2^32)) S-box.
pub const GIGA_AFFINE_ROW: u128 = 0xD101_6880;
pub const GIGA_AFFINE_CONST: u128 = 0xB4E9_69D2;
pub const GIGA_INV_ROW: u128 = 0xFC76_DEE1;
pub const GIGA_INV_CONST: u128 = 0xA38D_0057;

/// Number of entries retained by the Giga S-box's memoization caches.
/// Sized for the key-schedule and single-block workloads this engine is
/// built for, not for exhaustively walking the full 2^32 domain.
const GIGA_CACHE_CAPACITY: usize = 4096;

fn field_inverse_or_zero(field: &Field, x: u128) -> u128 {
    if x == 0 {
        0
    } else {
        field.inverse(x).expect("nonzero input must have an inverse")
    }
}

/// A forward/inverse substitution-box pair over a single field.
pub struct SBox {
    field: Field,
    size: u32,
    affine_row: u128,
    affine_const: u128,
    inv_row: u128,
    inv_const: u128,
    table: Option<Vec<u128>>,
    inv_table: Option<Vec<u128>>,
    cache: Option<Mutex<LruCache<u128, u128>>>,
    inv_cache: Option<Mutex<LruCache<u128, u128>>>,
}

impl SBox {
    /// Builds the standard GF(2^8) S-box pair, fully precomputed.
    pub fn standard() -> Result<Self, RijndaelError> {
        let field = Field::new(8)?;
        Self::new_precomputed(
            field,
            8,
            STANDARD_AFFINE_ROW,
            STANDARD_AFFINE_CONST,
            STANDARD_INV_ROW,
            STANDARD_INV_CONST,
        )
    }

    /// Builds the experimental GF(2^32) S-box pair, memoized on demand.
    pub fn giga() -> Result<Self, RijndaelError> {
        let field = Field::new(32)?;
        Ok(SBox {
            field,
            size: 32,
            affine_row: GIGA_AFFINE_ROW,
            affine_const: GIGA_AFFINE_CONST,
            inv_row: GIGA_INV_ROW,
            inv_const: GIGA_INV_CONST,
            table: None,
            inv_table: None,
            cache: Some(Mutex::new(LruCache::new(
                NonZeroUsize::new(GIGA_CACHE_CAPACITY).unwrap(),
            ))),
            inv_cache: Some(Mutex::new(LruCache::new(
                NonZeroUsize::new(GIGA_CACHE_CAPACITY).unwrap(),
            ))),
        })
    }

    fn new_precomputed(
        field: Field,
        size: u32,
        affine_row: u128,
        affine_const: u128,
        inv_row: u128,
        inv_const: u128,
    ) -> Result<Self, RijndaelError> {
        let order = field.order();
        let mut table = vec![0u128; order as usize];
        let mut inv_table = vec![0u128; order as usize];
        for x in 0..order {
            let inv = field_inverse_or_zero(&field, x);
            let y = affine_transform(inv, affine_row, affine_const, size);
            table[x as usize] = y;
            inv_table[y as usize] = x;
        }
        Ok(SBox {
            field,
            size,
            affine_row,
            affine_const,
            inv_row,
            inv_const,
            table: Some(table),
            inv_table: Some(inv_table),
            cache: None,
            inv_cache: None,
        })
    }

    /// The field this S-box's tables were derived from.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The forward substitution of `x`: `affine(field_inverse(x))`, with
    /// `field_inverse(0)` taken to be `0`.
    pub fn forward(&self, x: u128) -> u128 {
        if let Some(table) = &self.table {
            return table[x as usize];
        }
        let cache = self.cache.as_ref().expect("giga sbox has a cache");
        if let Some(&y) = cache.lock().unwrap().get(&x) {
            return y;
        }
        let inv = field_inverse_or_zero(&self.field, x);
        let y = affine_transform(inv, self.affine_row, self.affine_const, self.size);
        cache.lock().unwrap().put(x, y);
        y
    }

    /// The inverse substitution of `y`: `field_inverse(affine(y))`, with the
    /// `0 <-> forward(0)` edge case preserved.
    pub fn inverse(&self, y: u128) -> u128 {
        if let Some(table) = &self.inv_table {
            return table[y as usize];
        }
        let cache = self.inv_cache.as_ref().expect("giga sbox has an inverse cache");
        if let Some(&x) = cache.lock().unwrap().get(&y) {
            return x;
        }
        let affined = affine_transform(y, self.inv_row, self.inv_const, self.size);
        let x = field_inverse_or_zero(&self.field, affined);
        cache.lock().unwrap().put(y, x);
        x
    }
}

