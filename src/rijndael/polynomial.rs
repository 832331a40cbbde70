//! An ergonomic operator-overloaded wrapper around a [`Field`] element.
//!
//! `Polynomial` pairs a raw element with the field that gives it meaning,
//! so `+`, `-`, `*`, `/` and `%` read as ordinary arithmetic instead of
//! explicit `field.add(a, b)` calls. Each operator returns a `Result`:
//! operands from differing fields yield [`RijndaelError::FieldMismatch`]
//! rather than panicking, since a caller mixing two `Polynomial`s from
//! unrelated fields is a recoverable misuse, not a programming-logic bug
//! this crate can assume never happens. It adds no arithmetic of its own
//! beyond what [`Field`] already provides.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

use crate::error::RijndaelError;
use crate::rijndael::field::Field;

/// A GF(2) polynomial (equivalently, a field element) together with the
/// field it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Polynomial {
    value: u128,
    field: Field,
}

impl Polynomial {
    /// Wraps `value` as an element of `field`.
    pub fn new(value: u128, field: Field) -> Self {
        Polynomial { value, field }
    }

    /// The underlying integer value.
    pub fn value(&self) -> u128 {
        self.value
    }

    /// The field this polynomial belongs to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The multiplicative inverse of this polynomial in its field.
    pub fn inverse(&self) -> Result<Polynomial, RijndaelError> {
        Ok(Polynomial::new(self.field.inverse(self.value)?, self.field))
    }

    /// The highest set bit's index, for rendering and for comparing
    /// polynomial degree.
    fn degree(&self) -> i64 {
        if self.value == 0 {
            -1
        } else {
            127 - self.value.leading_zeros() as i64
        }
    }

    /// The indices of the set bits (degrees with a non-zero coefficient),
    /// highest first.
    fn degrees(&self) -> Vec<i64> {
        let mut degrees = Vec::new();
        let mut i = self.degree();
        while i >= 0 {
            if (self.value >> i) & 1 == 1 {
                degrees.push(i);
            }
            i -= 1;
        }
        degrees
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.value == other.value
    }
}
impl Eq for Polynomial {}

impl Add for Polynomial {
    type Output = Result<Polynomial, RijndaelError>;
    fn add(self, rhs: Polynomial) -> Self::Output {
        if self.field != rhs.field {
            return Err(RijndaelError::FieldMismatch);
        }
        Ok(Polynomial::new(self.field.add(self.value, rhs.value), self.field))
    }
}

impl Sub for Polynomial {
    type Output = Result<Polynomial, RijndaelError>;
    fn sub(self, rhs: Polynomial) -> Self::Output {
        if self.field != rhs.field {
            return Err(RijndaelError::FieldMismatch);
        }
        Ok(Polynomial::new(self.field.subtract(self.value, rhs.value), self.field))
    }
}

impl Mul for Polynomial {
    type Output = Result<Polynomial, RijndaelError>;
    fn mul(self, rhs: Polynomial) -> Self::Output {
        if self.field != rhs.field {
            return Err(RijndaelError::FieldMismatch);
        }
        Ok(Polynomial::new(self.field.multiply(self.value, rhs.value), self.field))
    }
}

impl Div for Polynomial {
    type Output = Result<Polynomial, RijndaelError>;
    fn div(self, rhs: Polynomial) -> Self::Output {
        if self.field != rhs.field {
            return Err(RijndaelError::FieldMismatch);
        }
        Ok(Polynomial::new(self.field.divide(self.value, rhs.value)?, self.field))
    }
}

impl Rem for Polynomial {
    type Output = Result<Polynomial, RijndaelError>;
    fn rem(self, rhs: Polynomial) -> Self::Output {
        if self.field != rhs.field {
            return Err(RijndaelError::FieldMismatch);
        }
        let (_, r) = self.field.divmod(self.value, rhs.value)?;
        Ok(Polynomial::new(r, self.field))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value == 0 {
            return write!(f, "0");
        }
        let degrees = self.degrees();
        let terms: Vec<String> = degrees
            .iter()
            .map(|&d| match d {
                0 => "1".to_string(),
                1 => "x".to_string(),
                d => format!("x^{d}"),
            })
            .collect();
        write!(f, "{}", terms.join("+"))
    }
}
