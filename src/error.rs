//! The error type shared by every `rijndael` component.
//!
//! Unlike the ad hoc `Box<dyn Error>` returns common for single-purpose
//! helper functions, the engine's callers need to distinguish *why* a call
//! failed (a malformed key versus an out-of-range index are handled very
//! differently upstream), so every fallible operation in this crate returns
//! the same concrete [`RijndaelError`] enum.

use std::error::Error;
use std::fmt;

/// Everything that can go wrong while configuring or running the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RijndaelError {
    /// A constructor argument was out of range: a block or key size not in
    /// `{4, 6, 8}`, a word value or element that does not fit in its
    /// declared bit width, and similar constructor-time misuse.
    InvalidParameter(String),

    /// A key passed to key expansion did not contain exactly `Nk` words.
    InvalidKeyLength { expected: usize, actual: usize },

    /// A [`Word`](crate::rijndael::word::Word) was indexed outside
    /// `[-4, 4)`.
    InvalidIndex(i32),

    /// Attempted to compute the multiplicative inverse of the zero element,
    /// which has none.
    ZeroInverse,

    /// A [`Polynomial`](crate::rijndael::polynomial::Polynomial) operation
    /// was attempted across two values belonging to different fields.
    FieldMismatch,
}

impl fmt::Display for RijndaelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RijndaelError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            RijndaelError::InvalidKeyLength { expected, actual } => write!(
                f,
                "invalid key length: expected {expected} words, got {actual}"
            ),
            RijndaelError::InvalidIndex(index) => write!(f, "index {index} out of range"),
            RijndaelError::ZeroInverse => write!(f, "zero has no multiplicative inverse"),
            RijndaelError::FieldMismatch => {
                write!(f, "operands belong to different finite fields")
            }
        }
    }
}

impl Error for RijndaelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_kind() {
        assert!(RijndaelError::ZeroInverse.to_string().contains("inverse"));
        assert!(RijndaelError::InvalidIndex(9).to_string().contains('9'));
        assert!(RijndaelError::InvalidKeyLength { expected: 4, actual: 3 }
            .to_string()
            .contains('4'));
    }
}
