//! The committed number shown in Display Mode.

use std::fmt;

use thiserror::Error;

use crate::buffer::DIGIT_COUNT;

/// Errors from building a [`DisplayNumber`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Input did not have exactly [`DIGIT_COUNT`] characters.
    #[error("expected {DIGIT_COUNT} digits, got {0} characters")]
    WrongLength(usize),

    /// Input contained a character that is not an ASCII digit.
    #[error("non-digit character {0:?}")]
    NonDigit(char),
}

/// Exactly [`DIGIT_COUNT`] ASCII digits, frozen once committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayNumber([u8; DIGIT_COUNT]);

impl DisplayNumber {
    /// The number as a string slice.
    pub fn as_str(&self) -> &str {
        // Constructor guarantees ASCII digits.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|b| b - b'0')
    }
}

impl TryFrom<&str> for DisplayNumber {
    type Error = NumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if let Some(c) = value.chars().find(|c| !c.is_ascii_digit()) {
            return Err(NumberError::NonDigit(c));
        }

        let bytes: [u8; DIGIT_COUNT] =
            value.as_bytes().try_into().map_err(|_| NumberError::WrongLength(value.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for DisplayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
