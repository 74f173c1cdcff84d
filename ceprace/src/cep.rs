//! Lookup-code validation.

use std::fmt;
use thiserror::Error;

/// Errors that reject a raw lookup code before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The raw input had zero length.
    #[error("cep can not be empty")]
    EmptyInput,
    /// The raw input was not exactly eight characters.
    #[error("cep must have eight digits")]
    WrongLength,
    /// The raw input contained a character that is not a decimal digit.
    #[error("cep must contain only digits")]
    NonDigit,
}

/// A validated CEP lookup code: exactly eight ASCII decimal digits.
///
/// Constructed only through [`Cep::parse`] and immutable afterwards, so a
/// `Cep` held anywhere downstream is known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

impl Cep {
    /// Validates a raw code.
    ///
    /// Checks run in order: emptiness, length, digit content. The first
    /// failure wins.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if raw.len() != 8 {
            return Err(ValidationError::WrongLength);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NonDigit);
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
