//! The operand being typed
//!
//! Kept as text so that in-progress input such as `0.` or `12.50` survives
//! until the next operator. The error state is its own variant rather than a
//! magic string.

use serde::{Deserialize, Serialize};

use crate::core::format_number;

/// Text shown on the display while the buffer is in the error state
pub const ERROR_TEXT: &str = "Error";

/// Current operand: a partial decimal numeral or the error state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputBuffer {
    /// A syntactically valid (possibly partial) decimal numeral
    Number(String),
    /// Result of an arithmetic error
    Error,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::zero()
    }
}

impl InputBuffer {
    /// The reset state, `0`
    #[must_use]
    pub fn zero() -> Self {
        Self::Number("0".to_string())
    }

    /// A buffer holding a single digit
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self::Number(digit_char(d).to_string())
    }

    /// A buffer holding a formatted value
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(format_number(value))
        } else {
            Self::Error
        }
    }

    /// Returns true in the error state
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Display text for the buffer
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(text) => text,
            Self::Error => ERROR_TEXT,
        }
    }

    /// Parses the buffer; the error state parses as NaN
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Number(text) => parse_numeral(text),
            Self::Error => f64::NAN,
        }
    }

    /// Appends a digit, replacing a lone `0`
    ///
    /// A digit that would push the operand past the largest finite `f64`
    /// is dropped.
    pub fn push_digit(&mut self, d: u8) {
        match self {
            Self::Number(text) if text != "0" => {
                text.push(digit_char(d));
                if parse_numeral(text).is_infinite() {
                    text.pop();
                }
            }
            _ => *self = Self::digit(d),
        }
    }

    /// Appends a decimal point unless one is already present
    pub fn push_decimal(&mut self) {
        match self {
            Self::Number(text) => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            Self::Error => *self = Self::Number("0.".to_string()),
        }
    }

    /// Drops the last character, falling back to `0`
    pub fn backspace(&mut self) {
        match self {
            Self::Number(text) => {
                text.pop();
                if text.is_empty() || text == "-" {
                    *self = Self::zero();
                }
            }
            Self::Error => *self = Self::zero(),
        }
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d.min(9))
}

/// Parses a partial numeral; a trailing `.` is accepted (`"12."` is 12)
fn parse_numeral(text: &str) -> f64 {
    text.strip_suffix('.')
        .unwrap_or(text)
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}
