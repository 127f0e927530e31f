//! Calculator core: the accumulator and the value types it is built from
//!
//! Nothing in here renders anything; front ends observe the accumulator
//! through its accessors and the [`Changes`] it reports per event.

pub mod accumulator;
pub mod buffer;
pub mod event;
pub mod history;
pub mod memory;
mod operations;

pub use accumulator::{Accumulator, Changes, PendingOperation};
pub use buffer::{InputBuffer, ERROR_TEXT};
pub use event::{Event, Function};
pub use history::{History, HistoryEntry};
pub use memory::{MemoryAction, MemoryCell};
pub use operations::{Arithmetic, InvalidOperand, Operator};

use thiserror::Error;

/// Result type for calculator arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic errors; each one puts the display into the `Error` state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Square root of a negative number
    #[error("Square root of negative number {0}")]
    NegativeSquareRoot(f64),
    /// An operand was the error state (strict policy)
    #[error("Invalid operand")]
    InvalidOperand,
    /// Result is not finite
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
}

/// Formats a value for the display, history and pending line
///
/// Shortest round-trip decimal; negative zero prints as `0` and values that
/// are not finite print as the error marker.
#[must_use]
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        ERROR_TEXT.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_negative_sqrt() {
        let err = CalcError::NegativeSquareRoot(-4.0);
        assert_eq!(err.to_string(), "Square root of negative number -4");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidOperand);
        assert_eq!(err.to_string(), "Invalid operand");
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "Error");
        assert_eq!(format_number(f64::INFINITY), "Error");
    }
}
