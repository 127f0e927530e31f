//! Binary arithmetic for the accumulator
//!
//! Type-safe operators: the set of operations is closed, so every caller
//! matches exhaustively.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four binary operators a calculation can have pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol shown on the display and in history
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Returns the button action name (`data-action` on the page)
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Parses a button action name
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.action() == action)
    }

    /// Maps a typed character to an operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What `apply` does when an operand is not a number
///
/// An operand becomes NaN when the error state is fed back into a
/// calculation (for example pressing `+` while the display shows `Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidOperand {
    /// Silently produce 0
    #[default]
    Zero,
    /// Produce an arithmetic error
    Error,
}

/// Arithmetic primitive used by the accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arithmetic {
    invalid_operand: InvalidOperand,
}

impl Arithmetic {
    /// Creates arithmetic with the default (zero fallback) policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates arithmetic with an explicit invalid operand policy
    #[must_use]
    pub const fn with_policy(invalid_operand: InvalidOperand) -> Self {
        Self { invalid_operand }
    }

    /// Returns the invalid operand policy
    #[must_use]
    pub const fn policy(&self) -> InvalidOperand {
        self.invalid_operand
    }

    /// Applies `op` to `a` and `b`
    pub fn apply(&self, op: Operator, a: f64, b: f64) -> CalcResult<f64> {
        if a.is_nan() || b.is_nan() {
            return match self.invalid_operand {
                InvalidOperand::Zero => Ok(0.0),
                InvalidOperand::Error => Err(CalcError::InvalidOperand),
            };
        }

        match op {
            Operator::Add => Self::add(a, b),
            Operator::Subtract => Self::subtract(a, b),
            Operator::Multiply => Self::multiply(a, b),
            Operator::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    /// Square: v * v
    pub fn square(v: f64) -> CalcResult<f64> {
        if v.is_nan() {
            return Err(CalcError::InvalidOperand);
        }
        Self::check_finite(v * v)
    }

    /// Square root, defined for v >= 0
    pub fn square_root(v: f64) -> CalcResult<f64> {
        if v.is_nan() {
            return Err(CalcError::InvalidOperand);
        }
        if v < 0.0 {
            return Err(CalcError::NegativeSquareRoot(v));
        }
        Self::check_finite(v.sqrt())
    }

    /// Percentage: v / 100
    pub fn percentage(v: f64) -> CalcResult<f64> {
        if v.is_nan() {
            return Err(CalcError::InvalidOperand);
        }
        Self::check_finite(v / 100.0)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidOperand)
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
