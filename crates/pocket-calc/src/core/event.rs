//! Discrete input events consumed by the accumulator

use serde::{Deserialize, Serialize};

use crate::core::memory::MemoryAction;
use crate::core::operations::Operator;

/// Function keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Function {
    /// C: reset operand and pending operation
    Clear,
    /// ⌫: drop the last character
    Backspace,
    /// %: divide the operand by 100
    Percentage,
    /// x²
    Square,
    /// √x
    SquareRoot,
    /// Decimal point (the page wires `.` as a function button)
    Decimal,
}

impl Function {
    /// All function keys
    pub const ALL: [Self; 6] = [
        Self::Clear,
        Self::Backspace,
        Self::Percentage,
        Self::Square,
        Self::SquareRoot,
        Self::Decimal,
    ];

    /// Button action name (`data-action` on the page)
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Backspace => "backspace",
            Self::Percentage => "percentage",
            Self::Square => "square",
            Self::SquareRoot => "sqrt",
            Self::Decimal => "decimal",
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "C",
            Self::Backspace => "⌫",
            Self::Percentage => "%",
            Self::Square => "x²",
            Self::SquareRoot => "√",
            Self::Decimal => ".",
        }
    }

    /// Parses a button action name
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.action() == action)
    }
}

/// One input event from a button or key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Function key
    Function(Function),
    /// Memory key
    Memory(MemoryAction),
    /// =
    Equals,
    /// Clear the history list
    ClearHistory,
}

impl Event {
    /// Builds a digit event, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Resolves a button by its css class family and `data-action`/`data-value`
    ///
    /// `kind` is one of `number`, `operator`, `function`, `memory`, `equals`.
    #[must_use]
    pub fn from_button(kind: &str, value: &str) -> Option<Self> {
        match kind {
            "number" => {
                let mut chars = value.chars();
                let d = chars.next()?.to_digit(10)?;
                if chars.next().is_some() {
                    return None;
                }
                Self::digit(d as u8)
            }
            "operator" => Operator::from_action(value).map(Self::Operator),
            "function" => Function::from_action(value).map(Self::Function),
            "memory" => MemoryAction::from_action(value).map(Self::Memory),
            "equals" => Some(Self::Equals),
            _ => None,
        }
    }

    /// Short label for logs and keypads
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Function(f) => f.label().to_string(),
            Self::Memory(m) => m.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::ClearHistory => "Clear history".to_string(),
        }
    }
}
