//! Memory register (M+, M-, MR, MC)

use serde::{Deserialize, Serialize};

/// Memory key actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryAction {
    /// M+: add the current operand to memory
    Add,
    /// M-: subtract the current operand from memory
    Subtract,
    /// MR: recall memory into the display
    Recall,
    /// MC: reset memory to zero
    Clear,
}

impl MemoryAction {
    /// All memory actions in keypad order
    pub const ALL: [Self; 4] = [Self::Clear, Self::Recall, Self::Add, Self::Subtract];

    /// Button action name (`data-action` on the page)
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Add => "m-plus",
            Self::Subtract => "m-minus",
            Self::Recall => "mr",
            Self::Clear => "mc",
        }
    }

    /// Button label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "M+",
            Self::Subtract => "M-",
            Self::Recall => "MR",
            Self::Clear => "MC",
        }
    }

    /// Parses a button action name
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.action() == action)
    }
}

/// Single numeric register, independent of the operand being typed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryCell {
    value: f64,
}

impl MemoryCell {
    /// Creates an empty (zero) register
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Current value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// True when the register holds a non-zero value
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.value != 0.0
    }

    /// Adds `v`; a result that is not finite leaves the register unchanged
    pub fn add(&mut self, v: f64) -> bool {
        self.store(self.value + v)
    }

    /// Subtracts `v`; a result that is not finite leaves the register unchanged
    pub fn subtract(&mut self, v: f64) -> bool {
        self.store(self.value - v)
    }

    /// Resets to zero
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    fn store(&mut self, v: f64) -> bool {
        if v.is_finite() {
            self.value = v;
            true
        } else {
            false
        }
    }
}
