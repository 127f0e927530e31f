//! Input accumulator: the calculator's state machine
//!
//! Consumes one [`Event`] at a time and keeps the operand being typed, an
//! optional pending operation, the memory register and the history log.
//! No operation fails; arithmetic errors turn the operand into
//! [`InputBuffer::Error`] and the next digit starts over.

use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::core::buffer::InputBuffer;
use crate::core::event::{Event, Function};
use crate::core::history::{History, HistoryEntry};
use crate::core::memory::{MemoryAction, MemoryCell};
use crate::core::operations::{Arithmetic, Operator};
use crate::core::{format_number, CalcError, CalcResult};

/// Left operand waiting for its right-hand side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    /// Left operand (NaN when it was carried over from an error)
    pub left: f64,
    /// Chosen operator
    pub operator: Operator,
}

impl PendingOperation {
    /// Text for the pending-operation line, e.g. `7 +`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", format_number(self.left), self.operator.symbol())
    }
}

/// Which outputs an event touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// The operand text changed (or was re-shown)
    pub display: bool,
    /// The pending-operation line changed
    pub pending: bool,
    /// The history list changed
    pub history: bool,
}

impl Changes {
    const NONE: Self = Self {
        display: false,
        pending: false,
        history: false,
    };

    const DISPLAY: Self = Self {
        display: true,
        pending: false,
        history: false,
    };

    /// True if nothing observable changed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.display && !self.pending && !self.history
    }
}

/// The calculator state machine
#[derive(Debug, Clone)]
pub struct Accumulator {
    buffer: InputBuffer,
    pending: Option<PendingOperation>,
    waiting_for_new_input: bool,
    memory: MemoryCell,
    history: History,
    arithmetic: Arithmetic,
    record_errors: bool,
    last_error: Option<CalcError>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an accumulator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates an accumulator from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            buffer: InputBuffer::zero(),
            pending: None,
            waiting_for_new_input: false,
            memory: MemoryCell::new(),
            history: History::with_capacity(config.history_capacity),
            arithmetic: Arithmetic::with_policy(config.invalid_operand),
            record_errors: config.record_errors,
            last_error: None,
        }
    }

    // ----- state accessors -----

    /// Text for the main display
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.as_str()
    }

    /// The operand being typed
    #[must_use]
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// The pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Text for the pending-operation line (empty when nothing is pending)
    #[must_use]
    pub fn pending_display(&self) -> String {
        self.pending
            .as_ref()
            .map(PendingOperation::display)
            .unwrap_or_default()
    }

    /// Whether the next digit starts a new operand
    #[must_use]
    pub fn is_waiting_for_new_input(&self) -> bool {
        self.waiting_for_new_input
    }

    /// The memory register
    #[must_use]
    pub fn memory(&self) -> &MemoryCell {
        &self.memory
    }

    /// The history log (newest first)
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The error behind the current `Error` display, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    // ----- event dispatch -----

    /// Applies one input event and reports which outputs changed
    pub fn handle(&mut self, event: Event) -> Changes {
        let changes = match event {
            Event::Digit(d) => {
                self.input_digit(d);
                Changes::DISPLAY
            }
            Event::Decimal | Event::Function(Function::Decimal) => {
                self.input_decimal();
                Changes::DISPLAY
            }
            Event::Operator(op) => {
                self.input_operator(op);
                Changes {
                    display: true,
                    pending: true,
                    history: false,
                }
            }
            Event::Equals => self.equals(),
            Event::Function(Function::Clear) => {
                self.clear();
                Changes {
                    display: true,
                    pending: true,
                    history: false,
                }
            }
            Event::Function(Function::Backspace) => {
                self.backspace();
                Changes::DISPLAY
            }
            Event::Function(Function::Percentage) => {
                self.percentage();
                Changes::DISPLAY
            }
            Event::Function(Function::Square) => Changes {
                history: self.square(),
                ..Changes::DISPLAY
            },
            Event::Function(Function::SquareRoot) => Changes {
                history: self.square_root(),
                ..Changes::DISPLAY
            },
            Event::Memory(action) => {
                self.memory_action(action);
                Changes::DISPLAY
            }
            Event::ClearHistory => {
                self.clear_history();
                Changes {
                    history: true,
                    ..Changes::NONE
                }
            }
        };

        debug!(
            ?event,
            display = %self.buffer,
            pending = %self.pending_display(),
            waiting = self.waiting_for_new_input,
            "event applied"
        );
        changes
    }

    // ----- operand entry -----

    /// Types a digit (values above 9 are clamped to 9)
    pub fn input_digit(&mut self, d: u8) {
        if self.waiting_for_new_input {
            self.buffer = InputBuffer::digit(d);
            self.waiting_for_new_input = false;
        } else {
            self.buffer.push_digit(d);
        }
    }

    /// Types a decimal point
    pub fn input_decimal(&mut self) {
        if self.waiting_for_new_input {
            self.buffer = InputBuffer::Number("0.".to_string());
            self.waiting_for_new_input = false;
        } else {
            self.buffer.push_decimal();
        }
    }

    /// Drops the last typed character
    pub fn backspace(&mut self) {
        self.buffer.backspace();
    }

    // ----- operators -----

    /// Chooses an operator, collapsing any pending operation first
    pub fn input_operator(&mut self, op: Operator) {
        let current = self.buffer.value();

        let left = match self.pending {
            None => current,
            Some(pending) => {
                match self.arithmetic.apply(pending.operator, pending.left, current) {
                    Ok(result) => {
                        self.buffer = InputBuffer::from_value(result);
                        result
                    }
                    Err(err) => {
                        self.fail(err);
                        f64::NAN
                    }
                }
            }
        };

        self.pending = Some(PendingOperation { left, operator: op });
        self.waiting_for_new_input = true;
    }

    /// Completes the pending operation; a no-op when nothing is pending
    pub fn equals(&mut self) -> Changes {
        let Some(pending) = self.pending.take() else {
            return Changes::NONE;
        };

        let current = self.buffer.value();
        let expression = format!(
            "{} {} {}",
            format_number(pending.left),
            pending.operator.symbol(),
            format_number(current)
        );

        let recorded = match self.arithmetic.apply(pending.operator, pending.left, current) {
            Ok(result) => {
                self.history.record(&expression, result);
                self.buffer = InputBuffer::from_value(result);
                true
            }
            Err(err) => {
                self.fail(err);
                self.record_failure(expression)
            }
        };

        self.waiting_for_new_input = true;
        Changes {
            display: true,
            pending: true,
            history: recorded,
        }
    }

    /// Resets operand and pending operation (memory and history stay)
    pub fn clear(&mut self) {
        self.buffer = InputBuffer::zero();
        self.pending = None;
        self.waiting_for_new_input = false;
        self.last_error = None;
    }

    // ----- functions -----

    /// Divides the operand by 100
    pub fn percentage(&mut self) {
        match Arithmetic::percentage(self.buffer.value()) {
            Ok(result) => self.buffer = InputBuffer::from_value(result),
            Err(err) => self.fail(err),
        }
    }

    /// Squares the operand; returns true if history changed
    pub fn square(&mut self) -> bool {
        let value = self.buffer.value();
        let expression = format!("sqr({})", format_number(value));
        let recorded = self.unary(expression, Arithmetic::square(value));
        self.waiting_for_new_input = true;
        recorded
    }

    /// Takes the square root of the operand; returns true if history changed
    pub fn square_root(&mut self) -> bool {
        let value = self.buffer.value();
        let expression = format!("√({})", format_number(value));
        let recorded = self.unary(expression, Arithmetic::square_root(value));
        self.waiting_for_new_input = true;
        recorded
    }

    fn unary(&mut self, expression: String, result: CalcResult<f64>) -> bool {
        match result {
            Ok(result) => {
                self.history.record(&expression, result);
                self.buffer = InputBuffer::from_value(result);
                true
            }
            Err(err) => {
                self.fail(err);
                self.record_failure(expression)
            }
        }
    }

    // ----- memory -----

    /// Applies a memory key
    pub fn memory_action(&mut self, action: MemoryAction) {
        match action {
            MemoryAction::Add => self.memory_add(),
            MemoryAction::Subtract => self.memory_subtract(),
            MemoryAction::Recall => self.memory_recall(),
            MemoryAction::Clear => self.memory_clear(),
        }
    }

    /// M+: the next digit starts a new operand
    pub fn memory_add(&mut self) {
        if let Some(value) = self.memory_operand() {
            if !self.memory.add(value) {
                warn!(value, "memory add overflowed, register unchanged");
            }
        }
        self.waiting_for_new_input = true;
    }

    /// M-: the next digit starts a new operand
    pub fn memory_subtract(&mut self) {
        if let Some(value) = self.memory_operand() {
            if !self.memory.subtract(value) {
                warn!(value, "memory subtract overflowed, register unchanged");
            }
        }
        self.waiting_for_new_input = true;
    }

    /// MR: shows the register and starts a new operand on the next digit
    pub fn memory_recall(&mut self) {
        self.buffer = InputBuffer::from_value(self.memory.value());
        self.waiting_for_new_input = true;
    }

    /// MC
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    fn memory_operand(&self) -> Option<f64> {
        if self.buffer.is_error() {
            debug!("memory key ignored while display shows an error");
            None
        } else {
            Some(self.buffer.value())
        }
    }

    // ----- history -----

    /// Empties the history log
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn record_failure(&mut self, expression: String) -> bool {
        if self.record_errors {
            self.history.push(HistoryEntry::failed(expression));
        }
        self.record_errors
    }

    fn fail(&mut self, err: CalcError) {
        warn!(error = %err, "arithmetic error");
        self.buffer = InputBuffer::Error;
        self.last_error = Some(err);
    }
}
