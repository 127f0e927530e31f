//! pocket-calc - a button and keyboard driven calculator
//!
//! The core is an input accumulator: digits build an operand, operators
//! collapse left to right, and unary functions and a memory register act on
//! the operand in place. A bounded history keeps the last ten results.
//!
//! Front ends observe the accumulator through [`view::CalculatorView`]:
//! a terminal app (`tui` feature), a browser binding (`wasm` feature) and a
//! mock DOM that is always built so the page can be tested natively.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Accumulator::new();
//! for event in parse_sequence("7 + 5 =").unwrap() {
//!     calc.handle(event);
//! }
//! assert_eq!(calc.display(), "12");
//! assert_eq!(calc.history().lines(), vec!["7 + 5 = 12"]);
//!
//! // Errors are shown, not returned
//! for event in parse_sequence("9 / 0 =").unwrap() {
//!     calc.handle(event);
//! }
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keymap;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Web front end - the mock DOM side is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError, ConfigResult};
    pub use crate::core::{
        format_number, Accumulator, CalcError, CalcResult, Changes, Event, Function, History,
        HistoryEntry, InputBuffer, InvalidOperand, MemoryAction, MemoryCell, Operator,
        PendingOperation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keymap::{key_to_event, parse_sequence, UnknownKey};
    pub use crate::view::{CalculatorView, Session, Snapshot};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, DomView, MockDom, WasmDriver};
}
