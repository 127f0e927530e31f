//! Unified calculator driver
//!
//! Every front end exposes the same four observables: the display, the
//! pending-operation line, the history list and the memory indicator.
//! The `verify_*` functions are written once against [`CalculatorDriver`]
//! and run against the terminal app and the mock DOM page alike.

use crate::core::Event;
use crate::keymap::{key_to_event, parse_sequence, UnknownKey};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use pocket_calc::wasm::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// driver.press_keys("7 + 5 Enter").unwrap();
/// assert_eq!(driver.display(), "12");
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Feeds one input event
    fn press(&mut self, event: Event);

    /// Main display text
    fn display(&self) -> String;

    /// Pending-operation line (`""` when nothing is pending)
    fn pending(&self) -> String;

    /// History lines, newest first
    fn history(&self) -> Vec<String>;

    /// Whether the memory register holds a non-zero value
    fn memory_indicator(&self) -> bool;

    /// Presses a keyboard key; returns false for unmapped keys
    fn press_key(&mut self, key: &str) -> bool {
        match key_to_event(key) {
            Some(event) => {
                self.press(event);
                true
            }
            None => false,
        }
    }

    /// Presses a whitespace separated key sequence (see [`parse_sequence`])
    fn press_keys(&mut self, keys: &str) -> Result<(), UnknownKey> {
        for event in parse_sequence(keys)? {
            self.press(event);
        }
        Ok(())
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::config::CalculatorConfig;
    use crate::core::Event;
    use crate::tui::CalculatorApp;

    /// Drives the terminal app state without a terminal
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self {
                app: CalculatorApp::new(),
            }
        }

        /// Creates a TUI driver from a configuration
        #[must_use]
        pub fn with_config(config: &CalculatorConfig) -> Self {
            Self {
                app: CalculatorApp::with_config(config),
            }
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: Event) {
            self.app.handle_event(event);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending(&self) -> String {
            self.app.pending_display()
        }

        fn history(&self) -> Vec<String> {
            self.app.history_lines()
        }

        fn memory_indicator(&self) -> bool {
            self.app.memory_indicator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

fn type_keys<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    let result = driver.press_keys(keys);
    assert!(result.is_ok(), "bad key sequence {keys:?}: {result:?}");
}

fn reset<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
}

/// Verifies the four binary operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    type_keys(driver, "7 + 5 Enter");
    assert_eq!(driver.display(), "12");
    assert_eq!(driver.history()[0], "7 + 5 = 12");
    reset(driver);

    type_keys(driver, "10 - 4 =");
    assert_eq!(driver.display(), "6");
    reset(driver);

    type_keys(driver, "6 * 7 =");
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.history()[0], "6 × 7 = 42");
    reset(driver);

    type_keys(driver, "20 / 4 =");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.history()[0], "20 ÷ 4 = 5");
    reset(driver);
}

/// Verifies left-to-right chaining and the pending line
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    type_keys(driver, "2 + 3");
    assert_eq!(driver.pending(), "2 +");
    type_keys(driver, "*");
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.pending(), "5 ×");
    type_keys(driver, "4 =");
    assert_eq!(driver.display(), "20");
    assert_eq!(driver.pending(), "");
    reset(driver);
}

/// Verifies digit and decimal point entry
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    type_keys(driver, "007");
    assert_eq!(driver.display(), "7");
    reset(driver);

    type_keys(driver, ". 5");
    assert_eq!(driver.display(), "0.5");
    reset(driver);

    type_keys(driver, "1 . . 2");
    assert_eq!(driver.display(), "1.2");
    reset(driver);
}

/// Verifies that arithmetic errors show `Error` and input recovers
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    let before = driver.history();

    type_keys(driver, "9 / 0 =");
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.history(), before);

    type_keys(driver, "5");
    assert_eq!(driver.display(), "5");
    reset(driver);

    type_keys(driver, "0 - 4 = sqrt");
    assert_eq!(driver.display(), "Error");
    reset(driver);
}

/// Verifies percentage, square and square root
pub fn verify_functions<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    type_keys(driver, "5 %");
    assert_eq!(driver.display(), "0.05");
    reset(driver);

    type_keys(driver, "3 square");
    assert_eq!(driver.display(), "9");
    assert_eq!(driver.history()[0], "sqr(3) = 9");
    reset(driver);

    type_keys(driver, "16 sqrt");
    assert_eq!(driver.display(), "4");
    assert_eq!(driver.history()[0], "√(16) = 4");
    reset(driver);
}

/// Verifies backspace editing
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    type_keys(driver, "123 Backspace");
    assert_eq!(driver.display(), "12");
    type_keys(driver, "Backspace Backspace");
    assert_eq!(driver.display(), "0");
    reset(driver);
}

/// Verifies the memory register keys
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    type_keys(driver, "mc");
    assert!(!driver.memory_indicator());

    type_keys(driver, "3 m-plus 4 m-plus mr");
    assert_eq!(driver.display(), "7");
    assert!(driver.memory_indicator());

    type_keys(driver, "2 m-minus mr");
    assert_eq!(driver.display(), "5");

    type_keys(driver, "mc mr");
    assert_eq!(driver.display(), "0");
    assert!(!driver.memory_indicator());
    reset(driver);
}

/// Verifies the history bound and ordering
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);

    for i in 1..=11 {
        type_keys(driver, &format!("{i} + 0 ="));
        reset(driver);
    }

    let history = driver.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "11 + 0 = 11");
    assert_eq!(history[9], "2 + 0 = 2");

    type_keys(driver, "clear-history");
    assert!(driver.history().is_empty());
}

/// Verifies that clear resets entry state only
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    reset(driver);
    type_keys(driver, "4 square 8 +");
    let history = driver.history();

    type_keys(driver, "Delete");
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.pending(), "");
    assert_eq!(driver.history(), history);

    type_keys(driver, "2");
    assert_eq!(driver.display(), "2");
    reset(driver);
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_operator_chaining(driver);
    verify_decimal_entry(driver);
    verify_error_recovery(driver);
    verify_functions(driver);
    verify_backspace(driver);
    verify_memory(driver);
    verify_clear(driver);
    verify_history(driver);
}
