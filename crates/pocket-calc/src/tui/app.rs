//! Terminal application state

use crate::config::CalculatorConfig;
use crate::core::{Accumulator, Changes, Event};

use super::input::KeyAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    accumulator: Accumulator,
    /// Keypad with the last pressed button highlighted
    keypad: Keypad,
    /// Display was just updated; cleared by [`CalculatorApp::tick`]
    display_pulse: bool,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator app from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            accumulator: Accumulator::with_config(config),
            keypad: Keypad::new(),
            display_pulse: false,
            should_quit: false,
        }
    }

    /// The accumulator behind the app
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// The keypad, including its highlight
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds an event to the accumulator and highlights its button
    pub fn handle_event(&mut self, event: Event) -> Changes {
        self.keypad.highlight(event);
        let changes = self.accumulator.handle(event);
        self.display_pulse |= changes.display;
        changes
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Calculator(event) => {
                self.handle_event(event);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Ends the display pulse and the keypad highlight
    pub fn tick(&mut self) {
        self.display_pulse = false;
        self.keypad.release_all();
    }

    /// Whether the display should be drawn highlighted
    #[must_use]
    pub fn display_pulse(&self) -> bool {
        self.display_pulse
    }

    /// Main display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.accumulator.display()
    }

    /// Pending-operation line
    #[must_use]
    pub fn pending_display(&self) -> String {
        self.accumulator.pending_display()
    }

    /// History lines, newest first
    #[must_use]
    pub fn history_lines(&self) -> Vec<String> {
        self.accumulator.history().lines()
    }

    /// Whether the memory register holds a value
    #[must_use]
    pub fn memory_indicator(&self) -> bool {
        self.accumulator.memory().is_set()
    }

    /// One-line status: the last error, or `Ready`
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.accumulator.last_error() {
            Some(err) if self.accumulator.buffer().is_error() => format!("✗ {err}"),
            _ => "Ready".to_string(),
        }
    }
}
