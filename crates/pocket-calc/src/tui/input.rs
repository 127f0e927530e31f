//! Keyboard input handling for the terminal
//!
//! Plain keys go through the shared keyboard map; the terminal adds letter
//! shortcuts for the buttons a browser keyboard has no key for.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::{Event, Function, MemoryAction};
use crate::keymap::key_to_event;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Calculator(Event),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Terminal-only shortcuts: key, event, help text
pub const SHORTCUTS: &[(char, Event, &str)] = &[
    ('s', Event::Function(Function::Square), "Square"),
    ('r', Event::Function(Function::SquareRoot), "Square root"),
    ('p', Event::Memory(MemoryAction::Add), "M+"),
    ('n', Event::Memory(MemoryAction::Subtract), "M-"),
    ('m', Event::Memory(MemoryAction::Recall), "MR"),
    ('x', Event::Memory(MemoryAction::Clear), "MC"),
];

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Calculator(Event::ClearHistory),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::char_event(c).map_or(KeyAction::None, KeyAction::Calculator),
            KeyCode::Enter => Self::named("Enter"),
            KeyCode::Esc => Self::named("Escape"),
            KeyCode::Delete => Self::named("Delete"),
            KeyCode::Backspace => Self::named("Backspace"),
            _ => KeyAction::None,
        }
    }

    fn named(key: &str) -> KeyAction {
        key_to_event(key).map_or(KeyAction::None, KeyAction::Calculator)
    }

    fn char_event(c: char) -> Option<Event> {
        let mut buf = [0u8; 4];
        key_to_event(c.encode_utf8(&mut buf)).or_else(|| {
            SHORTCUTS
                .iter()
                .find(|(key, _, _)| *key == c)
                .map(|(_, event, _)| *event)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (d, c) in ('0'..='9').enumerate() {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calculator(Event::Digit(d as u8))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operator::Add),
            ('-', Operator::Subtract),
            ('*', Operator::Multiply),
            ('/', Operator::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Calculator(Event::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_decimal_and_percent() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            KeyAction::Calculator(Event::Decimal)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            KeyAction::Calculator(Event::Function(Function::Percentage))
        );
    }

    #[test]
    fn test_handle_shortcuts() {
        let handler = InputHandler::new();
        for (c, event, _) in SHORTCUTS {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(*c))),
                KeyAction::Calculator(*event)
            );
        }
    }

    #[test]
    fn test_handle_unmapped_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('^'))),
            KeyAction::None
        );
    }

    // ===== Named key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Calculator(Event::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Calculator(Event::Equals)
        );
    }

    #[test]
    fn test_handle_clear_keys() {
        let handler = InputHandler::new();
        let clear = KeyAction::Calculator(Event::Function(Function::Clear));
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), clear);
        assert_eq!(handler.handle_key(key_event(KeyCode::Delete)), clear);
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Calculator(Event::Function(Function::Backspace))
        );
    }

    #[test]
    fn test_handle_other_named_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), KeyAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), KeyAction::None);
    }

    // ===== Quit and control tests =====

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_l_clears_history() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::Calculator(Event::ClearHistory)
        );
    }

    #[test]
    fn test_handle_ctrl_other() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }
}
