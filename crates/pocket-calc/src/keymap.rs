//! Keyboard mapping
//!
//! Key names follow the browser's `KeyboardEvent.key` values so the same
//! table serves the web page, the terminal and the `keys` command.

use thiserror::Error;

use crate::core::{Event, Function, MemoryAction, Operator};

/// A token that names no key or button
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown key: {0:?}")]
pub struct UnknownKey(pub String);

/// Keypad grid shared by the terminal and web front ends
///
/// ```text
/// [MC] [MR] [M+] [M-] [ C]
/// [ 7] [ 8] [ 9] [ ÷] [ ⌫]
/// [ 4] [ 5] [ 6] [ ×] [ %]
/// [ 1] [ 2] [ 3] [ -] [x²]
/// [ 0] [ .] [ =] [ +] [ √]
/// ```
pub const KEYPAD_LAYOUT: [[Event; 5]; 5] = [
    [
        Event::Memory(MemoryAction::Clear),
        Event::Memory(MemoryAction::Recall),
        Event::Memory(MemoryAction::Add),
        Event::Memory(MemoryAction::Subtract),
        Event::Function(Function::Clear),
    ],
    [
        Event::Digit(7),
        Event::Digit(8),
        Event::Digit(9),
        Event::Operator(Operator::Divide),
        Event::Function(Function::Backspace),
    ],
    [
        Event::Digit(4),
        Event::Digit(5),
        Event::Digit(6),
        Event::Operator(Operator::Multiply),
        Event::Function(Function::Percentage),
    ],
    [
        Event::Digit(1),
        Event::Digit(2),
        Event::Digit(3),
        Event::Operator(Operator::Subtract),
        Event::Function(Function::Square),
    ],
    [
        Event::Digit(0),
        Event::Decimal,
        Event::Equals,
        Event::Operator(Operator::Add),
        Event::Function(Function::SquareRoot),
    ],
];

/// Maps a key press to an event; unmapped keys return `None`
#[must_use]
pub fn key_to_event(key: &str) -> Option<Event> {
    match key {
        "." => Some(Event::Decimal),
        "+" => Some(Event::Operator(Operator::Add)),
        "-" => Some(Event::Operator(Operator::Subtract)),
        "*" => Some(Event::Operator(Operator::Multiply)),
        "/" => Some(Event::Operator(Operator::Divide)),
        "Enter" | "=" => Some(Event::Equals),
        "Escape" | "Delete" => Some(Event::Function(Function::Clear)),
        "Backspace" => Some(Event::Function(Function::Backspace)),
        "%" => Some(Event::Function(Function::Percentage)),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            c.to_digit(10).and_then(|d| Event::digit(d as u8))
        }
    }
}

/// Resolves a key name or a button action name (`sqrt`, `m-plus`, ...)
#[must_use]
pub fn token_to_event(token: &str) -> Option<Event> {
    key_to_event(token)
        .or_else(|| Operator::from_action(token).map(Event::Operator))
        .or_else(|| Function::from_action(token).map(Event::Function))
        .or_else(|| MemoryAction::from_action(token).map(Event::Memory))
        .or_else(|| (token == "clear-history").then_some(Event::ClearHistory))
}

/// Parses a whitespace separated key sequence
///
/// A token that is not a known name is split into single-character keys,
/// so `12.5*2=` and `12.5 * 2 Enter` produce the same events.
pub fn parse_sequence(input: &str) -> Result<Vec<Event>, UnknownKey> {
    let mut events = Vec::new();
    for token in input.split_whitespace() {
        if let Some(event) = token_to_event(token) {
            events.push(event);
            continue;
        }
        for c in token.chars() {
            let key = c.to_string();
            let event = key_to_event(&key).ok_or_else(|| UnknownKey(token.to_string()))?;
            events.push(event);
        }
    }
    Ok(events)
}
