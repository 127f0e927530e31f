//! Property-based tests for the accumulator
//!
//! Random key sequences must never leave the display in a state the
//! keypad could not have produced.

use pocket_calc::core::{
    format_number, Accumulator, Event, Function, MemoryAction, Operator,
};
use pocket_calc::keymap::KEYPAD_LAYOUT;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop::sample::select(Operator::ALL.to_vec())
}

/// Generate operand entry keys only
fn entry_event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => digit_strategy().prop_map(Event::Digit),
        1 => Just(Event::Decimal),
        1 => Just(Event::Function(Function::Backspace)),
    ]
}

/// Generate any event a front end can send
fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        6 => digit_strategy().prop_map(Event::Digit),
        1 => Just(Event::Decimal),
        3 => operator_strategy().prop_map(Event::Operator),
        2 => Just(Event::Equals),
        2 => prop::sample::select(Function::ALL.to_vec()).prop_map(Event::Function),
        1 => prop::sample::select(MemoryAction::ALL.to_vec()).prop_map(Event::Memory),
        1 => Just(Event::ClearHistory),
    ]
}

fn run(events: &[Event]) -> Accumulator {
    let mut calc = Accumulator::new();
    for event in events {
        calc.handle(*event);
    }
    calc
}

// ===== Operand entry properties =====

proptest! {
    /// The operand never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point(events in prop::collection::vec(entry_event_strategy(), 0..40)) {
        let calc = run(&events);
        prop_assert!(calc.display().matches('.').count() <= 1, "display: {}", calc.display());
    }

    /// No leading zeros: a leading `0` is either alone or followed by `.`
    #[test]
    fn prop_no_leading_zero(events in prop::collection::vec(entry_event_strategy(), 0..40)) {
        let calc = run(&events);
        let display = calc.display();
        prop_assert!(!display.is_empty());
        if display.len() > 1 && display.starts_with('0') {
            prop_assert!(display.starts_with("0."), "display: {}", display);
        }
    }

    /// Typed digits appear verbatim on the display
    #[test]
    fn prop_digits_are_appended(digits in prop::collection::vec(1u8..=9u8, 1..12)) {
        let events: Vec<Event> = digits.iter().map(|d| Event::Digit(*d)).collect();
        let calc = run(&events);
        let expected: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(calc.display(), expected.as_str());
    }
}

// ===== Whole-keypad properties =====

proptest! {
    /// The display is always a number or the error text
    #[test]
    fn prop_display_is_number_or_error(events in prop::collection::vec(event_strategy(), 0..60)) {
        let calc = run(&events);
        let display = calc.display();
        prop_assert!(
            display == "Error" || display.parse::<f64>().is_ok(),
            "display: {}",
            display
        );
    }

    /// History never exceeds ten entries and every line reads `expr = result`
    #[test]
    fn prop_history_is_bounded(events in prop::collection::vec(event_strategy(), 0..120)) {
        let calc = run(&events);
        prop_assert!(calc.history().len() <= 10);
        for line in calc.history().lines() {
            prop_assert!(line.contains(" = "), "line: {}", line);
        }
    }

    /// Clear always returns to the initial state, history and memory aside
    #[test]
    fn prop_clear_resets(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut calc = run(&events);
        calc.handle(Event::Function(Function::Clear));
        prop_assert_eq!(calc.display(), "0");
        prop_assert!(calc.pending().is_none());
        prop_assert!(!calc.is_waiting_for_new_input());
    }

    /// Every keypad button is accepted in every state
    #[test]
    fn prop_keypad_buttons_never_panic(
        events in prop::collection::vec(event_strategy(), 0..30),
        row in 0usize..5,
        col in 0usize..5,
    ) {
        let mut calc = run(&events);
        calc.handle(KEYPAD_LAYOUT[row][col]);
        prop_assert!(!calc.display().is_empty());
    }
}

// ===== Arithmetic properties =====

proptest! {
    /// `a + b =` shows the sum and records it
    #[test]
    fn prop_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut calc = Accumulator::new();
        for event in type_number(a) {
            calc.handle(event);
        }
        calc.handle(Event::Operator(Operator::Add));
        for event in type_number(b) {
            calc.handle(event);
        }
        calc.handle(Event::Equals);

        let sum = format_number(f64::from(a) + f64::from(b));
        prop_assert_eq!(calc.display(), sum.as_str());
        prop_assert_eq!(calc.history().lines(), vec![format!("{a} + {b} = {sum}")]);
    }

    /// Dividing anything by zero shows the error and records nothing
    #[test]
    fn prop_division_by_zero(a in 0u32..1_000_000) {
        let mut calc = Accumulator::new();
        for event in type_number(a) {
            calc.handle(event);
        }
        calc.handle(Event::Operator(Operator::Divide));
        calc.handle(Event::Digit(0));
        calc.handle(Event::Equals);
        prop_assert_eq!(calc.display(), "Error");
        prop_assert!(calc.history().is_empty());
    }

    /// Square root of a non-negative operand matches `f64::sqrt`
    #[test]
    fn prop_square_root(n in 0u32..1_000_000) {
        let mut calc = Accumulator::new();
        for event in type_number(n) {
            calc.handle(event);
        }
        calc.handle(Event::Function(Function::SquareRoot));
        let root = format_number(f64::from(n).sqrt());
        prop_assert_eq!(calc.display(), root.as_str());
    }

    /// Square root of a negative operand is an error
    #[test]
    fn prop_negative_square_root(n in 1u32..1_000) {
        let mut calc = Accumulator::new();
        calc.handle(Event::Digit(0));
        calc.handle(Event::Operator(Operator::Subtract));
        for event in type_number(n) {
            calc.handle(event);
        }
        calc.handle(Event::Equals);
        calc.handle(Event::Function(Function::SquareRoot));
        prop_assert_eq!(calc.display(), "Error");
    }

    /// M+ twice then MR recalls the sum
    #[test]
    fn prop_memory_accumulates(a in 0u32..10_000, b in 0u32..10_000) {
        let mut calc = Accumulator::new();
        for event in type_number(a) {
            calc.handle(event);
        }
        calc.handle(Event::Memory(MemoryAction::Add));
        for event in type_number(b) {
            calc.handle(event);
        }
        calc.handle(Event::Memory(MemoryAction::Add));
        calc.handle(Event::Memory(MemoryAction::Recall));
        let sum = format_number(f64::from(a) + f64::from(b));
        prop_assert_eq!(calc.display(), sum.as_str());
    }
}

fn type_number(n: u32) -> Vec<Event> {
    n.to_string()
        .bytes()
        .map(|b| Event::Digit(b - b'0'))
        .collect()
}
