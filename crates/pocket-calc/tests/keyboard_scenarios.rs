//! End-to-end keyboard scenarios
//!
//! Each scenario is typed as a key sequence and checked on every front end:
//! the bare accumulator, the mock web page and (with `tui`) the terminal app.

#![allow(clippy::unwrap_used)]

use pocket_calc::prelude::*;

struct Scenario {
    keys: &'static str,
    display: &'static str,
    pending: &'static str,
    history: &'static [&'static str],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        keys: "7 + 5 Enter",
        display: "12",
        pending: "",
        history: &["7 + 5 = 12"],
    },
    Scenario {
        keys: "9 / 0 Enter",
        display: "Error",
        pending: "",
        history: &[],
    },
    Scenario {
        keys: "1 2 + 3 * 4 Escape",
        display: "0",
        pending: "",
        history: &[],
    },
    Scenario {
        keys: "3 m-plus 4 m-plus mr",
        display: "7",
        pending: "",
        history: &[],
    },
    Scenario {
        keys: "2 + 3 * 4 =",
        display: "20",
        pending: "",
        history: &["5 × 4 = 20"],
    },
    Scenario {
        keys: "1 0 0 - 4 0 +",
        display: "60",
        pending: "60 +",
        history: &[],
    },
    Scenario {
        keys: "1 2 . 3 . 4 Backspace",
        display: "12.3",
        pending: "",
        history: &[],
    },
    Scenario {
        keys: "5 0 %",
        display: "0.5",
        pending: "",
        history: &[],
    },
    Scenario {
        keys: "9 sqrt square",
        display: "9",
        pending: "",
        history: &["sqr(3) = 9", "√(9) = 3"],
    },
];

fn check<D: CalculatorDriver>(name: &str, make: impl Fn() -> D) {
    for scenario in SCENARIOS {
        let mut driver = make();
        driver.press_keys(scenario.keys).unwrap();
        assert_eq!(
            driver.display(),
            scenario.display,
            "{name}: display after {:?}",
            scenario.keys
        );
        assert_eq!(
            driver.pending(),
            scenario.pending,
            "{name}: pending after {:?}",
            scenario.keys
        );
        assert_eq!(
            driver.history(),
            scenario.history,
            "{name}: history after {:?}",
            scenario.keys
        );
    }
}

// ===== Accumulator =====

#[test]
fn test_scenarios_on_accumulator() {
    for scenario in SCENARIOS {
        let mut calc = Accumulator::new();
        for event in parse_sequence(scenario.keys).unwrap() {
            calc.handle(event);
        }
        let snapshot = Snapshot::of(&calc);
        assert_eq!(snapshot.display, scenario.display, "{:?}", scenario.keys);
        assert_eq!(snapshot.pending, scenario.pending, "{:?}", scenario.keys);
        assert_eq!(snapshot.history, scenario.history, "{:?}", scenario.keys);
    }
}

#[test]
fn test_clear_resets_waiting_flag() {
    let mut calc = Accumulator::new();
    for event in parse_sequence("7 + 5 =").unwrap() {
        calc.handle(event);
    }
    assert!(calc.is_waiting_for_new_input());
    calc.handle(Event::Function(Function::Clear));
    assert_eq!(calc.display(), "0");
    assert!(calc.pending().is_none());
    assert!(!calc.is_waiting_for_new_input());
}

// ===== Web page =====

#[test]
fn test_scenarios_on_web_page() {
    check("web", WasmDriver::new);
}

#[test]
fn test_web_page_history_list_matches_accumulator() {
    let mut driver = WasmDriver::new();
    for n in 1..=12u8 {
        let keys = format!("{} + 1 =", n % 10);
        driver.press_keys(&keys).unwrap();
    }
    let items = driver.history_items();
    assert_eq!(items.len(), 10);
    assert_eq!(items, driver.session().accumulator().history().lines());
    assert_eq!(items[0], "2 + 1 = 3");
}

#[test]
fn test_web_page_unmapped_keys_are_ignored() {
    let mut driver = WasmDriver::new();
    for key in ["a", "F1", "Shift", "^"] {
        assert!(!driver.key_down(key));
    }
    assert_eq!(driver.display_text(), "0");
}

// ===== Terminal =====

#[cfg(feature = "tui")]
mod terminal {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pocket_calc::tui::{CalculatorApp, InputHandler, KeyAction};

    #[test]
    fn test_scenarios_on_terminal() {
        check("tui", TuiDriver::new);
    }

    #[test]
    fn test_terminal_key_events() {
        let handler = InputHandler::new();
        let mut app = CalculatorApp::new();
        let keys = [
            KeyEvent::new(KeyCode::Char('6'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('*'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        ];
        for key in keys {
            app.handle_action(handler.handle_key(key));
        }
        assert_eq!(app.display(), "42");
        assert_eq!(app.history_lines(), vec!["6 × 7 = 42"]);

        app.handle_action(handler.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert_eq!(app.display(), "0");
        assert_eq!(app.history_lines().len(), 1);
    }

    #[test]
    fn test_terminal_quit() {
        let handler = InputHandler::new();
        let action = handler.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(action, KeyAction::Quit);
        let mut app = CalculatorApp::new();
        app.handle_action(action);
        assert!(app.should_quit());
    }

    #[test]
    fn test_terminal_and_web_agree() {
        let keys = "4 . 5 * 2 = square m-minus 1 0 0 / 8 = mr Backspace";
        let mut tui = TuiDriver::new();
        let mut web = WasmDriver::new();
        tui.press_keys(keys).unwrap();
        web.press_keys(keys).unwrap();
        assert_eq!(tui.display(), web.display());
        assert_eq!(tui.pending(), web.pending());
        assert_eq!(tui.history(), web.history());
        assert_eq!(tui.memory_indicator(), web.memory_indicator());
    }
}
