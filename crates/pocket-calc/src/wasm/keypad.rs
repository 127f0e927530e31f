//! Web keypad for the calculator page
//!
//! Buttons follow the page markup: class `btn` plus one of `number`,
//! `operator`, `function`, `memory` or `equals`, with the payload in
//! `data-value` (digits) or `data-action` (everything else). The grid is the
//! same one the terminal keypad draws.

use super::dom::{DomElement, MockDom};
use crate::core::{Event, Function};
use crate::keymap::{key_to_event, KEYPAD_LAYOUT};

/// Element id of the keypad container
pub const KEYPAD_ID: &str = "keypad";

/// CSS class family of a button: `number`, `operator`, `function`, `memory`, `equals`
#[must_use]
pub fn button_kind(event: Event) -> &'static str {
    match event {
        Event::Digit(_) => "number",
        Event::Operator(_) => "operator",
        Event::Decimal | Event::Function(_) | Event::ClearHistory => "function",
        Event::Memory(_) => "memory",
        Event::Equals => "equals",
    }
}

/// `data-value` for digits, `data-action` for the rest
fn button_payload(event: Event) -> Option<(&'static str, String)> {
    match event {
        Event::Digit(d) => Some(("data-value", d.to_string())),
        Event::Decimal => Some(("data-action", Function::Decimal.action().to_string())),
        Event::Operator(op) => Some(("data-action", op.action().to_string())),
        Event::Function(f) => Some(("data-action", f.action().to_string())),
        Event::Memory(m) => Some(("data-action", m.action().to_string())),
        Event::Equals | Event::ClearHistory => None,
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The event this button sends
    pub event: Event,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(event: Event, row: usize, col: usize) -> Self {
        let id = match button_payload(event) {
            Some((_, value)) => format!("btn-{value}"),
            None => "btn-equals".to_string(),
        };
        Self { event, id, row, col }
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.event.label())
            .with_class("btn")
            .with_class(button_kind(self.event));
        if let Some((attr, value)) = button_payload(self.event) {
            elem = elem.with_attr(attr, &value);
        }
        elem
    }
}

/// Web keypad layout
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, events)| {
                events
                    .iter()
                    .enumerate()
                    .map(move |(col, event)| KeypadButtonDef::new(*event, row, col))
            })
            .collect();

        Self {
            buttons,
            cols: KEYPAD_LAYOUT[0].len(),
            rows: KEYPAD_LAYOUT.len(),
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that sends an event
    #[must_use]
    pub fn find_button_by_event(&self, event: Event) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Creates the keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div").with_id(KEYPAD_ID).with_class("buttons");
        keypad.children = self.buttons.iter().map(KeypadButtonDef::to_element).collect();
        keypad
    }

    /// Resolves a button element the way the page's listeners do
    #[must_use]
    pub fn event_for_element(element: &DomElement) -> Option<Event> {
        if !element.has_class("btn") {
            return None;
        }
        let kind = ["number", "operator", "function", "memory", "equals"]
            .into_iter()
            .find(|kind| element.has_class(kind))?;
        let value = element
            .get_attr("data-value")
            .or_else(|| element.get_attr("data-action"))
            .unwrap_or_default();
        Event::from_button(kind, value)
    }

    /// Maps a button click to its event
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Event> {
        self.find_button_by_id(element_id).map(|btn| btn.event)
    }

    /// Maps a keyboard key to its event
    #[must_use]
    pub fn key_to_event(key: &str) -> Option<Event> {
        key_to_event(key)
    }
}

/// Extension trait for MockDom to add the keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and registers every button by id
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.register_element(keypad.create_keypad_element());
        for btn in keypad.buttons() {
            self.register_element(btn.to_element());
        }
    }
}
