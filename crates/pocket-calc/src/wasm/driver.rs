//! Mock DOM view and driver
//!
//! [`DomView`] renders the calculator into a [`MockDom`] exactly as the page
//! does; [`WasmDriver`] clicks buttons and presses keys on that page so the
//! unified specifications in [`crate::driver`] can run against it.

use tracing::debug;

use super::dom::{
    DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, DISPLAY_UPDATE_CLASS,
    HISTORY_ITEM_CLASS, HISTORY_LIST_ID, PENDING_ID,
};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::config::CalculatorConfig;
use crate::core::{Event, Function};
use crate::driver::CalculatorDriver;
use crate::view::{CalculatorView, Session};

/// Calculator view backed by a mock DOM
#[derive(Debug)]
pub struct DomView {
    dom: MockDom,
}

impl Default for DomView {
    fn default() -> Self {
        Self::new()
    }
}

impl DomView {
    /// Creates the page with its keypad
    #[must_use]
    pub fn new() -> Self {
        let mut dom = MockDom::calculator();
        dom.add_keypad(&WasmKeypad::new());
        Self { dom }
    }

    /// The underlying DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// The underlying DOM, mutably
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Ends the display pulse (the page does this on a timer)
    pub fn finish_pulse(&mut self) {
        self.dom.remove_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS);
    }
}

impl CalculatorView for DomView {
    fn show_display(&mut self, text: &str, pulse: bool) {
        self.dom.set_element_text(DISPLAY_ID, text);
        if pulse {
            self.dom.add_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS);
        }
    }

    fn show_pending(&mut self, text: &str) {
        self.dom.set_element_text(PENDING_ID, text);
    }

    fn show_history(&mut self, entries: &[String]) {
        self.dom.clear_children(HISTORY_LIST_ID);
        for entry in entries {
            let item = DomElement::new("div")
                .with_class(HISTORY_ITEM_CLASS)
                .with_text(entry);
            self.dom.append_child(HISTORY_LIST_ID, item);
        }
    }

    fn clear_history(&mut self) {
        self.dom.clear_children(HISTORY_LIST_ID);
    }
}

/// Drives the calculator page through clicks and key presses
#[derive(Debug)]
pub struct WasmDriver {
    session: Session<DomView>,
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a fresh page
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::new(DomView::new()),
            keypad: WasmKeypad::new(),
        }
    }

    /// Creates a driver from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            session: Session::with_config(config, DomView::new()),
            keypad: WasmKeypad::new(),
        }
    }

    /// The session (accumulator and view)
    #[must_use]
    pub fn session(&self) -> &Session<DomView> {
        &self.session
    }

    /// The page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.session.view().dom()
    }

    /// Clicks an element by id; returns false if nothing handled the click
    pub fn click(&mut self, element_id: &str) -> bool {
        self.session
            .view_mut()
            .dom_mut()
            .dispatch_event(DomEvent::click(element_id));

        let event = if element_id == CLEAR_HISTORY_ID {
            Some(Event::ClearHistory)
        } else {
            self.dom()
                .get_element(element_id)
                .and_then(WasmKeypad::event_for_element)
        };

        match event {
            Some(event) => {
                self.session.dispatch(event);
                true
            }
            None => {
                debug!(element_id, "click on element without a handler");
                false
            }
        }
    }

    /// Presses a key on the document; returns false for unmapped keys
    pub fn key_down(&mut self, key: &str) -> bool {
        self.session
            .view_mut()
            .dom_mut()
            .dispatch_event(DomEvent::key_down(key));

        match WasmKeypad::key_to_event(key) {
            Some(event) => {
                self.session.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Ends the display pulse
    pub fn finish_pulse(&mut self) {
        self.session.view_mut().finish_pulse();
    }

    /// Whether the display carries the update pulse class
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.dom().has_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS)
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom().get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Text of the pending-operation element
    #[must_use]
    pub fn pending_text(&self) -> &str {
        self.dom().get_element_text(PENDING_ID).unwrap_or_default()
    }

    /// Texts of the history list items
    #[must_use]
    pub fn history_items(&self) -> Vec<String> {
        self.dom().child_texts(HISTORY_LIST_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, event: Event) {
        let event = match event {
            Event::Function(Function::Decimal) => Event::Decimal,
            other => other,
        };
        let id = match event {
            Event::ClearHistory => Some(CLEAR_HISTORY_ID.to_string()),
            other => self
                .keypad
                .find_button_by_event(other)
                .map(|btn| btn.id.clone()),
        };
        match id {
            Some(id) => {
                self.click(&id);
            }
            None => self.session.dispatch(event),
        }
    }

    fn press_key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn display(&self) -> String {
        self.display_text().to_string()
    }

    fn pending(&self) -> String {
        self.pending_text().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.history_items()
    }

    fn memory_indicator(&self) -> bool {
        self.session.accumulator().memory().is_set()
    }
}
