//! Browser bindings (wasm-bindgen)
//!
//! The page forwards button clicks and `keydown` events here; after each
//! event the calculator writes display, pending line and history straight
//! into the document.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element};

use super::dom::{
    CLEAR_HISTORY_ID, DISPLAY_ID, DISPLAY_UPDATE_CLASS, HISTORY_ITEM_CLASS, HISTORY_LIST_ID,
    PENDING_ID,
};
use super::keypad::WasmKeypad;
use crate::config::CalculatorConfig;
use crate::core::Event;
use crate::view::{CalculatorView, Session};

/// How long the display keeps the update class
const PULSE_MS: i32 = 300;

/// The calculator's elements in the live document
#[derive(Debug)]
pub struct DocumentView {
    document: Document,
    display: Element,
    pending: Element,
    history_list: Element,
}

impl DocumentView {
    /// Looks up the page elements; `None` if any is missing
    #[must_use]
    pub fn from_document(document: Document) -> Option<Self> {
        let display = document.get_element_by_id(DISPLAY_ID)?;
        let pending = document.get_element_by_id(PENDING_ID)?;
        let history_list = document.get_element_by_id(HISTORY_LIST_ID)?;
        Some(Self {
            document,
            display,
            pending,
            history_list,
        })
    }

    fn schedule_pulse_end(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let display = self.display.clone();
        let callback = Closure::once_into_js(move || {
            if let Err(err) = display.class_list().remove_1(DISPLAY_UPDATE_CLASS) {
                console::warn_1(&err);
            }
        });
        if let Err(err) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            PULSE_MS,
        ) {
            console::warn_1(&err);
        }
    }

    fn history_item(&self, text: &str) -> Result<Element, JsValue> {
        let item = self.document.create_element("div")?;
        item.set_class_name(HISTORY_ITEM_CLASS);
        item.set_text_content(Some(text));
        Ok(item)
    }
}

impl CalculatorView for DocumentView {
    fn show_display(&mut self, text: &str, pulse: bool) {
        self.display.set_text_content(Some(text));
        if pulse {
            match self.display.class_list().add_1(DISPLAY_UPDATE_CLASS) {
                Ok(()) => self.schedule_pulse_end(),
                Err(err) => console::warn_1(&err),
            }
        }
    }

    fn show_pending(&mut self, text: &str) {
        self.pending.set_text_content(Some(text));
    }

    fn show_history(&mut self, entries: &[String]) {
        self.history_list.set_inner_html("");
        for entry in entries {
            let appended = self
                .history_item(entry)
                .and_then(|item| self.history_list.append_child(&item));
            if let Err(err) = appended {
                console::warn_1(&err);
            }
        }
    }

    fn clear_history(&mut self) {
        self.history_list.set_inner_html("");
    }
}

/// Browser calculator - the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    session: Session<Option<DocumentView>>,
    keypad: WasmKeypad,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a detached calculator; call `attach` to bind it to the page
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_config(&CalculatorConfig::default())
    }

    /// Creates a calculator from a JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn from_json_config(json: &str) -> Result<BrowserCalculator, JsError> {
        let config = CalculatorConfig::from_json_str(json)?;
        Ok(Self::with_config(&config))
    }

    /// Binds to the current document and renders; false if elements are missing
    pub fn attach(&mut self) -> bool {
        let view = web_sys::window()
            .and_then(|window| window.document())
            .and_then(DocumentView::from_document);
        let attached = view.is_some();
        *self.session.view_mut() = view;
        self.session.render_all();
        attached
    }

    /// Handles a click on a button by element id; false if it is not a calculator button
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        let event = if button_id == CLEAR_HISTORY_ID {
            Some(Event::ClearHistory)
        } else {
            self.keypad.handle_click(button_id)
        };
        self.dispatch(event)
    }

    /// Handles a keyboard key; false if the key is not mapped
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.dispatch(WasmKeypad::key_to_event(key))
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.session.accumulator().display().to_string()
    }

    /// Current pending-operation text
    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> String {
        self.session.accumulator().pending_display()
    }

    /// Whether the memory register holds a value
    #[wasm_bindgen(getter, js_name = memorySet)]
    pub fn memory_set(&self) -> bool {
        self.session.accumulator().memory().is_set()
    }

    /// History as JSON, newest first
    pub fn history_json(&self) -> String {
        self.session
            .accumulator()
            .history()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of history entries
    pub fn history_count(&self) -> usize {
        self.session.accumulator().history().len()
    }

    /// History line at `index` (0 = newest)
    pub fn history_entry(&self, index: usize) -> Option<String> {
        self.session
            .accumulator()
            .history()
            .get(index)
            .map(|e| e.display())
    }
}

impl BrowserCalculator {
    /// Creates a detached calculator from a configuration
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            session: Session::with_config(config, None),
            keypad: WasmKeypad::new(),
        }
    }

    fn dispatch(&mut self, event: Option<Event>) -> bool {
        match event {
            Some(event) => {
                self.session.dispatch(event);
                true
            }
            None => false,
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"pocket-calc initialized".into());
}
