//! Web front end
//!
//! The mock DOM, keypad markup and driver are plain Rust and always built,
//! so the page's behaviour is tested natively. The wasm-bindgen bindings
//! are behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, DocumentView};
pub use dom::{
    DomElement, DomEvent, MockDom, CLEAR_HISTORY_ID, DISPLAY_ID, DISPLAY_UPDATE_CLASS,
    HISTORY_ITEM_CLASS, HISTORY_LIST_ID, PENDING_ID,
};
pub use driver::{DomView, WasmDriver};
pub use keypad::{button_kind, KeypadButtonDef, MockDomKeypadExt, WasmKeypad, KEYPAD_ID};
