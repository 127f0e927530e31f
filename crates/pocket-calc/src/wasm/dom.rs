//! Mock DOM for the calculator page
//!
//! Models just enough of the page (elements by id, text, classes,
//! attributes and child lists) to drive and inspect the web front end
//! without a browser.

use std::collections::HashMap;

/// Element id of the main display
pub const DISPLAY_ID: &str = "display";
/// Element id of the pending-operation line
pub const PENDING_ID: &str = "history";
/// Element id of the history list
pub const HISTORY_LIST_ID: &str = "historyList";
/// Element id of the clear-history button
pub const CLEAR_HISTORY_ID: &str = "clearHistory";
/// Class set on the display while the update pulse is showing
pub const DISPLAY_UPDATE_CLASS: &str = "display-update";
/// Class of each history list item
pub const HISTORY_ITEM_CLASS: &str = "history-item";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class (no duplicates)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the page listens for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// `keydown` on the document
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the web calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page skeleton (buttons are added by the keypad)
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(DISPLAY_ID)
                .with_class("display")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(PENDING_ID)
                .with_class("history-display"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(HISTORY_LIST_ID)
                .with_class("history-list"),
        );
        dom.register_element(
            DomElement::new("button")
                .with_id(CLEAR_HISTORY_ID)
                .with_class("clear-history")
                .with_text("Clear History"),
        );

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records a dispatched event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds a class to an element by ID
    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.add_class(class);
        }
    }

    /// Removes a class from an element by ID
    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.remove_class(class);
        }
    }

    /// Checks a class on an element by ID
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Appends a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child);
        }
    }

    /// Removes all children of an element (`innerHTML = ''`)
    pub fn clear_children(&mut self, id: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }

    /// Text of each child of an element
    #[must_use]
    pub fn child_texts(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|e| e.children.iter().map(|c| c.text_content.clone()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("btn")
            .with_class("number")
            .with_attr("data-value", "7");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("btn"));
        assert!(elem.has_class("number"));
        assert_eq!(elem.get_attr("data-value"), Some("7"));
        assert_eq!(elem.get_attr("data-action"), None);
    }

    #[test]
    fn test_dom_element_class_no_duplicates() {
        let mut elem = DomElement::new("div").with_class("a");
        elem.add_class("a");
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("a");
        assert!(!elem.has_class("a"));
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("btn-1"),
            DomEvent::Click {
                element_id: "btn-1".to_string()
            }
        );
        assert_eq!(
            DomEvent::key_down("Enter"),
            DomEvent::KeyDown {
                key: "Enter".to_string()
            }
        );
    }

    // ===== MockDom tests =====

    #[test]
    fn test_calculator_page_elements() {
        let dom = MockDom::calculator();
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("0"));
        assert_eq!(dom.get_element_text(PENDING_ID), Some(""));
        assert!(dom.get_element(HISTORY_LIST_ID).is_some());
        assert!(dom.get_element(CLEAR_HISTORY_ID).is_some());
        assert_eq!(dom.element_count(), 4);
    }

    #[test]
    fn test_set_and_get_text() {
        let mut dom = MockDom::calculator();
        dom.set_element_text(DISPLAY_ID, "42");
        assert_eq!(dom.get_element_text(DISPLAY_ID), Some("42"));
        dom.set_element_text("missing", "x");
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_classes_by_id() {
        let mut dom = MockDom::calculator();
        dom.add_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS);
        assert!(dom.has_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS));
        dom.remove_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS);
        assert!(!dom.has_class(DISPLAY_ID, DISPLAY_UPDATE_CLASS));
        assert!(!dom.has_class("missing", DISPLAY_UPDATE_CLASS));
    }

    #[test]
    fn test_children() {
        let mut dom = MockDom::calculator();
        dom.append_child(HISTORY_LIST_ID, DomElement::new("div").with_text("1 + 1 = 2"));
        dom.append_child(HISTORY_LIST_ID, DomElement::new("div").with_text("2 + 2 = 4"));
        assert_eq!(dom.child_texts(HISTORY_LIST_ID), vec!["1 + 1 = 2", "2 + 2 = 4"]);
        dom.clear_children(HISTORY_LIST_ID);
        assert!(dom.child_texts(HISTORY_LIST_ID).is_empty());
        assert!(dom.child_texts("missing").is_empty());
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_down("+"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }
}
