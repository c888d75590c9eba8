//! Mock DOM for headless widget testing
//!
//! Mirrors the markup the browser binding drives: a `.previous-operand` and a
//! `.current-operand` text surface plus the keypad buttons. Alerts are
//! recorded instead of blocking.

use std::collections::HashMap;

use crate::core::DisplaySurface;

/// Element ID of the current-operand surface
pub const CURRENT_OPERAND_ID: &str = "current-operand";

/// Element ID of the previous-operand surface
pub const PREVIOUS_OPERAND_ID: &str = "previous-operand";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
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
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
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

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
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
}

/// Mock DOM for testing the widget without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Messages passed to the alert channel, oldest first
    alerts: Vec<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Creates the calculator display structure (without keypad)
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let previous = DomElement::new("div")
            .with_id(PREVIOUS_OPERAND_ID)
            .with_class("previous-operand");

        let current = DomElement::new("div")
            .with_id(CURRENT_OPERAND_ID)
            .with_class("current-operand")
            .with_text("0");

        let output = DomElement::new("div")
            .with_id("output")
            .with_class("output")
            .with_child(previous.clone())
            .with_child(current.clone());

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-grid")
            .with_child(output.clone());

        dom.register_element(output);
        dom.register_element(previous);
        dom.register_element(current);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Finds registered elements carrying an attribute with the given value
    #[must_use]
    pub fn query_by_attr(&self, key: &str, value: &str) -> Vec<&DomElement> {
        let mut found: Vec<&DomElement> = self
            .elements
            .values()
            .filter(|e| e.get_attr(key) == Some(value))
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    /// Dispatches an event
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

    /// Adds a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Gets the alert messages shown so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl DisplaySurface for MockDom {
    fn set_current_operand(&mut self, text: &str) {
        self.set_element_text(CURRENT_OPERAND_ID, text);
    }

    fn set_previous_operand(&mut self, text: &str) {
        self.set_element_text(PREVIOUS_OPERAND_ID, text);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
