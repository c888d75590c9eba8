//! Keypad for the calculator widget
//!
//! Layout:
//! ```text
//! [ C ] [税込] [税抜] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```
//!
//! Every button carries the `data-number`, `data-operator` or `data-action`
//! attribute the page's event wiring reads.

use super::dom::{DomElement, MockDom};
use crate::core::{Command, Operation};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The command this button issues
    pub command: Command,
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
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        let id = match command {
            Command::Digit(d) => format!("btn-{}", d),
            Command::Decimal => "btn-decimal".to_string(),
            Command::Operator(op) => format!("btn-{}", op.token()),
            Command::Calculate => "btn-calculate".to_string(),
            Command::Clear => "btn-clear".to_string(),
            Command::TaxInclude => "btn-tax-include".to_string(),
            Command::TaxExclude => "btn-tax-exclude".to_string(),
        };
        Self {
            command,
            id,
            row,
            col,
        }
    }

    /// Creates the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let (kind, value) = self.command.dataset();
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.command.label())
            .with_class("keypad-btn")
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col))
            .with_attr(&format!("data-{kind}"), &value)
    }
}

/// Calculator keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions in row-major order
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C 税込 税抜 ÷
            KeypadButtonDef::new(Command::Clear, 0, 0),
            KeypadButtonDef::new(Command::TaxInclude, 0, 1),
            KeypadButtonDef::new(Command::TaxExclude, 0, 2),
            KeypadButtonDef::new(Command::Operator(Operation::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(Command::Digit(7), 1, 0),
            KeypadButtonDef::new(Command::Digit(8), 1, 1),
            KeypadButtonDef::new(Command::Digit(9), 1, 2),
            KeypadButtonDef::new(Command::Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButtonDef::new(Command::Digit(4), 2, 0),
            KeypadButtonDef::new(Command::Digit(5), 2, 1),
            KeypadButtonDef::new(Command::Digit(6), 2, 2),
            KeypadButtonDef::new(Command::Operator(Operation::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(Command::Digit(1), 3, 0),
            KeypadButtonDef::new(Command::Digit(2), 3, 1),
            KeypadButtonDef::new(Command::Digit(3), 3, 2),
            KeypadButtonDef::new(Command::Operator(Operation::Add), 3, 3),
            // Row 4: 0 . =
            KeypadButtonDef::new(Command::Digit(0), 4, 0),
            KeypadButtonDef::new(Command::Decimal, 4, 1),
            KeypadButtonDef::new(Command::Calculate, 4, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
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

    /// Gets a button by row and column; the last row has an empty cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that issues a command
    #[must_use]
    pub fn find_button_by_command(&self, command: Command) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.command == command)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
            |keypad, btn| keypad.with_child(btn.to_element()),
        )
    }

    /// Resolves a clicked element ID to its command
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Command> {
        self.find_button_by_id(element_id).map(|btn| btn.command)
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Adds keypad to an existing calculator DOM
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        let keypad_elem = keypad.create_keypad_element();
        self.root.children.push(keypad_elem.clone());
        self.register_element(keypad_elem);

        for btn_def in keypad.buttons() {
            self.register_element(btn_def.to_element());
        }
    }
}
