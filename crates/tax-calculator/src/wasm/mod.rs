//! WASM Frontend for the calculator widget
//!
//! The widget controller and keypad are target-independent; the mock DOM
//! drives them headlessly and the `wasm` feature binds them to a real page.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{BrowserCalculator, BrowserSurface};
pub use calculator::CalculatorWidget;
pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
pub use driver::WasmDriver;
pub use keypad::{Keypad, KeypadButtonDef, MockDomKeypadExt};
