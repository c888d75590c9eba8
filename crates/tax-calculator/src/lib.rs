//! Tax Calculator - browser calculator widget
//!
//! A small state machine behind a calculator keypad: operand entry with a
//! 12-digit limit, single binary operations chained left to right, and a
//! fixed 10% tax conversion. Rendering and alerts go through the
//! [`core::DisplaySurface`] trait so the same widget runs against a mock DOM
//! in tests and a real page with the `wasm` feature.
//!
//! # Example
//!
//! ```rust
//! use tax_calculator::prelude::*;
//!
//! let mut widget = CalculatorWidget::new(MockDom::calculator());
//! widget.handle(Command::Digit(3));
//! widget.handle(Command::Operator(Operation::Add));
//! widget.handle(Command::Digit(4));
//! widget.handle(Command::Operator(Operation::Multiply));
//! assert_eq!(widget.snapshot().previous, "7 ×");
//!
//! widget.handle(Command::Digit(2));
//! widget.handle(Command::Calculate);
//! assert_eq!(widget.snapshot().current, "14");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, CalcError, CalcResult, CalculatorConfig, CalculatorState, Command,
        DisplaySnapshot, DisplaySurface, Operation, MAX_DIGITS, TAX_RATE,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};

    pub use crate::wasm::{CalculatorWidget, DomElement, DomEvent, Keypad, MockDom, WasmDriver};
}
