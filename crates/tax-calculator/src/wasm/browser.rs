//! Browser WASM bindings for the calculator widget
//!
//! Binds the page's `.current-operand` and `.previous-operand` elements and
//! routes button tokens from JS event handlers into the widget.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element, Window};

use crate::core::{CalculatorConfig, CalculatorState, DisplaySurface};
use crate::wasm::calculator::CalculatorWidget;

/// Display surface backed by real DOM elements
#[derive(Debug)]
pub struct BrowserSurface {
    window: Window,
    current: Element,
    previous: Element,
}

impl BrowserSurface {
    /// Looks up both display elements in the window's document
    pub fn from_window(window: Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        let current = select(&document, ".current-operand")?;
        let previous = select(&document, ".previous-operand")?;
        Ok(Self {
            window,
            current,
            previous,
        })
    }
}

fn select(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("element {selector} not found")))
}

impl DisplaySurface for BrowserSurface {
    fn set_current_operand(&mut self, text: &str) {
        self.current.set_text_content(Some(text));
    }

    fn set_previous_operand(&mut self, text: &str) {
        self.previous.set_text_content(Some(text));
    }

    fn alert(&mut self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            warn!(?err, "alert failed");
        }
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    widget: CalculatorWidget<BrowserSurface>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Binds a calculator with the default tax rate and digit limit
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BrowserCalculator, JsValue> {
        Self::bind(CalculatorConfig::default())
    }

    /// Binds a calculator configured from JSON (`{"tax_rate": 0.08}`)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::bind(config)
    }

    /// Handles a button's data attribute, e.g. `dispatch("operator", "add")`.
    ///
    /// Returns the error message when the press was ignored or rejected.
    pub fn dispatch(&mut self, kind: &str, value: &str) -> Option<String> {
        self.widget
            .handle_dataset(kind, value)
            .map(|e| e.to_string())
    }

    /// Handles a click on a keypad button by element ID
    pub fn click(&mut self, element_id: &str) -> Option<String> {
        self.widget.handle_click(element_id).map(|e| e.to_string())
    }

    /// The raw current operand
    #[wasm_bindgen(getter, js_name = currentOperand)]
    pub fn current_operand(&self) -> String {
        self.widget.state().current_operand().to_string()
    }

    /// The raw previous operand
    #[wasm_bindgen(getter, js_name = previousOperand)]
    pub fn previous_operand(&self) -> String {
        self.widget.state().previous_operand().to_string()
    }

    /// Both display texts as JSON (`{"current": ..., "previous": ...}`)
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.widget.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl BrowserCalculator {
    fn bind(config: CalculatorConfig) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let surface = BrowserSurface::from_window(window)?;
        Ok(Self {
            widget: CalculatorWidget::with_state(CalculatorState::with_config(config), surface),
        })
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Tax calculator WASM initialized".into());
}
