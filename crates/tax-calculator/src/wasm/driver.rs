//! WASM Driver - Unified Testing Interface
//!
//! Implements [`CalculatorDriver`] by clicking keypad buttons on a
//! [`MockDom`], so the shared scenarios exercise the full widget path:
//! click event, keypad lookup, command dispatch, alert, render.

use super::calculator::CalculatorWidget;
use super::dom::{DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
use super::keypad::{Keypad, MockDomKeypadExt};
use crate::core::{CalcError, CalculatorConfig, CalculatorState, Command};
use crate::driver::CalculatorDriver;

/// WASM Driver wrapping the widget and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    widget: CalculatorWidget<MockDom>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a calculator DOM with the keypad attached
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut dom = MockDom::calculator();
        dom.add_keypad(&Keypad::new());
        let state = CalculatorState::with_config(config);
        Self {
            widget: CalculatorWidget::with_state(state, dom),
        }
    }

    /// Returns the widget
    #[must_use]
    pub fn widget(&self) -> &CalculatorWidget<MockDom> {
        &self.widget
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.widget.surface()
    }

    /// Simulates clicking an element
    pub fn click(&mut self, element_id: &str) -> Option<CalcError> {
        self.widget
            .surface_mut()
            .dispatch_event(DomEvent::click(element_id));
        self.widget.handle_click(element_id)
    }

    /// Text of the current-operand element
    #[must_use]
    pub fn current_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(CURRENT_OPERAND_ID)
    }

    /// Text of the previous-operand element
    #[must_use]
    pub fn previous_element_text(&self) -> Option<&str> {
        self.dom().get_element_text(PREVIOUS_OPERAND_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, command: Command) -> Option<CalcError> {
        let id = self
            .widget
            .keypad()
            .find_button_by_command(command)
            .map(|btn| btn.id.clone());
        match id {
            Some(id) => self.click(&id),
            // Commands without a button (out-of-range digits) bypass the DOM
            None => self.widget.handle(command),
        }
    }

    fn current_display(&self) -> String {
        self.current_element_text().unwrap_or_default().to_string()
    }

    fn previous_display(&self) -> String {
        self.previous_element_text().unwrap_or_default().to_string()
    }

    fn alerts(&self) -> Vec<String> {
        self.dom().alerts().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operation, DIVISION_BY_ZERO_MESSAGE};
    use crate::driver::{
        run_all_scenarios, verify_chaining, verify_digit_limit, verify_division_by_zero,
        verify_entry_rules, verify_formatting, verify_tax_round_trip,
    };

    // ===== Constructor tests =====

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert_eq!(driver.current_display(), "0");
        assert!(driver.previous_display().is_empty());
        assert!(driver.dom().get_element("btn-calculate").is_some());
    }

    #[test]
    fn test_wasm_driver_with_config() {
        let config = CalculatorConfig {
            max_digits: 4,
            ..CalculatorConfig::default()
        };
        let mut driver = WasmDriver::with_config(config);
        driver.type_number("123456");
        assert_eq!(driver.current_display(), "1,234");
    }

    // ===== Interaction tests =====

    #[test]
    fn test_click_records_dom_events() {
        let mut driver = WasmDriver::new();
        driver.click("btn-4");
        driver.click("btn-add");
        assert_eq!(
            driver.dom().event_history(),
            [DomEvent::click("btn-4"), DomEvent::click("btn-add")]
        );
        assert_eq!(driver.previous_element_text(), Some("4 +"));
    }

    #[test]
    fn test_press_goes_through_keypad_buttons() {
        let mut driver = WasmDriver::new();
        driver.press(Command::Digit(9));
        driver.press(Command::Operator(Operation::Subtract));
        assert_eq!(driver.dom().event_history().len(), 2);
    }

    #[test]
    fn test_press_out_of_range_digit() {
        let mut driver = WasmDriver::new();
        let err = driver.press(Command::Digit(12));
        assert!(matches!(err, Some(CalcError::InvalidToken { .. })));
        assert!(driver.dom().event_history().is_empty());
    }

    #[test]
    fn test_division_by_zero_alert_in_dom() {
        let mut driver = WasmDriver::new();
        for id in ["btn-5", "btn-divide", "btn-0", "btn-calculate"] {
            driver.click(id);
        }
        assert_eq!(driver.alerts(), vec![DIVISION_BY_ZERO_MESSAGE.to_string()]);
        assert_eq!(driver.widget().state().previous_operand(), "5");
    }

    // ===== Unified Scenario Tests =====

    #[test]
    fn test_unified_entry_rules() {
        verify_entry_rules(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_division_by_zero() {
        verify_division_by_zero(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_tax_round_trip() {
        verify_tax_round_trip(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_digit_limit() {
        verify_digit_limit(&mut WasmDriver::new());
    }

    #[test]
    fn test_unified_formatting() {
        verify_formatting(&mut WasmDriver::new());
    }

    #[test]
    fn test_all_scenarios() {
        run_all_scenarios(&mut WasmDriver::new());
    }
}
