//! Unified Calculator Driver
//!
//! **Write the scenario once, run it against every frontend.** The
//! `verify_*` functions below drive any [`CalculatorDriver`] through button
//! presses and check what the two display surfaces and the alert channel
//! show. [`HeadlessDriver`] runs them against the bare state;
//! [`crate::wasm::WasmDriver`] runs them through the widget and mock DOM.

use crate::core::{CalcError, CalculatorState, Command, DisplaySnapshot, Operation};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, command: Command) -> Option<CalcError>;

    /// Text of the current-operand surface
    fn current_display(&self) -> String;

    /// Text of the previous-operand surface
    fn previous_display(&self) -> String;

    /// Alert messages shown so far, oldest first
    fn alerts(&self) -> Vec<String>;

    /// Presses a sequence of buttons, returning the last error produced
    fn press_all(&mut self, commands: &[Command]) -> Option<CalcError> {
        commands
            .iter()
            .fold(None, |last, &command| self.press(command).or(last))
    }

    /// Presses the digit and decimal buttons spelling `number`
    fn type_number(&mut self, number: &str) -> Option<CalcError> {
        let mut last = None;
        for ch in number.chars() {
            let outcome = match Command::from_dataset("number", ch.encode_utf8(&mut [0; 4])) {
                Ok(command) => self.press(command),
                Err(err) => Some(err),
            };
            last = outcome.or(last);
        }
        last
    }
}

/// Driver over the bare state, with alerts collected in memory
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    state: CalculatorState,
    alerts: Vec<String>,
}

impl HeadlessDriver {
    /// Creates a driver with a fresh state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver around an existing state
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            alerts: Vec::new(),
        }
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, command: Command) -> Option<CalcError> {
        let err = self.state.apply(command).err()?;
        if let Some(message) = err.user_message() {
            self.alerts.push(message.to_string());
        }
        Some(err)
    }

    fn current_display(&self) -> String {
        DisplaySnapshot::of(&self.state).current
    }

    fn previous_display(&self) -> String {
        DisplaySnapshot::of(&self.state).previous
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.clone()
    }
}

// ===== Unified Scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies leading-zero suppression and the single decimal point
pub fn verify_entry_rules<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    assert_eq!(driver.current_display(), "0");

    driver.type_number("007");
    assert_eq!(driver.current_display(), "7");

    driver.type_number("..5.");
    assert_eq!(driver.current_display(), "7.5");

    driver.press(Command::Clear);
    driver.type_number(".25");
    assert_eq!(driver.current_display(), "0.25");
    driver.press(Command::Clear);
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);

    driver.type_number("3");
    driver.press(Command::Operator(Operation::Add));
    assert_eq!(driver.previous_display(), "3 +");
    assert_eq!(driver.current_display(), "0");

    driver.type_number("4");
    driver.press(Command::Operator(Operation::Multiply));
    assert_eq!(driver.previous_display(), "7 ×");

    driver.type_number("2");
    driver.press(Command::Calculate);
    assert_eq!(driver.current_display(), "14");
    assert_eq!(driver.previous_display(), "");
    driver.press(Command::Clear);
}

/// Verifies that dividing by zero alerts once and changes nothing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    let alerts_before = driver.alerts().len();

    driver.type_number("5");
    driver.press(Command::Operator(Operation::Divide));
    driver.type_number("0");
    let err = driver.press(Command::Calculate);

    assert_eq!(err, Some(CalcError::DivisionByZero));
    assert_eq!(driver.alerts().len(), alerts_before + 1);
    assert_eq!(driver.current_display(), "0");
    assert_eq!(driver.previous_display(), "5 ÷");
    driver.press(Command::Clear);
}

/// Verifies tax include/exclude on a value with few significant digits
pub fn verify_tax_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);

    driver.type_number("100");
    driver.press(Command::TaxInclude);
    assert_eq!(driver.current_display(), "110");

    driver.press(Command::TaxExclude);
    assert_eq!(driver.current_display(), "100");
    driver.press(Command::Clear);
}

/// Verifies the digit limit on entry and on results
pub fn verify_digit_limit<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);

    driver.type_number("1234567890123");
    assert_eq!(driver.current_display(), "123,456,789,012");
    driver.press(Command::Clear);

    driver.type_number("999999999999");
    driver.press(Command::Operator(Operation::Add));
    driver.type_number("234567890124");
    driver.press(Command::Calculate);
    assert_eq!(driver.current_display(), "123,456,789,012");
    driver.press(Command::Clear);
}

/// Verifies thousands grouping with a fraction
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    driver.type_number("1234567.89");
    assert_eq!(driver.current_display(), "1,234,567.89");
    driver.press(Command::Clear);
}

/// Complete verification suite - runs all scenarios
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_entry_rules(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_tax_round_trip(driver);
    verify_digit_limit(driver);
    verify_formatting(driver);
}
