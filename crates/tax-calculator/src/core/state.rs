//! The calculator state machine

use tracing::{debug, trace, warn};

use crate::core::digits::{limit_digits, parse_operand, significant_digits};
use crate::core::{CalcError, CalcResult, CalculatorConfig, Command, Operation};

/// Operand entry, operator chaining and tax conversion state.
///
/// Operands are canonical decimal strings. `previous_operand` is empty when no
/// left operand is pending; `current_operand` is empty only right after an
/// operator was chosen.
///
/// ```
/// use tax_calculator::core::{CalculatorState, Operation};
///
/// let mut state = CalculatorState::new();
/// state.append_number('3').unwrap();
/// state.choose_operation(Operation::Add).unwrap();
/// state.append_number('4').unwrap();
/// state.choose_operation(Operation::Multiply).unwrap();
/// state.append_number('2').unwrap();
/// state.compute().unwrap();
/// assert_eq!(state.current_operand(), "14");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    previous_operand: String,
    current_operand: String,
    operation: Option<Operation>,
    config: CalculatorConfig,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a state with the default tax rate and digit limit
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a state with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            previous_operand: String::new(),
            current_operand: "0".to_string(),
            operation: None,
            config,
        }
    }

    /// The operand being typed or just computed
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The operand saved when the pending operator was chosen
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The pending operator, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Resets both operands and the pending operator
    pub fn clear(&mut self) {
        self.previous_operand.clear();
        self.current_operand = "0".to_string();
        self.operation = None;
    }

    /// Appends one keypad token (`'0'..='9'` or `'.'`) to the current operand.
    ///
    /// Digits beyond the digit limit and a second decimal point are ignored.
    /// A leading `"0"` is replaced by the first digit typed.
    pub fn append_number(&mut self, token: char) -> CalcResult<()> {
        if !token.is_ascii_digit() && token != '.' {
            return Err(CalcError::invalid_token(token.to_string()));
        }

        if token != '.' && significant_digits(&self.current_operand) >= self.config.max_digits {
            trace!(operand = %self.current_operand, "digit limit reached");
            return Ok(());
        }
        if token == '.' && self.current_operand.contains('.') {
            return Ok(());
        }

        if self.current_operand == "0" && token != '.' {
            self.current_operand.clear();
        }
        self.current_operand.push(token);
        Ok(())
    }

    /// Selects an operator, collapsing any pending operation first.
    ///
    /// Does nothing while the current operand is empty. When a chain is in
    /// progress the pending operation is computed before `op` is recorded, so
    /// `3 + 4 × 2` evaluates as `(3 + 4) × 2`. If that computation fails the
    /// operator is still recorded and the failure is returned.
    pub fn choose_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.current_operand.is_empty() {
            return Ok(());
        }

        let collapsed = if self.previous_operand.is_empty() {
            Ok(())
        } else {
            self.compute()
        };

        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
        collapsed
    }

    /// Applies the pending operator to the two operands.
    ///
    /// On failure the state is left untouched.
    pub fn compute(&mut self) -> CalcResult<()> {
        let lhs = parse_operand(&self.previous_operand)?;
        let rhs = parse_operand(&self.current_operand)?;
        let op = self.operation.ok_or(CalcError::NoPendingOperation)?;

        let raw = op.apply(lhs, rhs).map_err(|e| {
            warn!(%lhs, %rhs, "division by zero rejected");
            e
        })?;
        let result = self.limit(raw)?;
        debug!(%lhs, %rhs, operation = op.token(), %result, "computed");

        self.current_operand = result;
        self.operation = None;
        self.previous_operand.clear();
        Ok(())
    }

    /// Adds (`include_tax`) or removes the fixed-rate tax from the current operand.
    ///
    /// The pending operator and previous operand are left alone.
    pub fn calculate_tax(&mut self, include_tax: bool) -> CalcResult<()> {
        let amount = parse_operand(&self.current_operand)?;
        let multiplier = self.config.tax_multiplier();
        let raw = if include_tax {
            amount * multiplier
        } else {
            amount / multiplier
        };

        let result = self.limit(raw)?;
        debug!(%amount, include_tax, %result, "tax converted");
        self.current_operand = result;
        Ok(())
    }

    /// Routes one command to the matching operation
    pub fn apply(&mut self, command: Command) -> CalcResult<()> {
        match command {
            Command::Digit(d) => {
                let token = char::from_digit(u32::from(d), 10)
                    .ok_or_else(|| CalcError::invalid_token(d.to_string()))?;
                self.append_number(token)
            }
            Command::Decimal => self.append_number('.'),
            Command::Operator(op) => self.choose_operation(op),
            Command::Calculate => self.compute(),
            Command::Clear => {
                self.clear();
                Ok(())
            }
            Command::TaxInclude => self.calculate_tax(true),
            Command::TaxExclude => self.calculate_tax(false),
        }
    }

    fn limit(&self, raw: f64) -> CalcResult<String> {
        if !raw.is_finite() {
            return Err(CalcError::Overflow);
        }
        Ok(limit_digits(raw, self.config.max_digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        for ch in input.chars() {
            state.append_number(ch).unwrap();
        }
        state
    }

    fn assert_triple(state: &CalculatorState, previous: &str, current: &str, op: Option<Operation>) {
        assert_eq!(state.previous_operand(), previous);
        assert_eq!(state.current_operand(), current);
        assert_eq!(state.operation(), op);
    }

    // ===== Constructor tests =====

    #[test]
    fn test_new_defaults() {
        let state = CalculatorState::new();
        assert_triple(&state, "", "0", None);
        assert_eq!(state.config(), &CalculatorConfig::default());
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    // ===== clear =====

    #[test]
    fn test_clear_resets_everything() {
        let mut state = typed("42");
        state.choose_operation(Operation::Divide).unwrap();
        state.append_number('7').unwrap();
        state.clear();
        assert_triple(&state, "", "0", None);
    }

    // ===== append_number =====

    #[test]
    fn test_append_replaces_leading_zero() {
        assert_eq!(typed("7").current_operand(), "7");
        assert_eq!(typed("007").current_operand(), "7");
    }

    #[test]
    fn test_append_builds_number() {
        assert_eq!(typed("1234").current_operand(), "1234");
    }

    #[test]
    fn test_append_decimal_after_zero() {
        assert_eq!(typed(".5").current_operand(), "0.5");
        assert_eq!(typed("0.05").current_operand(), "0.05");
    }

    #[test]
    fn test_append_second_point_ignored() {
        assert_eq!(typed("1.2.3").current_operand(), "1.23");
        assert_eq!(typed("1...").current_operand(), "1.");
    }

    #[test]
    fn test_append_stops_at_digit_limit() {
        assert_eq!(typed("1234567890123").current_operand(), "123456789012");
        assert_eq!(typed("123456.7890123").current_operand(), "123456.789012");
    }

    #[test]
    fn test_append_point_allowed_at_digit_limit() {
        assert_eq!(typed("123456789012.").current_operand(), "123456789012.");
        assert_eq!(typed("123456789012.3").current_operand(), "123456789012.");
    }

    #[test]
    fn test_append_rejects_other_characters() {
        let mut state = CalculatorState::new();
        assert_eq!(state.append_number('x'), Err(CalcError::invalid_token("x")));
        assert_eq!(state.current_operand(), "0");
    }

    #[test]
    fn test_append_after_operator_starts_fresh() {
        let mut state = typed("5");
        state.choose_operation(Operation::Add).unwrap();
        state.append_number('.').unwrap();
        assert_eq!(state.current_operand(), ".");
    }

    #[test]
    fn test_append_after_result_extends_it() {
        let mut state = typed("2");
        state.choose_operation(Operation::Add).unwrap();
        state.append_number('3').unwrap();
        state.compute().unwrap();
        state.append_number('1').unwrap();
        assert_eq!(state.current_operand(), "51");
    }

    // ===== choose_operation =====

    #[test]
    fn test_choose_operation_moves_operand() {
        let mut state = typed("12");
        state.choose_operation(Operation::Subtract).unwrap();
        assert_triple(&state, "12", "", Some(Operation::Subtract));
    }

    #[test]
    fn test_choose_operation_with_empty_current_is_noop() {
        let mut state = typed("12");
        state.choose_operation(Operation::Add).unwrap();
        state.choose_operation(Operation::Multiply).unwrap();
        assert_triple(&state, "12", "", Some(Operation::Add));
    }

    #[test]
    fn test_choose_operation_chains_left_to_right() {
        let mut state = typed("3");
        state.choose_operation(Operation::Add).unwrap();
        state.append_number('4').unwrap();
        state.choose_operation(Operation::Multiply).unwrap();
        assert_triple(&state, "7", "", Some(Operation::Multiply));
        state.append_number('2').unwrap();
        state.compute().unwrap();
        assert_triple(&state, "", "14", None);
    }

    #[test]
    fn test_choose_operation_after_failed_chain_still_records_operator() {
        let mut state = typed("5");
        state.choose_operation(Operation::Divide).unwrap();
        state.append_number('0').unwrap();
        let result = state.choose_operation(Operation::Add);
        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_triple(&state, "0", "", Some(Operation::Add));
    }

    // ===== compute =====

    #[test]
    fn test_compute_all_operations() {
        for (op, expected) in [
            (Operation::Add, "12"),
            (Operation::Subtract, "8"),
            (Operation::Multiply, "20"),
            (Operation::Divide, "5"),
        ] {
            let mut state = typed("10");
            state.choose_operation(op).unwrap();
            state.append_number('2').unwrap();
            state.compute().unwrap();
            assert_triple(&state, "", expected, None);
        }
    }

    #[test]
    fn test_compute_negative_result() {
        let mut state = typed("3");
        state.choose_operation(Operation::Subtract).unwrap();
        state.append_number('5').unwrap();
        state.compute().unwrap();
        assert_eq!(state.current_operand(), "-2");
    }

    #[test]
    fn test_compute_division_by_zero_leaves_state() {
        let mut state = typed("5");
        state.choose_operation(Operation::Divide).unwrap();
        state.append_number('0').unwrap();
        assert_eq!(state.compute(), Err(CalcError::DivisionByZero));
        assert_triple(&state, "5", "0", Some(Operation::Divide));
    }

    #[test]
    fn test_compute_division_by_zero_point_zero() {
        let mut state = typed("5");
        state.choose_operation(Operation::Divide).unwrap();
        for ch in "0.0".chars() {
            state.append_number(ch).unwrap();
        }
        assert_eq!(state.compute(), Err(CalcError::DivisionByZero));
        assert_eq!(state.current_operand(), "0.0");
    }

    #[test]
    fn test_compute_without_operator_is_noop() {
        let mut state = typed("5");
        assert!(state.compute().is_err());
        assert_triple(&state, "", "5", None);
    }

    #[test]
    fn test_compute_right_after_operator_is_noop() {
        let mut state = typed("5");
        state.choose_operation(Operation::Add).unwrap();
        assert_eq!(state.compute(), Err(CalcError::invalid_operand("")));
        assert_triple(&state, "5", "", Some(Operation::Add));
    }

    #[test]
    fn test_compute_with_lone_point_is_noop() {
        let mut state = typed("5");
        state.choose_operation(Operation::Add).unwrap();
        state.append_number('.').unwrap();
        assert_eq!(state.compute(), Err(CalcError::invalid_operand(".")));
        assert_triple(&state, "5", ".", Some(Operation::Add));
    }

    #[test]
    fn test_compute_truncates_thirteen_digit_integer() {
        let mut state = typed("999999999999");
        state.choose_operation(Operation::Add).unwrap();
        for ch in "234567890124".chars() {
            state.append_number(ch).unwrap();
        }
        state.compute().unwrap();
        assert_eq!(state.current_operand(), "123456789012");
    }

    #[test]
    fn test_compute_rounds_long_fraction() {
        let mut state = typed("1");
        state.choose_operation(Operation::Divide).unwrap();
        state.append_number('3').unwrap();
        state.compute().unwrap();
        assert_eq!(state.current_operand(), "0.33333333333");
    }

    #[test]
    fn test_compute_decimal_operands() {
        let mut state = typed("0.1");
        state.choose_operation(Operation::Add).unwrap();
        for ch in "0.2".chars() {
            state.append_number(ch).unwrap();
        }
        state.compute().unwrap();
        assert_eq!(state.current_operand(), "0.3");
    }

    #[test]
    fn test_compute_zero_product_is_unsigned() {
        let mut state = typed("0");
        state.choose_operation(Operation::Subtract).unwrap();
        state.append_number('5').unwrap();
        state.choose_operation(Operation::Multiply).unwrap();
        state.append_number('0').unwrap();
        state.compute().unwrap();
        assert_eq!(state.current_operand(), "0");
    }

    #[test]
    fn test_compute_overflow_is_noop() {
        let config = CalculatorConfig {
            max_digits: 400,
            ..CalculatorConfig::default()
        };
        let mut state = CalculatorState::with_config(config);
        for _ in 0..300 {
            state.append_number('9').unwrap();
        }
        state.choose_operation(Operation::Multiply).unwrap();
        for _ in 0..300 {
            state.append_number('9').unwrap();
        }
        assert_eq!(state.compute(), Err(CalcError::Overflow));
        assert_eq!(state.operation(), Some(Operation::Multiply));
    }

    // ===== calculate_tax =====

    #[test]
    fn test_tax_include() {
        let mut state = typed("100");
        state.calculate_tax(true).unwrap();
        assert_eq!(state.current_operand(), "110");
    }

    #[test]
    fn test_tax_exclude() {
        let mut state = typed("110");
        state.calculate_tax(false).unwrap();
        assert_eq!(state.current_operand(), "100");
    }

    #[test]
    fn test_tax_round_trip_small_value() {
        let mut state = typed("100");
        state.calculate_tax(true).unwrap();
        state.calculate_tax(false).unwrap();
        assert_eq!(state.current_operand(), "100");
    }

    #[test]
    fn test_tax_exclude_rounds() {
        let mut state = typed("100");
        state.calculate_tax(false).unwrap();
        assert_eq!(state.current_operand(), "90.9090909091");
    }

    #[test]
    fn test_tax_keeps_pending_operation() {
        let mut state = typed("8");
        state.choose_operation(Operation::Add).unwrap();
        state.append_number('2').unwrap();
        state.calculate_tax(true).unwrap();
        assert_triple(&state, "8", "2.2", Some(Operation::Add));
    }

    #[test]
    fn test_tax_on_empty_operand_is_noop() {
        let mut state = typed("8");
        state.choose_operation(Operation::Add).unwrap();
        assert_eq!(
            state.calculate_tax(true),
            Err(CalcError::invalid_operand(""))
        );
        assert_triple(&state, "8", "", Some(Operation::Add));
    }

    #[test]
    fn test_tax_custom_rate() {
        let config = CalculatorConfig {
            tax_rate: 0.08,
            ..CalculatorConfig::default()
        };
        let mut state = CalculatorState::with_config(config);
        for ch in "1000".chars() {
            state.append_number(ch).unwrap();
        }
        state.calculate_tax(true).unwrap();
        assert_eq!(state.current_operand(), "1080");
    }

    // ===== apply =====

    #[test]
    fn test_apply_routes_commands() {
        let mut state = CalculatorState::new();
        for command in [
            Command::Digit(1),
            Command::Decimal,
            Command::Digit(5),
            Command::Operator(Operation::Multiply),
            Command::Digit(4),
            Command::Calculate,
        ] {
            state.apply(command).unwrap();
        }
        assert_eq!(state.current_operand(), "6");

        state.apply(Command::TaxInclude).unwrap();
        assert_eq!(state.current_operand(), "6.6");
        state.apply(Command::TaxExclude).unwrap();
        assert_eq!(state.current_operand(), "6");

        state.apply(Command::Clear).unwrap();
        assert_triple(&state, "", "0", None);
    }

    #[test]
    fn test_apply_rejects_out_of_range_digit() {
        let mut state = CalculatorState::new();
        assert!(matches!(
            state.apply(Command::Digit(10)),
            Err(CalcError::InvalidToken { .. })
        ));
    }
}
