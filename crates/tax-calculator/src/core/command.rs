//! Explicit command dispatch for keypad input

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operation};

/// One button press, routed to exactly one state operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append the decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Compute the pending operation (`=`)
    Calculate,
    /// Reset the calculator
    Clear,
    /// Add tax to the current operand
    TaxInclude,
    /// Remove tax from the current operand
    TaxExclude,
}

impl Command {
    /// Maps a `data-*` attribute of the keypad markup to a command.
    ///
    /// `kind` is the attribute name without the `data-` prefix:
    /// `number` (`"0"`..`"9"`, `"."`), `operator` (`"add"`, ...) or
    /// `action` (`"calculate"`, `"clear"`, `"tax-include"`, `"tax-exclude"`).
    pub fn from_dataset(kind: &str, value: &str) -> CalcResult<Self> {
        match kind {
            "number" => Self::from_number_token(value),
            "operator" => value.parse().map(Self::Operator),
            "action" => match value {
                "calculate" => Ok(Self::Calculate),
                "clear" => Ok(Self::Clear),
                "tax-include" => Ok(Self::TaxInclude),
                "tax-exclude" => Ok(Self::TaxExclude),
                _ => Err(CalcError::invalid_token(value)),
            },
            _ => Err(CalcError::invalid_token(format!("data-{kind}"))),
        }
    }

    fn from_number_token(value: &str) -> CalcResult<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::Decimal),
            (Some(ch), None) => ch
                .to_digit(10)
                .map(|d| Self::Digit(d as u8))
                .ok_or_else(|| CalcError::invalid_token(value)),
            _ => Err(CalcError::invalid_token(value)),
        }
    }

    /// Returns the `(kind, value)` data attribute pair for this command
    #[must_use]
    pub fn dataset(&self) -> (&'static str, String) {
        match self {
            Self::Digit(d) => ("number", d.to_string()),
            Self::Decimal => ("number", ".".to_string()),
            Self::Operator(op) => ("operator", op.token().to_string()),
            Self::Calculate => ("action", "calculate".to_string()),
            Self::Clear => ("action", "clear".to_string()),
            Self::TaxInclude => ("action", "tax-include".to_string()),
            Self::TaxExclude => ("action", "tax-exclude".to_string()),
        }
    }

    /// Returns the button label for this command
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Calculate => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::TaxInclude => "税込".to_string(),
            Self::TaxExclude => "税抜".to_string(),
        }
    }
}
