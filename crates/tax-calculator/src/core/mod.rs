//! Core calculator module
//!
//! Everything here is headless: no DOM, no browser, no globals. The widget
//! layer in [`crate::wasm`] owns a [`CalculatorState`] and renders it.

mod command;
pub mod digits;
mod display;
pub mod format;
mod operations;
mod state;

pub use command::Command;
pub use display::{DisplaySnapshot, DisplaySurface};
pub use format::format_number;
pub use operations::Operation;
pub use state::CalculatorState;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed tax rate applied by the tax-include / tax-exclude buttons (10%)
pub const TAX_RATE: f64 = 0.10;

/// Maximum number of significant digits an operand may hold
pub const MAX_DIGITS: usize = 12;

/// Message shown by the alert channel when a division by zero is attempted
pub const DIVISION_BY_ZERO_MESSAGE: &str = "0で割ることはできません";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Only [`CalcError::DivisionByZero`] is user-visible; every other variant is
/// recovered as a silent no-op by the widget controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand could not be read as a decimal number
    #[error("Invalid operand: {operand:?}")]
    InvalidOperand {
        /// The operand text that failed to parse
        operand: String,
    },

    /// `compute` was requested without a pending operator
    #[error("No pending operation")]
    NoPendingOperation,

    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,

    /// An input token that maps to no calculator action
    #[error("Invalid token: {token:?}")]
    InvalidToken {
        /// The rejected token
        token: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl CalcError {
    /// Creates an invalid operand error
    pub fn invalid_operand(operand: impl Into<String>) -> Self {
        Self::InvalidOperand {
            operand: operand.into(),
        }
    }

    /// Creates an invalid token error
    pub fn invalid_token(token: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
        }
    }

    /// Returns the fixed message to show the user, if this error is surfaced
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::DivisionByZero => Some(DIVISION_BY_ZERO_MESSAGE),
            _ => None,
        }
    }

    /// Returns true if this error must be reported through the alert channel
    #[must_use]
    pub const fn is_user_visible(&self) -> bool {
        self.user_message().is_some()
    }
}

/// Calculator configuration
///
/// Defaults to [`TAX_RATE`] and [`MAX_DIGITS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Tax rate as a fraction (0.10 = 10%)
    pub tax_rate: f64,
    /// Significant digit limit for operands and results
    pub max_digits: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            tax_rate: TAX_RATE,
            max_digits: MAX_DIGITS,
        }
    }
}

impl CalculatorConfig {
    /// Loads a configuration from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CalcError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a calculator
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_digits == 0 {
            return Err(CalcError::InvalidConfig {
                reason: "max_digits must be at least 1".to_string(),
            });
        }
        if !self.tax_rate.is_finite() || self.tax_rate <= -1.0 {
            return Err(CalcError::InvalidConfig {
                reason: format!("tax_rate {} is out of range", self.tax_rate),
            });
        }
        Ok(())
    }

    /// The multiplier used for tax conversion (`1 + tax_rate`)
    #[must_use]
    pub fn tax_multiplier(&self) -> f64 {
        1.0 + self.tax_rate
    }
}
