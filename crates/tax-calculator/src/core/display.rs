//! Display sync: what the two text surfaces show for a given state

use serde::{Deserialize, Serialize};

use crate::core::{format_number, CalculatorState};

/// Rendered text of both display surfaces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Main display: the formatted current operand
    pub current: String,
    /// Secondary display: pending operand and operator, or empty
    pub previous: String,
}

impl DisplaySnapshot {
    /// Renders a state. Pure; the state is not touched.
    #[must_use]
    pub fn of(state: &CalculatorState) -> Self {
        let previous = match state.operation() {
            Some(op) => format!("{} {}", format_number(state.previous_operand()), op.symbol()),
            None => String::new(),
        };
        Self {
            current: format_number(state.current_operand()),
            previous,
        }
    }

    /// Writes both texts to a surface
    pub fn write_to<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.set_current_operand(&self.current);
        surface.set_previous_operand(&self.previous);
    }
}

/// Output side of the widget: two text surfaces and an alert channel
pub trait DisplaySurface {
    /// Replaces the text of the current-operand surface
    fn set_current_operand(&mut self, text: &str);

    /// Replaces the text of the previous-operand surface
    fn set_previous_operand(&mut self, text: &str);

    /// Shows a blocking notification to the user
    fn alert(&mut self, message: &str);
}
