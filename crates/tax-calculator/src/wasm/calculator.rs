//! Widget controller
//!
//! Owns the state and an output surface. Each button press is one
//! [`CalculatorWidget::handle`] call: apply the command, alert on a
//! user-visible error, then render once.

use tracing::debug;

use super::keypad::Keypad;
use crate::core::{CalcError, CalculatorState, Command, DisplaySnapshot, DisplaySurface};

/// Calculator widget bound to a display surface
#[derive(Debug)]
pub struct CalculatorWidget<S> {
    state: CalculatorState,
    surface: S,
    keypad: Keypad,
}

impl<S: DisplaySurface> CalculatorWidget<S> {
    /// Creates a widget with a fresh state and renders it
    pub fn new(surface: S) -> Self {
        Self::with_state(CalculatorState::new(), surface)
    }

    /// Creates a widget around an existing state and renders it
    pub fn with_state(state: CalculatorState, surface: S) -> Self {
        let mut widget = Self {
            state,
            surface,
            keypad: Keypad::new(),
        };
        widget.render();
        widget
    }

    /// Applies one command and refreshes the surface.
    ///
    /// Returns the error the command produced, if any. A user-visible error
    /// has already been shown through the surface's alert channel.
    pub fn handle(&mut self, command: Command) -> Option<CalcError> {
        let outcome = self.state.apply(command).err();
        if let Some(err) = &outcome {
            match err.user_message() {
                Some(message) => self.surface.alert(message),
                None => debug!(?command, error = %err, "command ignored"),
            }
        }
        self.render();
        outcome
    }

    /// Handles a click on a keypad element; unknown IDs are ignored
    pub fn handle_click(&mut self, element_id: &str) -> Option<CalcError> {
        match self.keypad.handle_click(element_id) {
            Some(command) => self.handle(command),
            None => {
                debug!(element_id, "click on non-keypad element");
                None
            }
        }
    }

    /// Handles a `data-*` attribute token pair from the page markup
    pub fn handle_dataset(&mut self, kind: &str, value: &str) -> Option<CalcError> {
        match Command::from_dataset(kind, value) {
            Ok(command) => self.handle(command),
            Err(err) => {
                debug!(kind, value, "unrecognized button token");
                Some(err)
            }
        }
    }

    /// Writes the current snapshot to the surface
    pub fn render(&mut self) {
        self.snapshot().write_to(&mut self.surface);
    }

    /// What the surfaces show right now
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::of(&self.state)
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the output surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the output surface mutably
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
