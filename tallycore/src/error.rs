//! Error taxonomy for the calculator core.
//!
//! Every error is caught at the key-routing boundary (`keys::press`),
//! converted to its user-facing message, and followed by a full engine
//! reset. There is no partial-state recovery and no retry; errors are never
//! fatal, the window stays open and usable afterwards.

use thiserror::Error;

/// Everything that can go wrong while handling a key press.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The entry buffer does not parse as a decimal number.
    #[error("Invalid number format!")]
    BadNumber,

    /// Division with a zero operand.
    #[error("Error: Cannot divide by zero")]
    DivideByZero,

    /// `=` pressed with nothing typed.
    #[error("No operation entered!")]
    EmptyOperand,

    /// Catch-all: a label no keypad has, or a scientific key pressed on a
    /// basic keypad.
    #[error("An error occurred: unknown key \"{0}\"")]
    UnknownKey(String),
}
