//! Input router — maps button labels to engine calls.
//!
//! This is the single boundary between the presentation shell and the
//! engine: every press comes in as the button's label string, and every
//! outcome goes back out as a display string plus an optional user-facing
//! error message. On any error the engine is fully reset.
//!
//! The routing itself is a pure synchronous function of (engine, label),
//! so the whole calculator is testable without a UI.

use crate::engine::{BinaryOp, Engine, UnaryFn};
use crate::error::CalcError;
use crate::format::format_value;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(BinaryOp),
    Equals,
    Unary(UnaryFn),
    Clear,
}

impl Key {
    /// Decode a button label. Returns `None` for labels no keypad has.
    pub fn parse(label: &str) -> Option<Key> {
        let key = match label {
            "." => Key::Point,
            "+" => Key::Operator(BinaryOp::Add),
            "-" => Key::Operator(BinaryOp::Subtract),
            "*" => Key::Operator(BinaryOp::Multiply),
            "/" => Key::Operator(BinaryOp::Divide),
            "x^n" => Key::Operator(BinaryOp::Power),
            "=" => Key::Equals,
            "C" => Key::Clear,
            "sin" => Key::Unary(UnaryFn::Sin),
            "cos" => Key::Unary(UnaryFn::Cos),
            "sqrt" => Key::Unary(UnaryFn::Sqrt),
            "log" => Key::Unary(UnaryFn::Log10),
            "x^2" => Key::Unary(UnaryFn::Square),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// What the shell shows after a press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text for the display field.
    pub display: String,
    /// User-facing error message, shown as a modal dialog.
    pub error: Option<String>,
}

/// Route one button press through the engine.
///
/// On error the engine is reset and the display is cleared, matching the
/// original's recovery path. Scientific-key errors are reported like any
/// other (the original swallowed them silently; see DESIGN.md).
pub fn press(engine: &mut Engine, label: &str) -> Outcome {
    match dispatch(engine, label) {
        Ok(display) => Outcome {
            display,
            error: None,
        },
        Err(err) => {
            engine.reset();
            Outcome {
                display: String::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// Returns the display text after the press: the live buffer while typing,
/// the formatted accumulator after a fold, nothing after a clear.
fn dispatch(engine: &mut Engine, label: &str) -> Result<String, CalcError> {
    let key = Key::parse(label).ok_or_else(|| CalcError::UnknownKey(label.to_string()))?;

    let scientific_only = matches!(key, Key::Unary(_) | Key::Operator(BinaryOp::Power));
    if scientific_only && !engine.keyset().scientific() {
        return Err(CalcError::UnknownKey(label.to_string()));
    }

    match key {
        Key::Digit(c) => {
            engine.append(c);
            Ok(engine.input().to_string())
        }
        Key::Point => {
            engine.append('.');
            Ok(engine.input().to_string())
        }
        Key::Operator(op) => {
            engine.select_operator(op)?;
            Ok(format_value(engine.accumulator()))
        }
        Key::Equals => {
            let result = engine.evaluate()?;
            Ok(format_value(result))
        }
        Key::Unary(f) => {
            let result = engine.apply_unary(f)?;
            Ok(format_value(result))
        }
        Key::Clear => {
            engine.reset();
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::KeySet;

    fn run(engine: &mut Engine, labels: &[&str]) -> Outcome {
        let mut out = Outcome {
            display: String::new(),
            error: None,
        };
        for label in labels {
            out = press(engine, label);
        }
        out
    }

    #[test]
    fn seven_plus_three_equals_ten() {
        let mut e = Engine::new(KeySet::Basic);
        let out = run(&mut e, &["7", "+", "3", "="]);
        assert_eq!(out.display, "10.0");
        assert_eq!(out.error, None);
    }

    #[test]
    fn typing_shows_the_live_buffer() {
        let mut e = Engine::new(KeySet::Basic);
        assert_eq!(press(&mut e, "1").display, "1");
        assert_eq!(press(&mut e, "2").display, "12");
        assert_eq!(press(&mut e, ".").display, "12.");
        assert_eq!(press(&mut e, "5").display, "12.5");
    }

    #[test]
    fn operator_press_displays_the_folded_accumulator() {
        let mut e = Engine::new(KeySet::Basic);
        press(&mut e, "7");
        assert_eq!(press(&mut e, "+").display, "7.0");
    }

    #[test]
    fn clear_empties_the_display_and_the_state() {
        let mut e = Engine::new(KeySet::Basic);
        run(&mut e, &["7", "+", "3", "="]);
        let out = press(&mut e, "C");
        assert_eq!(out.display, "");
        assert_eq!(out.error, None);
        assert_eq!(e.accumulator(), 0.0);
        assert_eq!(e.pending(), BinaryOp::None);
    }

    #[test]
    fn divide_by_zero_shows_the_message_and_resets() {
        let mut e = Engine::new(KeySet::Basic);
        let out = run(&mut e, &["8", "/", "0", "="]);
        assert_eq!(out.display, "");
        assert_eq!(out.error.as_deref(), Some("Error: Cannot divide by zero"));
        assert_eq!(e.accumulator(), 0.0);
        assert_eq!(e.pending(), BinaryOp::None);
        assert_eq!(e.input(), "");
    }

    #[test]
    fn equals_with_nothing_typed_shows_the_message() {
        let mut e = Engine::new(KeySet::Basic);
        let out = press(&mut e, "=");
        assert_eq!(out.error.as_deref(), Some("No operation entered!"));
    }

    #[test]
    fn double_decimal_point_surfaces_as_bad_number() {
        let mut e = Engine::new(KeySet::Basic);
        let out = run(&mut e, &["2", ".", ".", "5", "="]);
        assert_eq!(out.error.as_deref(), Some("Invalid number format!"));
        assert_eq!(e.input(), "");
    }

    #[test]
    fn scientific_sine_in_degrees() {
        let mut e = Engine::new(KeySet::Scientific);
        let out = run(&mut e, &["9", "0", "sin"]);
        assert_eq!(out.display, "1.0");
        assert_eq!(out.error, None);
    }

    #[test]
    fn power_key_behaves_like_a_binary_operator() {
        let mut e = Engine::new(KeySet::Scientific);
        let out = run(&mut e, &["2", "x^n", "1", "0", "="]);
        assert_eq!(out.display, "1024.0");
    }

    #[test]
    fn scientific_keys_are_rejected_on_the_basic_keypad() {
        let mut e = Engine::new(KeySet::Basic);
        let out = press(&mut e, "sin");
        assert_eq!(
            out.error.as_deref(),
            Some("An error occurred: unknown key \"sin\"")
        );

        let out = press(&mut e, "x^n");
        assert_eq!(
            out.error.as_deref(),
            Some("An error occurred: unknown key \"x^n\"")
        );
    }

    #[test]
    fn unary_errors_are_shown_not_swallowed() {
        let mut e = Engine::new(KeySet::Scientific);
        let out = press(&mut e, "sqrt");
        assert_eq!(out.error.as_deref(), Some("Invalid number format!"));
    }

    #[test]
    fn unknown_label_is_the_catch_all() {
        let mut e = Engine::new(KeySet::Scientific);
        let out = press(&mut e, "%");
        assert_eq!(
            out.error.as_deref(),
            Some("An error occurred: unknown key \"%\"")
        );
    }

    #[test]
    fn key_parsing() {
        assert_eq!(Key::parse("7"), Some(Key::Digit('7')));
        assert_eq!(Key::parse("."), Some(Key::Point));
        assert_eq!(Key::parse("+"), Some(Key::Operator(BinaryOp::Add)));
        assert_eq!(Key::parse("x^n"), Some(Key::Operator(BinaryOp::Power)));
        assert_eq!(Key::parse("x^2"), Some(Key::Unary(UnaryFn::Square)));
        assert_eq!(Key::parse("C"), Some(Key::Clear));
        assert_eq!(Key::parse("%"), None);
        assert_eq!(Key::parse("12"), None);
        assert_eq!(Key::parse(""), None);
    }

    #[test]
    fn window_stays_usable_after_an_error() {
        let mut e = Engine::new(KeySet::Basic);
        run(&mut e, &["8", "/", "0", "="]);
        let out = run(&mut e, &["6", "*", "7", "="]);
        assert_eq!(out.display, "42.0");
        assert_eq!(out.error, None);
    }
}
